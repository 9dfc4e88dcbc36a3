//! In-memory collaborators
//!
//! Stand-ins for the window, keyboard, speakers and image loader. The demo
//! runner uses them to play sessions without a display; tests use them to
//! drive the loop controller frame by frame.

use std::collections::{HashMap, VecDeque};
use std::mem;

use glam::Vec2;

use super::{Event, InputSource, Key};
use crate::assets::{AssetError, AssetProvider, ImageHandle, ImageInfo};
use crate::audio::{AudioProvider, Track};
use crate::renderer::{Anchor, Font, Renderer};

#[derive(Debug, Clone, Default)]
struct ScriptFrame {
    events: Vec<Event>,
    held: u8,
}

/// Plays back a fixed list of per-frame event batches.
///
/// Once the script is used up every poll returns `Event::Quit`, so a test can
/// never hang in a blocking wait.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ScriptFrame>,
    held: u8,
    pointer: Vec2,
    polls: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// One frame delivering `events` with no mouse button held
    pub fn frame(self, events: impl IntoIterator<Item = Event>) -> Self {
        self.frame_holding(events, 0)
    }

    /// One frame delivering `events` while buttons in `held` are down
    pub fn frame_holding(mut self, events: impl IntoIterator<Item = Event>, held: u8) -> Self {
        self.frames.push_back(ScriptFrame {
            events: events.into_iter().collect(),
            held,
        });
        self
    }

    /// `n` frames without input
    pub fn idle(mut self, n: usize) -> Self {
        self.frames
            .extend(std::iter::repeat_with(ScriptFrame::default).take(n));
        self
    }

    /// Frames left in the script
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    pub fn polls(&self) -> u64 {
        self.polls
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<Event> {
        self.polls += 1;
        match self.frames.pop_front() {
            Some(frame) => {
                self.held = frame.held;
                frame.events
            }
            None => {
                self.held = 0;
                vec![Event::Quit]
            }
        }
    }

    fn pointer(&self) -> Vec2 {
        self.pointer
    }

    fn buttons_held(&self) -> u8 {
        self.held
    }
}

/// Input for unattended demo sessions: the autopilot flies, this only
/// presses space now and then (dismisses the death screen, ignored in
/// flight) and self-destructs after a time limit.
#[derive(Debug, Clone)]
pub struct DemoInput {
    polls: u64,
    press_every: u64,
    time_limit: Option<u64>,
}

impl DemoInput {
    pub fn new(press_every: u64) -> Self {
        Self {
            polls: 0,
            press_every: press_every.max(1),
            time_limit: None,
        }
    }

    /// Self-destruct after `polls` frames of a session
    pub fn with_time_limit(mut self, polls: u64) -> Self {
        self.time_limit = Some(polls);
        self
    }

    /// Start counting a new session
    pub fn reset(&mut self) {
        self.polls = 0;
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> Vec<Event> {
        self.polls += 1;
        let mut events = Vec::new();
        if self.time_limit == Some(self.polls) {
            events.push(Event::KeyDown(Key::Char('r')));
        }
        if self.polls % self.press_every == 0 {
            events.push(Event::KeyDown(Key::Char(' ')));
            events.push(Event::KeyUp(Key::Char(' ')));
        }
        events
    }

    fn pointer(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn buttons_held(&self) -> u8 {
        0
    }
}

/// A draw request as the renderer received it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Blit {
        image: ImageHandle,
        frame: u32,
        pos: Vec2,
        angle: f32,
    },
    Text {
        line: String,
        pos: Vec2,
        anchor: Anchor,
        font: Font,
    },
}

/// Renderer that keeps the draw calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    frames: u64,
    fullscreen: bool,
}

impl RecordingRenderer {
    /// Calls issued since the last present
    pub fn pending(&self) -> &[DrawCall] {
        &self.pending
    }

    /// Text lines of the most recently presented frame
    pub fn last_text(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { line, .. } => Some(line.as_str()),
                DrawCall::Blit { .. } => None,
            })
            .collect()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
}

impl Renderer for RecordingRenderer {
    fn blit(&mut self, image: ImageHandle, frame: u32, pos: Vec2, angle: f32) {
        self.pending.push(DrawCall::Blit {
            image,
            frame,
            pos,
            angle,
        });
    }

    fn text(&mut self, line: &str, pos: Vec2, anchor: Anchor, font: Font) -> f32 {
        self.pending.push(DrawCall::Text {
            line: line.to_string(),
            pos,
            anchor,
            font,
        });
        font.size() as f32
    }

    fn present(&mut self) {
        self.last_frame = mem::take(&mut self.pending);
        self.frames += 1;
        log::trace!("Frame {}: {} draw calls", self.frames, self.last_frame.len());
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        log::debug!("Fullscreen: {}", self.fullscreen);
    }
}

/// Audio sink that only remembers what it was asked to do
#[derive(Debug, Clone)]
pub struct SilentAudio {
    pub playing: Option<(Track, bool)>,
    pub volume: f32,
    pub stops: u32,
}

impl Default for SilentAudio {
    fn default() -> Self {
        Self {
            playing: None,
            volume: 1.0,
            stops: 0,
        }
    }
}

impl AudioProvider for SilentAudio {
    fn play(&mut self, track: Track, looped: bool) {
        log::debug!("Playing {} (looped: {})", track.file(), looped);
        self.playing = Some((track, looped));
    }

    fn stop(&mut self) {
        self.playing = None;
        self.stops += 1;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

/// Image "loader" with made-up dimensions
#[derive(Debug, Clone)]
pub struct FixedAssets {
    images: HashMap<String, ImageInfo>,
    next_handle: u32,
}

impl Default for FixedAssets {
    fn default() -> Self {
        let mut assets = Self {
            images: HashMap::new(),
            next_handle: 0,
        };
        assets.insert("sky.jpg", 512, 512);
        assets.insert("rocket.png", 64, 64);
        // 6 x 4 frames of 32 x 32
        assets.insert("energy.png", 192, 128);
        assets.insert("asteroid.png", 48, 48);
        assets
    }
}

impl FixedAssets {
    pub fn insert(&mut self, name: &str, width: u32, height: u32) {
        let handle = ImageHandle(self.next_handle);
        self.next_handle += 1;
        self.images.insert(
            name.to_string(),
            ImageInfo {
                handle,
                width,
                height,
            },
        );
    }

    pub fn remove(&mut self, name: &str) {
        self.images.remove(name);
    }
}

impl AssetProvider for FixedAssets {
    fn load_image(&mut self, name: &str) -> Result<ImageInfo, AssetError> {
        self.images.get(name).copied().ok_or_else(|| AssetError::NotFound {
            name: name.to_string(),
        })
    }
}
