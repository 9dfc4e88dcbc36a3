//! Platform abstraction layer
//!
//! The session talks to the outside world only through these traits:
//! - Input events and polled pointer state
//! - Time and frame throttling
//!
//! `headless` provides in-memory implementations used by the demo runner and tests.

pub mod headless;
pub mod time;

use std::time::Duration;

use glam::Vec2;

pub use headless::{DemoInput, FixedAssets, RecordingRenderer, ScriptedInput, SilentAudio};
pub use time::{ManualClock, SystemClock};

/// Keys the game reacts to; everything else arrives as `Char` or `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Right,
    Left,
    Enter,
    Escape,
    /// Left or right "windows"/command key
    Super,
    Char(char),
    Other(u32),
}

/// Discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Window closed / process asked to terminate
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// A mouse button was released; `button` is the released button's mask bit
    MouseButtonUp { pos: Vec2, button: u8 },
}

/// Source of per-tick input
pub trait InputSource {
    /// Drain every event queued since the last poll
    fn poll(&mut self) -> Vec<Event>;

    /// Current pointer position
    fn pointer(&self) -> Vec2;

    /// Bit mask of mouse buttons currently held
    fn buttons_held(&self) -> u8;
}

/// Monotonic time source with frame throttling
pub trait Clock {
    /// Time elapsed since the clock was created
    fn now(&self) -> Duration;

    /// Block until one frame at `fps` has passed since the previous call
    fn wait_frame(&mut self, fps: u32);
}
