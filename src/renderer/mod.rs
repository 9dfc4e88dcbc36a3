//! Rendering interface
//!
//! The game never touches pixels itself. It issues blits and text lines to a
//! `Renderer` and calls `present` once at the end of every frame.

pub mod scene;

use glam::Vec2;

use crate::assets::ImageHandle;

pub use scene::{draw_end_screen, draw_pause_banner, draw_scene, end_screen_lines};

/// Font sizes used by the game screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    /// Status bar
    Small,
    /// Death screen
    Big,
    /// Pause banner
    Banner,
}

impl Font {
    /// Nominal pixel size
    pub fn size(&self) -> u32 {
        match self {
            Font::Small => 32,
            Font::Big => 45,
            Font::Banner => 400,
        }
    }
}

/// Which point of the rendered line `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    /// Horizontally centered on `pos`, top edge at `pos.y`
    MidTop,
}

/// Draw target for one frame
pub trait Renderer {
    /// Blit `frame` of an image (sheet frames counted row by row), rotated
    /// counter-clockwise by `angle` degrees, with its top-left corner at `pos`
    fn blit(&mut self, image: ImageHandle, frame: u32, pos: Vec2, angle: f32);

    /// Draw one line of white text; returns the height it took
    fn text(&mut self, line: &str, pos: Vec2, anchor: Anchor, font: Font) -> f32;

    /// Show everything drawn since the previous present
    fn present(&mut self);

    fn toggle_fullscreen(&mut self);
}
