//! Entity geometry shared by every moving object
//!
//! Positions are screen-relative: the camera shifts the whole world every tick
//! so the rocket stays anchored, and entities keep the shifted coordinates.

use glam::Vec2;

/// Axis-aligned bounding rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Rectangle of half the width and height around the same center
    pub fn shrunk(&self) -> Rect {
        let size = self.size / 2.0;
        Rect::new(self.center() - size / 2.0, size)
    }

    /// Strict overlap test; rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// Anything positioned and bounded that takes part in collision, camera and render
pub trait Entity {
    /// Current bounding rectangle
    fn rect(&self) -> Rect;

    /// Move the entity so its top-left corner is at `pos`
    fn set_pos(&mut self, pos: Vec2);

    /// Whether the entity still participates in the session
    fn is_alive(&self) -> bool {
        true
    }
}
