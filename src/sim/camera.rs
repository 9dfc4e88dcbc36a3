//! Camera and tiling background
//!
//! The camera keeps the rocket horizontally centered and two thirds down the
//! viewport, leaving more room above it where asteroids come from. Every
//! tick the whole world is shifted by the offset instead of keeping a
//! separate view transform.

use glam::Vec2;

use super::entity::Entity;
use crate::consts::WRAP_MARGIN;

/// Visible area in screen units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width of the horizontally wrapping world strip
    #[inline]
    pub fn wrap_width(&self) -> f32 {
        self.width + WRAP_MARGIN
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    viewport: Viewport,
    offset: Vec2,
}

impl Camera {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            offset: Vec2::ZERO,
        }
    }

    /// Offset computed by the last `update`
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Recompute the offset that brings `target` to its anchor point
    pub fn update(&mut self, target: &impl Entity) {
        let rect = target.rect();
        self.offset = Vec2::new(
            -(rect.pos.x + rect.size.x / 2.0 - self.viewport.width / 2.0),
            -(rect.pos.y + rect.size.y / 2.0 - 2.0 * self.viewport.height / 3.0),
        );
    }

    /// Shift an entity; x wraps around the world strip
    pub fn apply(&self, entity: &mut impl Entity) {
        let pos = entity.rect().pos + self.offset;
        entity.set_pos(Vec2::new(pos.x.rem_euclid(self.viewport.wrap_width()), pos.y));
    }

    /// Shift the background without wrapping (it wraps itself on `update`)
    pub fn apply_to_background(&self, background: &mut Background) {
        background.pos += self.offset;
    }
}

/// A tile image repeated over the whole viewport
#[derive(Debug, Clone)]
pub struct Background {
    pub pos: Vec2,
    pub tile: Vec2,
}

impl Background {
    pub fn new(tile: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            tile,
        }
    }

    /// Fold the position back into one tile
    pub fn update(&mut self) {
        self.pos = Vec2::new(
            self.pos.x.rem_euclid(self.tile.x),
            self.pos.y.rem_euclid(self.tile.y),
        );
    }

    /// Top-left corners of every tile needed to cover the viewport
    pub fn tiles(&self, viewport: &Viewport) -> Vec<Vec2> {
        let mut tiles = Vec::new();
        if self.tile.x <= 0.0 || self.tile.y <= 0.0 {
            return tiles;
        }
        let mut sx = -self.tile.x;
        while sx < viewport.width {
            let mut sy = -self.tile.y;
            while sy < viewport.height {
                tiles.push(self.pos + Vec2::new(sx, sy));
                sy += self.tile.y;
            }
            sx += self.tile.x;
        }
        tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::Rect;

    struct Marker(Rect);

    impl Entity for Marker {
        fn rect(&self) -> Rect {
            self.0
        }

        fn set_pos(&mut self, pos: Vec2) {
            self.0.pos = pos;
        }
    }

    #[test]
    fn test_offset_anchors_target() {
        let mut camera = Camera::new(Viewport::new(800.0, 600.0));
        let target = Marker(Rect::new(Vec2::new(100.0, 200.0), Vec2::new(40.0, 40.0)));
        camera.update(&target);
        assert_eq!(camera.offset(), Vec2::new(280.0, 180.0));

        let mut target = target;
        camera.apply(&mut target);
        assert_eq!(target.0.center(), Vec2::new(400.0, 400.0));
    }

    #[test]
    fn test_apply_wraps_horizontally() {
        let mut camera = Camera::new(Viewport::new(800.0, 600.0));
        camera.offset = Vec2::new(-120.0, 10.0);
        let mut rock = Marker(Rect::new(Vec2::new(20.0, 0.0), Vec2::splat(10.0)));
        camera.apply(&mut rock);
        // Strip is 850 wide
        assert_eq!(rock.0.pos, Vec2::new(750.0, 10.0));
    }

    #[test]
    fn test_background_wraps_and_covers() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut camera = Camera::new(viewport);
        camera.offset = Vec2::new(-530.0, 710.0);
        let mut bg = Background::new(Vec2::new(500.0, 400.0));
        camera.apply_to_background(&mut bg);
        assert_eq!(bg.pos, Vec2::new(-530.0, 710.0));
        bg.update();
        assert_eq!(bg.pos, Vec2::new(470.0, 310.0));

        // -500, 0, 500 columns x -400, 0, 400 rows
        let tiles = bg.tiles(&viewport);
        assert_eq!(tiles.len(), 9);
        assert!(tiles.contains(&Vec2::new(-30.0, -90.0)));
    }
}
