//! Energy shatters: the single relocating pickup
//!
//! There is only ever one shatter entity. Collecting it moves it into the
//! next band of world space above the current one, so the rocket has to keep
//! climbing to stay fuelled.

use glam::Vec2;
use rand::Rng;

use super::camera::Viewport;
use super::entity::{Entity, Rect};
use crate::consts::*;

/// What a pickup grants when collected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profit {
    Fuel(f32),
}

/// Frame cycling for a sprite sheet
#[derive(Debug, Clone)]
pub struct Animation {
    frames: u32,
    /// Ticks per frame (fractional)
    period: f32,
    counter: f32,
    frame: u32,
}

impl Animation {
    pub fn new(frames: u32, period: f32) -> Self {
        Self {
            frames: frames.max(1),
            period,
            counter: 0.0,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Advance by one tick; carries the fractional remainder over
    pub fn update(&mut self) {
        if self.counter >= self.period - 1.0 {
            self.counter += 1.0 - self.period;
            self.frame = (self.frame + 1) % self.frames;
        } else {
            self.counter += 1.0;
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnergyShatters {
    rect: Rect,
    profit: Profit,
    /// Distance from the top of the current band to the shatter
    band_offset: f32,
    wrap_width: f32,
    animation: Animation,
}

impl EnergyShatters {
    /// Spawn in the band directly above the visible area
    pub fn new<R: Rng + ?Sized>(size: Vec2, viewport: &Viewport, fps: u32, rng: &mut R) -> Self {
        let wrap_width = viewport.wrap_width();
        let x = rng.random_range(0.0..=wrap_width);
        let y = rng.random_range(-BAND_HEIGHT + BAND_INSET..=0.0);
        Self {
            rect: Rect::new(Vec2::new(x, y), size),
            profit: Profit::Fuel(SHATTER_FUEL),
            band_offset: y + BAND_HEIGHT,
            wrap_width,
            animation: Animation::new(
                SHATTER_SHEET_COLUMNS * SHATTER_SHEET_ROWS,
                fps as f32 / ANIMATION_FPS,
            ),
        }
    }

    pub fn profit(&self) -> Profit {
        self.profit
    }

    pub fn frame(&self) -> u32 {
        self.animation.frame()
    }

    /// Top edge of the band the shatter currently sits in
    pub fn band_top(&self) -> f32 {
        self.rect.pos.y - self.band_offset
    }

    /// Cycle the sprite sheet, independent of collection
    pub fn animate(&mut self) {
        self.animation.update();
    }

    /// Move to a random spot in the next band up, inset from its edges
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let next_top = self.band_top() - BAND_HEIGHT;
        let x = rng.random_range(0.0..=self.wrap_width);
        let y = rng.random_range(next_top + BAND_INSET..=next_top + BAND_HEIGHT - BAND_INSET);
        self.rect.pos = Vec2::new(x, y);
        self.band_offset = y - next_top;
        log::debug!("Energy shatters relocated to ({:.0}, {:.0})", x, y);
    }
}

impl Entity for EnergyShatters {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.rect.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn shatters(seed: u64) -> (EnergyShatters, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let s = EnergyShatters::new(Vec2::splat(32.0), &Viewport::new(800.0, 600.0), 30, &mut rng);
        (s, rng)
    }

    #[test]
    fn test_spawns_in_first_band() {
        for seed in 0..50 {
            let (s, _) = shatters(seed);
            let y = s.rect().pos.y;
            assert!((-BAND_HEIGHT + BAND_INSET..=0.0).contains(&y));
            assert!((0.0..=850.0).contains(&s.rect().pos.x));
            assert!((s.band_top() + BAND_HEIGHT).abs() < 1e-3);
        }
    }

    #[test]
    fn test_relocate_climbs_one_band() {
        let (mut s, mut rng) = shatters(7);
        let first = s.band_top();
        s.relocate(&mut rng);
        assert!((s.band_top() - (first - BAND_HEIGHT)).abs() < 1e-3);
        s.relocate(&mut rng);
        assert!((s.band_top() - (first - 2.0 * BAND_HEIGHT)).abs() < 1e-2);
    }

    #[test]
    fn test_animation_cycles_all_frames() {
        // 30 fps / 24 = 1.25 ticks per frame: 24 frames in 30 ticks
        let mut anim = Animation::new(24, 1.25);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..30 {
            anim.update();
            seen.insert(anim.frame());
        }
        assert_eq!(seen.len(), 24);
        assert_eq!(anim.frame(), 0);
    }

    proptest! {
        #[test]
        fn relocation_stays_inset(seed in any::<u64>(), dx in -3000.0f32..3000.0, dy in -3000.0f32..3000.0) {
            let (mut s, mut rng) = shatters(seed);
            // Camera shifts move the band along with the shatter
            let pos = s.rect().pos + Vec2::new(dx, dy);
            s.set_pos(pos);
            s.relocate(&mut rng);
            let from_top = s.rect().pos.y - s.band_top();
            prop_assert!(from_top >= BAND_INSET - 0.01);
            prop_assert!(from_top <= BAND_HEIGHT - BAND_INSET + 0.01);
        }
    }
}
