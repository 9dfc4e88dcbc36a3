//! Falling asteroids and the difficulty curve
//!
//! All asteroids share one fall speed. New ones appear no faster than the
//! spawn interval and only while the population is under the cap. Speed,
//! interval and cap are recomputed from the level on every level-up.

use glam::Vec2;
use rand::Rng;

use super::camera::Viewport;
use super::entity::{Entity, Rect};
use crate::consts::*;

/// Maximum live asteroids at `level`
pub fn population_cap(level: u32, viewport_width: f32) -> usize {
    ((level as f64).powf(0.6) * viewport_width as f64 / CAP_DIVISOR as f64).floor() as usize
}

/// Ticks between spawns at `level`
pub fn spawn_interval(level: u32, fps: u32) -> f32 {
    (fps as f64 / (2.0 * (level as f64).powf(0.7))) as f32
}

/// Fall speed multiplier at `level`.
///
/// Below level 100 a power term plus a sawtooth of exponentials: the speed
/// climbs steeply inside each decade and drops back a little when the next
/// decade starts. From level 100 on a single gentler power curve.
pub fn velocity_rate(level: u32) -> f64 {
    const A: f64 = 0.3;
    const B: f64 = 20.0;
    let x = level as f64;
    if level < 100 {
        let decade = (level / 10) as f64;
        x.powf(0.7) + 0.2 * 2f64.powf(A * (x / 10.0 + B)) - 0.21 * 2f64.powf(A * (decade + B))
    } else {
        (x - 50.0).powf(0.9)
    }
}

/// Distance an asteroid falls per tick at `level`
pub fn fall_speed(level: u32, fps: u32) -> f32 {
    (velocity_rate(level) * ASTEROID_BASE_SPEED as f64 / fps as f64) as f32
}

#[derive(Debug, Clone)]
pub struct Asteroid {
    rect: Rect,
}

impl Asteroid {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            rect: Rect::new(pos, size),
        }
    }
}

impl Entity for Asteroid {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.rect.pos = pos;
    }
}

#[derive(Debug, Clone)]
pub struct AsteroidField {
    asteroids: Vec<Asteroid>,
    /// Sprite size of every asteroid
    size: Vec2,
    viewport: Viewport,
    fps: u32,
    speed: f32,
    cap: usize,
    interval: f32,
    timer: f32,
}

impl AsteroidField {
    /// Level 1 field: cap from the viewport width, two spawns per second at most
    pub fn new(size: Vec2, viewport: &Viewport, fps: u32) -> Self {
        Self {
            asteroids: Vec::new(),
            size,
            viewport: *viewport,
            fps,
            speed: ASTEROID_BASE_SPEED / fps as f32,
            cap: (viewport.width / CAP_DIVISOR).floor() as usize,
            interval: fps as f32 / 2.0,
            timer: 0.0,
        }
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Asteroid> {
        self.asteroids.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Fall, drop what left the screen, maybe spawn one. Returns true on spawn.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.timer += 1.0;

        for asteroid in &mut self.asteroids {
            asteroid.rect.pos.y += self.speed;
        }
        let bottom = self.viewport.height;
        self.asteroids.retain(|a| a.rect.top() <= bottom);

        if self.timer >= self.interval && self.asteroids.len() < self.cap {
            self.timer = 0.0;
            self.spawn(rng);
            return true;
        }
        false
    }

    /// New asteroid above the screen, staggered so they don't fall in lines
    fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let x = rng.random_range(0.0..=self.viewport.width);
        let y = -self.size.y - rng.random_range(0.0..=ASTEROID_DROP_JITTER);
        self.asteroids.push(Asteroid::new(Vec2::new(x, y), self.size));
        log::debug!("Asteroid spawned at ({:.0}, {:.0}), {} live", x, y, self.asteroids.len());
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, asteroid: Asteroid) {
        self.asteroids.push(asteroid);
    }

    /// Retune the field for `level`
    pub fn level_up(&mut self, level: u32) {
        self.cap = population_cap(level, self.viewport.width);
        self.interval = spawn_interval(level, self.fps);
        self.speed = fall_speed(level, self.fps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn field() -> AsteroidField {
        AsteroidField::new(Vec2::splat(48.0), &Viewport::new(800.0, 600.0), 30)
    }

    #[test]
    fn test_level_one_defaults() {
        let f = field();
        assert_eq!(f.cap(), 3);
        assert_eq!(f.interval(), 15.0);
        assert!((f.speed() - 80.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_difficulty_formulas() {
        assert_eq!(population_cap(1, 800.0), 3);
        // 10^0.6 = 3.98
        assert_eq!(population_cap(10, 800.0), 12);
        assert!((spawn_interval(1, 30) - 15.0).abs() < 1e-6);
        assert!((spawn_interval(10, 30) - 15.0 / 10f32.powf(0.7)).abs() < 1e-4);
    }

    #[test]
    fn test_velocity_rate_branches() {
        let r1 = 1.0 + 0.2 * 2f64.powf(0.3 * 20.1) - 0.21 * 2f64.powf(6.0);
        assert!((velocity_rate(1) - r1).abs() < 1e-9);

        let x = 99.0f64;
        let r99 = x.powf(0.7) + 0.2 * 2f64.powf(0.3 * (9.9 + 20.0)) - 0.21 * 2f64.powf(0.3 * 29.0);
        assert!((velocity_rate(99) - r99).abs() < 1e-9);

        assert!((velocity_rate(100) - 50f64.powf(0.9)).abs() < 1e-9);
        assert!((velocity_rate(150) - 100f64.powf(0.9)).abs() < 1e-9);
        // The high-level curve starts below where the low one ended
        assert!(velocity_rate(100) < velocity_rate(99));
    }

    #[test]
    fn test_spawn_respects_interval_and_cap() {
        let mut f = field();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawns = Vec::new();
        for t in 1..=60 {
            if f.update(&mut rng) {
                spawns.push(t);
            }
        }
        // Every 15 ticks until the cap of 3 is reached
        assert_eq!(spawns, vec![15, 30, 45]);
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn test_asteroids_leave_below_screen() {
        let mut f = field();
        f.asteroids.push(Asteroid::new(Vec2::new(10.0, 599.0), Vec2::splat(48.0)));
        f.asteroids.push(Asteroid::new(Vec2::new(10.0, 100.0), Vec2::splat(48.0)));
        let mut rng = Pcg32::seed_from_u64(3);
        f.update(&mut rng);
        assert_eq!(f.len(), 1);
        assert!((f.asteroids()[0].rect().top() - (100.0 + 80.0 / 30.0)).abs() < 1e-4);
    }

    #[test]
    fn test_spawn_above_screen() {
        let mut f = field();
        f.level_up(5);
        let mut rng = Pcg32::seed_from_u64(11);
        let mut spawned = 0;
        for _ in 0..400 {
            if !f.update(&mut rng) {
                continue;
            }
            spawned += 1;
            // The newest asteroid has not fallen yet
            let r = f.asteroids().last().unwrap().rect();
            assert!(r.bottom() <= 0.0);
            assert!(r.top() >= -48.0 - ASTEROID_DROP_JITTER);
            assert!((0.0..=800.0).contains(&r.left()));
        }
        assert!(spawned > 3);
    }

    proptest! {
        #[test]
        fn cap_and_interval_monotone(level in 1u32..5000, width in 200.0f32..4000.0) {
            prop_assert!(population_cap(level + 1, width) >= population_cap(level, width));
            prop_assert!(spawn_interval(level + 1, 30) <= spawn_interval(level, 30));
        }

        #[test]
        fn population_never_exceeds_cap(seed in any::<u64>(), level in 1u32..40, ticks in 1usize..400) {
            let mut f = field();
            f.level_up(level);
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..ticks {
                f.update(&mut rng);
                prop_assert!(f.len() <= population_cap(level, 800.0));
            }
        }
    }
}
