//! Game state and core simulation types
//!
//! One `GameState` is one session's world. It is rebuilt from scratch on
//! restart and never saved.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::asteroids::AsteroidField;
use super::camera::{Background, Camera, Viewport};
use super::rocket::Rocket;
use super::shatters::EnergyShatters;
use crate::consts::ROCKET_SPEED;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Simulation frozen, waiting for resume
    Paused,
    /// Rocket destroyed, death screen shown
    Ending,
}

/// Pixel sizes of the sprites the entities are built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub background: Vec2,
    pub rocket: Vec2,
    /// One animation frame of the shatter sheet
    pub shatter: Vec2,
    pub asteroid: Vec2,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Logical tick rate every per-tick quantity derives from
    pub fps: u32,
    pub viewport: Viewport,
    /// Difficulty level, raised by one per collected shatter
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub rocket: Rocket,
    pub shatters: EnergyShatters,
    pub asteroids: AsteroidField,
    pub camera: Camera,
    pub background: Background,
    pub(crate) rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, viewport: Viewport, fps: u32, sprites: &SpriteSizes) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rocket = Rocket::new(sprites.rocket, &viewport, fps);
        let shatters = EnergyShatters::new(sprites.shatter, &viewport, fps, &mut rng);
        let asteroids = AsteroidField::new(sprites.asteroid, &viewport, fps);

        Self {
            seed,
            fps,
            viewport,
            level: 1,
            time_ticks: 0,
            phase: GamePhase::Playing,
            rocket,
            shatters,
            asteroids,
            camera: Camera::new(viewport),
            background: Background::new(sprites.background),
            rng,
        }
    }

    /// Rocket distance per tick, at full precision for scoring
    pub fn rocket_step(&self) -> f64 {
        ROCKET_SPEED as f64 / self.fps as f64
    }

    /// Raise the level and retune the asteroid field
    pub fn level_up(&mut self) {
        self.level += 1;
        self.asteroids.level_up(self.level);
        log::info!(
            "Level {}: cap={}, interval={:.2} ticks, speed={:.2}/tick",
            self.level,
            self.asteroids.cap(),
            self.asteroids.interval(),
            self.asteroids.speed()
        );
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::consts::PLAY_FPS;

    pub(crate) fn sprites() -> SpriteSizes {
        SpriteSizes {
            background: Vec2::new(512.0, 512.0),
            rocket: Vec2::new(64.0, 64.0),
            shatter: Vec2::new(32.0, 32.0),
            asteroid: Vec2::new(48.0, 48.0),
        }
    }

    pub(crate) fn state(seed: u64) -> GameState {
        GameState::new(seed, Viewport::new(800.0, 600.0), PLAY_FPS, &sprites())
    }

    #[test]
    fn test_new_session() {
        let s = state(42);
        assert_eq!(s.level, 1);
        assert_eq!(s.phase, GamePhase::Playing);
        assert!(s.asteroids.is_empty());
        assert_eq!(s.rocket.fuel(), crate::consts::START_FUEL);
    }

    #[test]
    fn test_level_up_retunes_field() {
        let mut s = state(42);
        s.level_up();
        assert_eq!(s.level, 2);
        assert_eq!(s.asteroids.cap(), super::super::asteroids::population_cap(2, 800.0));
    }

    #[test]
    fn test_same_seed_same_world() {
        use crate::sim::Entity;
        let a = state(9);
        let b = state(9);
        assert_eq!(a.shatters.rect(), b.shatters.rect());
    }
}
