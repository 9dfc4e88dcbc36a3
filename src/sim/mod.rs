//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick rate injected through `GameState::fps`
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod asteroids;
pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod entity;
pub mod rocket;
pub mod score;
pub mod shatters;
pub mod state;
pub mod tick;

pub use asteroids::{Asteroid, AsteroidField, fall_speed, population_cap, spawn_interval, velocity_rate};
pub use camera::{Background, Camera, Viewport};
pub use collision::{hits_any, shrunk_overlap};
pub use entity::{Entity, Rect};
pub use rocket::{Arrows, DeathCause, Rocket, Tilt};
pub use score::{ScoreRecord, advance_speed, final_score};
pub use shatters::{Animation, EnergyShatters, Profit};
pub use state::{GamePhase, GameState, SpriteSizes};
pub use tick::{TickInput, TickOutcome, tick};
