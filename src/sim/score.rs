//! End-of-session scoring
//!
//! Both formulas feed recorded statistics, so they are kept exactly as tuned:
//! no pickups (level 1) always scores 0.

use serde::{Deserialize, Serialize};

use super::rocket::DeathCause;

/// Average upward progress in units per second: `floor(fps * step * (level - 1) / play_time)`
pub fn advance_speed(fps: u32, rocket_step: f64, level: u32, play_time: f64) -> u64 {
    let climbed = level.saturating_sub(1) as f64;
    if climbed == 0.0 {
        return 0;
    }
    (fps as f64 * rocket_step * climbed / play_time).floor() as u64
}

/// `round(level^2 * advance_speed / 100 + 10 * fuel * sqrt(level - 1))`
pub fn final_score(level: u32, advance_speed: u64, fuel: f64) -> u64 {
    let level_f = level as f64;
    let climbed = level.saturating_sub(1) as f64;
    (level_f * level_f * advance_speed as f64 / 100.0 + 10.0 * fuel * climbed.sqrt()).round() as u64
}

/// Outcome of one session, handed to the statistics store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub cause: DeathCause,
    pub level: u32,
    pub advance_speed: u64,
    pub score: u64,
}

impl ScoreRecord {
    /// `play_time` in seconds with pauses excluded, `rocket_step` per tick
    pub fn compute(
        cause: DeathCause,
        level: u32,
        play_time: f64,
        fuel: f64,
        fps: u32,
        rocket_step: f64,
    ) -> Self {
        let advance_speed = advance_speed(fps, rocket_step, level, play_time);
        Self {
            cause,
            level,
            advance_speed,
            score: final_score(level, advance_speed, fuel),
        }
    }
}
