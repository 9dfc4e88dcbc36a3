//! The player's rocket
//!
//! Movement is uniform with instant velocity changes, independently on each
//! axis. Fuel burns every tick; energy shatters refill it. Destruction only
//! raises a flag, the loop controller reacts to it at the end of the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::asteroids::Asteroid;
use super::camera::Viewport;
use super::collision::{hits_any, shrunk_overlap};
use super::entity::{Entity, Rect};
use super::shatters::{EnergyShatters, Profit};
use crate::consts::*;

/// Arrow key state for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arrows {
    pub up: bool,
    pub down: bool,
    pub right: bool,
    pub left: bool,
}

/// Cosmetic sprite rotation, recomputed from input every tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tilt {
    #[default]
    Level,
    Right,
    Left,
}

impl Tilt {
    /// Counter-clockwise sprite rotation in degrees
    pub fn degrees(&self) -> f32 {
        match self {
            Tilt::Level => 0.0,
            Tilt::Right => -TILT_DEGREES,
            Tilt::Left => TILT_DEGREES,
        }
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    SelfDestruct,
    Collision,
    FuelExhausted,
}

impl DeathCause {
    pub const ALL: [DeathCause; 3] = [
        DeathCause::SelfDestruct,
        DeathCause::Collision,
        DeathCause::FuelExhausted,
    ];

    /// Slot in the per-cause death tally
    pub fn index(&self) -> usize {
        match self {
            DeathCause::SelfDestruct => 0,
            DeathCause::Collision => 1,
            DeathCause::FuelExhausted => 2,
        }
    }

    /// End screen wording
    pub fn message(&self) -> &'static str {
        match self {
            DeathCause::SelfDestruct => "You self-destructed",
            DeathCause::Collision => "You crashed into an asteroid",
            DeathCause::FuelExhausted => "You ran out of energy",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rocket {
    rect: Rect,
    /// Distance covered per tick on an active axis
    step: f32,
    /// Fuel burnt per tick
    fuel_loss: f32,
    fuel: f32,
    tilt: Tilt,
    destroyed: Option<DeathCause>,
}

impl Rocket {
    /// Place a rocket of `size` at the viewport center
    pub fn new(size: Vec2, viewport: &Viewport, fps: u32) -> Self {
        Self {
            rect: Rect::new(Vec2::new(viewport.width / 2.0, viewport.height / 2.0), size),
            step: ROCKET_SPEED / fps as f32,
            fuel_loss: FUEL_LOSS / fps as f32,
            fuel: START_FUEL,
            tilt: Tilt::Level,
            destroyed: None,
        }
    }

    pub fn fuel(&self) -> f32 {
        self.fuel
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn destroyed(&self) -> Option<DeathCause> {
        self.destroyed
    }

    /// Raise the destroyed flag unless a cause is already recorded
    pub fn destroy(&mut self, cause: DeathCause) {
        if self.destroyed.is_none() {
            self.destroyed = Some(cause);
        }
    }

    pub fn self_destruct(&mut self) {
        self.destroy(DeathCause::SelfDestruct);
    }

    /// Move along each active axis; up wins over down, right over left
    pub fn drive(&mut self, arrows: Arrows) {
        if arrows.up {
            self.rect.pos.y -= self.step;
        } else if arrows.down {
            self.rect.pos.y += self.step;
        }

        self.tilt = if arrows.right {
            self.rect.pos.x += self.step;
            Tilt::Right
        } else if arrows.left {
            self.rect.pos.x -= self.step;
            Tilt::Left
        } else {
            Tilt::Level
        };
    }

    /// Take a pickup's profit; returns it if the rocket accepted it
    pub fn collect(&mut self, profit: Profit) -> Option<Profit> {
        match profit {
            Profit::Fuel(amount) => {
                self.fuel += amount;
                Some(profit)
            }
        }
    }

    /// One tick: drive, burn fuel, then run the collision checks.
    ///
    /// Returns the profit taken from `shatters` if they were collected; the
    /// caller is responsible for relocating them and raising the level.
    pub fn update(
        &mut self,
        arrows: Arrows,
        asteroids: &[Asteroid],
        shatters: &EnergyShatters,
    ) -> Option<Profit> {
        self.drive(arrows);
        self.fuel = (self.fuel - self.fuel_loss).max(0.0);

        if hits_any(&self.rect, asteroids) {
            self.destroy(DeathCause::Collision);
        }

        let collected = if shrunk_overlap(&self.rect, &shatters.rect()) {
            self.collect(shatters.profit())
        } else {
            None
        };

        if self.fuel <= 0.0 {
            self.destroy(DeathCause::FuelExhausted);
        }

        collected
    }
}

impl Entity for Rocket {
    fn rect(&self) -> Rect {
        self.rect
    }

    fn set_pos(&mut self, pos: Vec2) {
        self.rect.pos = pos;
    }

    fn is_alive(&self) -> bool {
        self.destroyed.is_none()
    }
}
