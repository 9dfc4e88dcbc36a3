//! Fixed timestep simulation tick
//!
//! Order within a tick: self-destruct request, shatter animation, rocket
//! (move, fuel, collisions, pickup), asteroid field, then the camera pass
//! over every entity and the background.

use super::autopilot;
use super::rocket::{Arrows, DeathCause};
use super::state::{GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Arrow keys currently held
    pub arrows: Arrows,
    /// Blow the rocket up (R key, abort)
    pub self_destruct: bool,
    /// Idle/demo mode - AI steers the rocket
    pub idle_mode: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Energy shatters were picked up and the level went up
    pub collected: bool,
    /// Set on the tick the rocket was destroyed
    pub destroyed: Option<DeathCause>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }

    if input.self_destruct {
        state.rocket.self_destruct();
        state.phase = GamePhase::Ending;
        outcome.destroyed = state.rocket.destroyed();
        return outcome;
    }

    state.time_ticks += 1;

    let arrows = if input.idle_mode {
        autopilot::steer(state)
    } else {
        input.arrows
    };

    state.shatters.animate();

    let profit = state
        .rocket
        .update(arrows, state.asteroids.asteroids(), &state.shatters);
    if profit.is_some() {
        state.shatters.relocate(&mut state.rng);
        state.level_up();
        outcome.collected = true;
    }

    state.asteroids.update(&mut state.rng);

    if let Some(cause) = state.rocket.destroyed() {
        state.phase = GamePhase::Ending;
        outcome.destroyed = Some(cause);
        return outcome;
    }

    let camera = &mut state.camera;
    camera.update(&state.rocket);
    camera.apply_to_background(&mut state.background);
    camera.apply(&mut state.rocket);
    camera.apply(&mut state.shatters);
    for asteroid in state.asteroids.iter_mut() {
        camera.apply(asteroid);
    }
    state.background.update();

    outcome
}
