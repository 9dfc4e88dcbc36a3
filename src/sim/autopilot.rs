//! Idle/demo mode: the game plays itself
//!
//! Heads for the energy shatters and backs away sideways from any asteroid
//! inside a corridor above the rocket.

use glam::Vec2;

use super::entity::{Entity, Rect};
use super::rocket::Arrows;
use super::state::GameState;
use crate::consts::ROCKET_SPEED;

/// Base depth of the watched corridor above the rocket
const LOOKAHEAD: f32 = 160.0;
/// Extra width watched on each side of the rocket
const SIDE_MARGIN: f32 = 24.0;
/// Ticks of asteroid fall added to the corridor depth
const REACTION_TICKS: f32 = 10.0;

/// Pick the arrows for this tick
pub fn steer(state: &GameState) -> Arrows {
    let rocket = state.rocket.rect();
    let center = rocket.center();

    let depth = LOOKAHEAD + state.asteroids.speed() * REACTION_TICKS;
    let corridor = Rect::new(
        Vec2::new(rocket.left() - SIDE_MARGIN, rocket.top() - depth),
        Vec2::new(rocket.size.x + 2.0 * SIDE_MARGIN, rocket.size.y + depth),
    );

    let threat = state
        .asteroids
        .asteroids()
        .iter()
        .map(|a| a.rect())
        .filter(|r| r.overlaps(&corridor))
        .min_by(|a, b| {
            a.center()
                .distance_squared(center)
                .total_cmp(&b.center().distance_squared(center))
        });

    if let Some(rock) = threat {
        let go_left = rock.center().x > center.x;
        return Arrows {
            up: false,
            down: true,
            right: !go_left,
            left: go_left,
        };
    }

    let target = state.shatters.rect().center();
    let wrap = state.viewport.wrap_width();
    let mut dx = target.x - center.x;
    if dx > wrap / 2.0 {
        dx -= wrap;
    } else if dx < -wrap / 2.0 {
        dx += wrap;
    }
    let dy = target.y - center.y;

    let dead_zone = ROCKET_SPEED / state.fps as f32 / 2.0;
    Arrows {
        up: dy < -dead_zone,
        down: dy > dead_zone,
        right: dx > dead_zone,
        left: dx < -dead_zone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::asteroids::Asteroid;
    use crate::sim::state::tests::state;

    #[test]
    fn test_heads_for_shatters() {
        let mut s = state(1);
        let rocket = s.rocket.rect().center();
        s.shatters.set_pos(rocket + Vec2::new(200.0, -500.0));
        let arrows = steer(&s);
        assert!(arrows.up && arrows.right);
        assert!(!arrows.down && !arrows.left);
    }

    #[test]
    fn test_takes_short_way_around() {
        let mut s = state(1);
        let rocket = s.rocket.rect();
        // 700 to the right on an 850 wide strip is 150 to the left
        s.shatters.set_pos(Vec2::new(rocket.center().x + 700.0, rocket.top() - 300.0));
        let arrows = steer(&s);
        assert!(arrows.left && !arrows.right);
    }

    #[test]
    fn test_dodges_asteroid_ahead() {
        let mut s = state(1);
        let rocket = s.rocket.rect();
        s.shatters.set_pos(rocket.pos + Vec2::new(0.0, -800.0));
        s.asteroids
            .insert(Asteroid::new(rocket.pos + Vec2::new(20.0, -100.0), Vec2::splat(48.0)));
        let arrows = steer(&s);
        assert!(!arrows.up);
        assert!(arrows.down && arrows.left);
    }
}
