//! Scene composition: background, then entities, then status text

use glam::Vec2;

use super::{Anchor, Font, Renderer};
use crate::assets::SpriteAtlas;
use crate::sim::{Entity, GameState, ScoreRecord, Viewport};

/// Top-left corner of the status bar
const STATUS_POS: Vec2 = Vec2::new(20.0, 30.0);
/// Gap between end screen lines
const LINE_GAP: f32 = 10.0;

fn draw_background(renderer: &mut dyn Renderer, state: &GameState, atlas: &SpriteAtlas) {
    for tile in state.background.tiles(&state.viewport) {
        renderer.blit(atlas.sky.handle, 0, tile, 0.0);
    }
}

fn draw_status(renderer: &mut dyn Renderer, state: &GameState) {
    let lines = [
        format!("Level: {}", state.level),
        format!("Energy: {}", state.rocket.fuel().round()),
    ];
    let mut pos = STATUS_POS;
    for line in &lines {
        pos.y += renderer.text(line, pos, Anchor::TopLeft, Font::Small);
    }
}

/// One full frame of play, without `present`
pub fn draw_scene(renderer: &mut dyn Renderer, state: &GameState, atlas: &SpriteAtlas) {
    draw_background(renderer, state, atlas);

    for asteroid in state.asteroids.asteroids() {
        renderer.blit(atlas.asteroid.handle, 0, asteroid.rect().pos, 0.0);
    }
    renderer.blit(
        atlas.energy.handle,
        state.shatters.frame(),
        state.shatters.rect().pos,
        0.0,
    );
    if state.rocket.is_alive() {
        renderer.blit(
            atlas.rocket.handle,
            0,
            state.rocket.rect().pos,
            state.rocket.tilt().degrees(),
        );
    }

    draw_status(renderer, state);
}

/// "Paused" across the middle of the frozen scene
pub fn draw_pause_banner(renderer: &mut dyn Renderer, viewport: &Viewport) {
    let top = (viewport.height - Font::Banner.size() as f32) / 2.0;
    renderer.text(
        "Paused",
        Vec2::new(viewport.width / 2.0, top),
        Anchor::MidTop,
        Font::Banner,
    );
}

/// Text of the death screen
pub fn end_screen_lines(record: &ScoreRecord) -> Vec<String> {
    vec![
        "GAME OVER".to_string(),
        record.cause.message().to_string(),
        format!("Your progress: {}", record.level),
        format!("Average advance speed: {}", record.advance_speed),
        format!("Score: {}", record.score),
        " ".to_string(),
        "Press any key twice to exit".to_string(),
    ]
}

/// Background plus the death screen text stacked from `anchor` down
pub fn draw_end_screen(
    renderer: &mut dyn Renderer,
    state: &GameState,
    atlas: &SpriteAtlas,
    lines: &[String],
    anchor: Vec2,
) {
    draw_background(renderer, state, atlas);
    let mut pos = anchor;
    for line in lines {
        pos.y += LINE_GAP + renderer.text(line, pos, Anchor::MidTop, Font::Big);
    }
}
