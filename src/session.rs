//! Loop controller
//!
//! Runs one session from launch to the death screen. Pause and the death
//! screen are nested blocking loops with their own input polling; a quit
//! request in any of them unwinds straight out of `run`.

use std::time::Duration;

use glam::Vec2;

use crate::assets::SpriteAtlas;
use crate::audio::{AudioProvider, start_flight_music};
use crate::consts::{MENU_FPS, PLAY_FPS};
use crate::platform::{Clock, Event, InputSource, Key};
use crate::renderer::{Renderer, draw_end_screen, draw_pause_banner, draw_scene, end_screen_lines};
use crate::settings::Settings;
use crate::sim::{Arrows, DeathCause, Entity, GamePhase, GameState, ScoreRecord, TickInput, tick};
use crate::statistics::StatisticsStore;

/// Acknowledgements needed to leave the death screen
const DISMISS_PRESSES: u32 = 2;

/// How a session ended, for the caller to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Tear the process down
    Quit,
    /// Discard the session and go back to the menus
    Restart,
}

/// Everything a session borrows from the outside world
pub struct SessionContext<'a> {
    pub settings: &'a Settings,
    pub atlas: &'a SpriteAtlas,
    pub input: &'a mut dyn InputSource,
    pub renderer: &'a mut dyn Renderer,
    pub audio: &'a mut dyn AudioProvider,
    pub clock: &'a mut dyn Clock,
    pub stats: &'a mut dyn StatisticsStore,
}

pub struct Session<'a> {
    ctx: SessionContext<'a>,
    state: GameState,
    arrows: Arrows,
    autopilot: bool,
    started: Duration,
    paused: Duration,
    play_time: Option<Duration>,
    record: Option<ScoreRecord>,
}

fn is_char(key: Key, c: char) -> bool {
    matches!(key, Key::Char(k) if k.eq_ignore_ascii_case(&c))
}

impl<'a> Session<'a> {
    /// Build a fresh world sized from the settings and sprites
    pub fn new(ctx: SessionContext<'a>, seed: u64) -> Self {
        let state = GameState::new(seed, ctx.settings.viewport(), PLAY_FPS, &ctx.atlas.sizes());
        Self {
            ctx,
            state,
            arrows: Arrows::default(),
            autopilot: false,
            started: Duration::ZERO,
            paused: Duration::ZERO,
            play_time: None,
            record: None,
        }
    }

    /// Let the autopilot fly instead of the arrow keys
    pub fn with_autopilot(mut self, enabled: bool) -> Self {
        self.autopilot = enabled;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Score of the finished session, once the death screen was reached
    pub fn record(&self) -> Option<ScoreRecord> {
        self.record
    }

    /// Time spent playing, pauses excluded, once the session ended
    pub fn play_time(&self) -> Option<Duration> {
        self.play_time
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Play until the player quits or dismisses the death screen
    pub fn run(&mut self) -> Signal {
        log::info!(
            "Session start: seed {}, viewport {}x{}",
            self.state.seed,
            self.state.viewport.width,
            self.state.viewport.height
        );
        start_flight_music(&mut *self.ctx.audio, self.ctx.settings.music);
        self.started = self.ctx.clock.now();

        match self.play().and_then(|cause| self.end_game(cause)) {
            Ok(()) => Signal::Restart,
            Err(signal) => {
                log::info!("Session left with {:?}", signal);
                signal
            }
        }
    }

    fn set_arrow(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => self.arrows.up = held,
            Key::Down => self.arrows.down = held,
            Key::Right => self.arrows.right = held,
            Key::Left => self.arrows.left = held,
            _ => {}
        }
    }

    fn play(&mut self) -> Result<DeathCause, Signal> {
        loop {
            let mut self_destruct = false;
            let mut pause = false;
            for event in self.ctx.input.poll() {
                match event {
                    Event::Quit => return Err(Signal::Quit),
                    Event::KeyDown(key) if is_char(key, 'p') => pause = true,
                    Event::KeyDown(key) if is_char(key, 'f') => self.ctx.renderer.toggle_fullscreen(),
                    Event::KeyDown(key) if is_char(key, 'r') => self_destruct = true,
                    Event::KeyDown(key) => self.set_arrow(key, true),
                    Event::KeyUp(key) => self.set_arrow(key, false),
                    Event::MouseButtonUp { .. } => {
                        // Releasing one button while another is still down
                        if self.ctx.input.buttons_held() != 0 {
                            self_destruct = true;
                        } else {
                            self.ctx.renderer.toggle_fullscreen();
                        }
                    }
                }
            }

            if pause {
                self.pause()?;
            }

            let input = TickInput {
                arrows: self.arrows,
                self_destruct,
                idle_mode: self.autopilot,
            };
            let outcome = tick(&mut self.state, &input);
            if let Some(cause) = outcome.destroyed {
                return Ok(cause);
            }

            draw_scene(&mut *self.ctx.renderer, &self.state, self.ctx.atlas);
            self.ctx.renderer.present();
            self.ctx.clock.wait_frame(self.state.fps);
        }
    }

    /// Freeze the simulation until resumed; the time spent here does not count
    fn pause(&mut self) -> Result<(), Signal> {
        let since = self.ctx.clock.now();
        self.state.phase = GamePhase::Paused;
        log::info!("Paused at tick {}", self.state.time_ticks);

        'waiting: loop {
            for event in self.ctx.input.poll() {
                match event {
                    Event::Quit => return Err(Signal::Quit),
                    Event::KeyDown(key)
                        if is_char(key, 'p') || matches!(key, Key::Enter | Key::Escape) =>
                    {
                        break 'waiting;
                    }
                    Event::KeyDown(key) if is_char(key, 'f') || key == Key::Super => {
                        self.ctx.renderer.toggle_fullscreen()
                    }
                    Event::KeyDown(_) => {}
                    // Keys let go while paused must not stay held
                    Event::KeyUp(key) => self.set_arrow(key, false),
                    Event::MouseButtonUp { .. } => {
                        if self.ctx.input.buttons_held() != 0 {
                            break 'waiting;
                        }
                        self.ctx.renderer.toggle_fullscreen();
                    }
                }
            }

            draw_scene(&mut *self.ctx.renderer, &self.state, self.ctx.atlas);
            draw_pause_banner(&mut *self.ctx.renderer, &self.state.viewport);
            self.ctx.renderer.present();
            self.ctx.clock.wait_frame(MENU_FPS);
        }

        let paused_for = self.ctx.clock.now().saturating_sub(since);
        self.paused += paused_for;
        self.state.phase = GamePhase::Playing;
        log::info!("Resumed after {:.1}s", paused_for.as_secs_f64());
        Ok(())
    }

    /// Score, report and show the death screen until dismissed
    fn end_game(&mut self, cause: DeathCause) -> Result<(), Signal> {
        let elapsed = self
            .ctx
            .clock
            .now()
            .saturating_sub(self.started)
            .saturating_sub(self.paused);
        // Never below one frame, so advance speed stays finite
        let play_time = elapsed.max(Duration::from_secs_f64(1.0 / self.state.fps as f64));
        self.play_time = Some(play_time);

        self.ctx.audio.stop();
        let record = ScoreRecord::compute(
            cause,
            self.state.level,
            play_time.as_secs_f64(),
            self.state.rocket.fuel() as f64,
            self.state.fps,
            self.state.rocket_step(),
        );
        log::info!(
            "{:?} at level {} after {:.1}s: advance speed {}, score {}",
            record.cause,
            record.level,
            play_time.as_secs_f64(),
            record.advance_speed,
            record.score
        );
        if let Some(rank) = self.ctx.stats.record(&record) {
            log::info!("New high score, rank #{}", rank);
        }
        self.record = Some(record);

        let lines = end_screen_lines(&record);
        let anchor = self.state.rocket.rect().center()
            + Vec2::new(10.0, 50.0 - self.state.viewport.height / 2.0);

        let mut presses = 0;
        while presses < DISMISS_PRESSES {
            for event in self.ctx.input.poll() {
                match event {
                    Event::Quit => return Err(Signal::Quit),
                    Event::KeyDown(key) if is_char(key, 'f') || key == Key::Super => {
                        self.ctx.renderer.toggle_fullscreen()
                    }
                    Event::KeyDown(_) => presses += 1,
                    Event::KeyUp(_) => {}
                    Event::MouseButtonUp { .. } => {
                        if self.ctx.input.buttons_held() != 0 {
                            return Ok(());
                        }
                        self.ctx.renderer.toggle_fullscreen();
                    }
                }
            }

            draw_end_screen(
                &mut *self.ctx.renderer,
                &self.state,
                self.ctx.atlas,
                &lines,
                anchor,
            );
            self.ctx.renderer.present();
            self.ctx.clock.wait_frame(MENU_FPS);
        }
        Ok(())
    }
}
