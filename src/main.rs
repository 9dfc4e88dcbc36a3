//! Asteroid Shower demo runner
//!
//! Plays a number of unattended sessions with the autopilot on the headless
//! platform and keeps the statistics file up to date.
//!
//! Usage: `asteroid-shower [--sessions N] [--seed SEED] [--resolution WxH]`

use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use asteroid_shower::assets::SpriteAtlas;
use asteroid_shower::audio::init_volume;
use asteroid_shower::platform::{DemoInput, FixedAssets, RecordingRenderer, SilentAudio, SystemClock};
use asteroid_shower::renderer::Renderer;
use asteroid_shower::settings::Resolution;
use asteroid_shower::sim::DeathCause;
use asteroid_shower::{Session, SessionContext, Settings, Signal, StatisticsFile};

/// Demo input presses a key every this many frames
const DEMO_PRESS_EVERY: u64 = 12;
/// A demo session self-destructs after this many frames
const DEMO_TIME_LIMIT: u64 = 30 * 60;

#[derive(Parser, Debug)]
#[command(name = "asteroid-shower")]
#[command(about = "Unattended Asteroid Shower sessions flown by the autopilot")]
struct Cli {
    /// Number of sessions to play
    #[arg(long, default_value_t = 3)]
    sessions: u32,
    /// Seed of the first session (later ones count up); defaults to the clock
    #[arg(long)]
    seed: Option<u64>,
    /// Override the settings resolution, e.g. 800x600
    #[arg(long, value_parser = parse_resolution)]
    resolution: Option<Resolution>,
    #[arg(long, default_value = "settings.json")]
    settings: PathBuf,
    #[arg(long, default_value = "statistics.json")]
    statistics: PathBuf,
}

fn parse_resolution(s: &str) -> Result<Resolution, String> {
    Resolution::parse(s).ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s:?}"))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn main() {
    let cli = Cli::parse();
    env_logger::init();
    log::info!("Asteroid Shower (demo) starting...");

    let sessions = cli.sessions;
    let mut seed = cli.seed.unwrap_or_else(clock_seed);

    let mut settings = Settings::load(&cli.settings);
    if let Some(resolution) = cli.resolution {
        log::info!("Resolution overridden to {}", resolution);
        settings.resolution = resolution;
    }
    let mut stats = StatisticsFile::open(cli.statistics);

    let atlas = match SpriteAtlas::load(&mut FixedAssets::default()) {
        Ok(atlas) => atlas,
        Err(e) => {
            log::error!("Failed to load sprites: {}", e);
            process::exit(1);
        }
    };

    let mut renderer = RecordingRenderer::default();
    let mut audio = SilentAudio::default();
    let mut clock = SystemClock::new();
    let mut input = DemoInput::new(DEMO_PRESS_EVERY).with_time_limit(DEMO_TIME_LIMIT);
    init_volume(&mut audio);
    if settings.fullscreen {
        renderer.toggle_fullscreen();
    }

    for n in 1..=sessions {
        input.reset();
        let ctx = SessionContext {
            settings: &settings,
            atlas: &atlas,
            input: &mut input,
            renderer: &mut renderer,
            audio: &mut audio,
            clock: &mut clock,
            stats: &mut stats,
        };
        let mut session = Session::new(ctx, seed).with_autopilot(true);
        let signal = session.run();
        if let Some(record) = session.record() {
            println!(
                "Session {n}: {} - level {}, advance speed {}, score {}",
                record.cause.message(),
                record.level,
                record.advance_speed,
                record.score
            );
        }
        if signal == Signal::Quit {
            break;
        }
        seed = seed.wrapping_add(1);
    }

    let totals = stats.stats();
    println!("\nDeaths: {}", totals.total_deaths());
    for cause in DeathCause::ALL {
        println!("  {:?}: {}", cause, totals.deaths_by(cause));
    }
    println!("Best level: {}", totals.best_level);
    println!("High scores: {:?}", totals.highscores);
    log::info!("Rendered {} frames", renderer.frames());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["asteroid-shower"]).unwrap();
        assert_eq!(cli.sessions, 3);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.resolution, None);
        assert_eq!(cli.statistics, PathBuf::from("statistics.json"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "asteroid-shower",
            "--sessions=1",
            "--seed",
            "42",
            "--resolution",
            "800x600",
        ])
        .unwrap();
        assert_eq!(cli.sessions, 1);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.resolution, Some(Resolution::new(800, 600)));
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(Cli::try_parse_from(["asteroid-shower", "--sessions=many"]).is_err());
        assert!(Cli::try_parse_from(["asteroid-shower", "--seed", "-3"]).is_err());
        assert!(Cli::try_parse_from(["asteroid-shower", "--resolution", "wide"]).is_err());
        assert!(Cli::try_parse_from(["asteroid-shower", "5"]).is_err());
    }
}
