//! Asteroid Shower - a vertical-scrolling rocket arcade game
//!
//! Core modules:
//! - `sim`: Simulation (rocket, asteroids, energy shatters, camera, scoring)
//! - `session`: Loop controller (play, pause, death screen, restart/quit signals)
//! - `platform`: Input, clock and headless collaborators
//! - `renderer`: Draw-call interface and scene composition
//! - `assets`: Sprite atlas resolved once at startup
//! - `audio`: Background music control
//! - `settings` / `statistics`: Read-only settings and the best-results store

pub mod assets;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod statistics;

pub use session::{Session, SessionContext, Signal};
pub use settings::Settings;
pub use statistics::{Statistics, StatisticsFile, StatisticsStore};

/// Game configuration constants
pub mod consts {
    /// Logical tick rate while playing
    pub const PLAY_FPS: u32 = 30;
    /// Tick rate of menu-style screens (pause overlay, death screen)
    pub const MENU_FPS: u32 = 25;

    /// Rocket velocity along each active axis (units per second)
    pub const ROCKET_SPEED: f32 = 500.0;
    /// Fuel burnt per second
    pub const FUEL_LOSS: f32 = 10.0;
    /// Fuel at launch
    pub const START_FUEL: f32 = 100.0;
    /// Sprite tilt while steering sideways (degrees)
    pub const TILT_DEGREES: f32 = 45.0;

    /// Fuel granted by one energy shatter
    pub const SHATTER_FUEL: f32 = 40.0;
    /// Height of one vertical band of world space
    pub const BAND_HEIGHT: f32 = 1600.0;
    /// Respawn keeps this distance from both band edges
    pub const BAND_INSET: f32 = 50.0;
    /// Energy shatter sprite sheet grid
    pub const SHATTER_SHEET_COLUMNS: u32 = 6;
    pub const SHATTER_SHEET_ROWS: u32 = 4;
    /// Animation frames per second of game time
    pub const ANIMATION_FPS: f32 = 24.0;

    /// Asteroid fall speed at level 1 (units per second)
    pub const ASTEROID_BASE_SPEED: f32 = 80.0;
    /// Viewport width per allowed asteroid
    pub const CAP_DIVISOR: f32 = 250.0;
    /// New asteroids start up to this far above the spawn line
    pub const ASTEROID_DROP_JITTER: f32 = 200.0;

    /// Extra width of the horizontally wrapping world strip
    pub const WRAP_MARGIN: f32 = 50.0;

    /// Music volume set once at startup
    pub const MUSIC_VOLUME: f32 = 0.72;
}
