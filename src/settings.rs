//! Game settings
//!
//! Written by the menu screens, read once at the start of every session.
//! The game itself never writes them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Viewport;

/// Window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse the `WIDTHxHEIGHT` form, e.g. `1280x720`
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.trim().split_once(['x', 'X'])?;
        let width = w.trim().parse().ok()?;
        let height = h.trim().parse().ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size (ignored by fullscreen platforms that report their own)
    pub resolution: Resolution,
    /// Start in fullscreen
    pub fullscreen: bool,
    /// Background music on/off
    pub music: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resolution: Resolution::new(1280, 720),
            fullscreen: false,
            music: true,
        }
    }
}

impl Settings {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.resolution.width as f32, self.resolution.height as f32)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({}), using defaults", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) if settings.resolution.width > 0 && settings.resolution.height > 0 => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(_) => {
                log::warn!("Settings at {} have an empty resolution, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Malformed settings at {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolution() {
        assert_eq!(Resolution::parse("800x600"), Some(Resolution::new(800, 600)));
        assert_eq!(Resolution::parse(" 1920 X 1080 "), Some(Resolution::new(1920, 1080)));
        assert_eq!(Resolution::parse("0x0"), None);
        assert_eq!(Resolution::parse("wide"), None);
        assert_eq!(Resolution::new(800, 600).to_string(), "800x600");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"music": false}"#).unwrap();
        assert!(!settings.music);
        assert_eq!(settings.resolution, Resolution::new(1280, 720));
        assert_eq!(settings.viewport(), Viewport::new(1280.0, 720.0));
    }

    #[test]
    fn test_load_missing_or_malformed() {
        let dir = std::env::temp_dir().join(format!("asteroid-shower-settings-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        assert_eq!(Settings::load(&dir.join("absent.json")), Settings::default());

        let bad = dir.join("bad.json");
        fs::write(&bad, "{ not json").unwrap();
        assert_eq!(Settings::load(&bad), Settings::default());

        let good = dir.join("good.json");
        fs::write(&good, r#"{"resolution": {"width": 800, "height": 600}, "music": false}"#).unwrap();
        let settings = Settings::load(&good);
        assert_eq!(settings.resolution, Resolution::new(800, 600));
        assert!(!settings.music);

        fs::remove_dir_all(&dir).ok();
    }
}
