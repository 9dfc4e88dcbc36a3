//! Background music control
//!
//! Playback itself belongs to the platform. The game only decides when the
//! flight track starts and stops, and respects the music setting.

use crate::consts::MUSIC_VOLUME;

/// Music tracks the game asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Looping in-flight music
    Flight,
}

impl Track {
    pub fn file(&self) -> &'static str {
        match self {
            Track::Flight => "bgmus_0.ogg",
        }
    }
}

pub trait AudioProvider {
    fn play(&mut self, track: Track, looped: bool);
    fn stop(&mut self);
    /// Volume as a fraction in `0.0..=1.0`
    fn set_volume(&mut self, volume: f32);
}

/// Set the process-wide music volume (called once at startup)
pub fn init_volume(audio: &mut dyn AudioProvider) {
    audio.set_volume(MUSIC_VOLUME.clamp(0.0, 1.0));
}

/// Start the flight music if the player has music turned on
pub fn start_flight_music(audio: &mut dyn AudioProvider, music_enabled: bool) {
    if music_enabled {
        audio.play(Track::Flight, true);
    } else {
        log::debug!("Music disabled, staying silent");
    }
}
