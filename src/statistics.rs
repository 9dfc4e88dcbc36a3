//! Best-results statistics
//!
//! Tracks deaths per cause, the best level reached and the top 5 scores.
//! Persisted as JSON; a file with the wrong shape is reset.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::sim::{DeathCause, ScoreRecord};

/// Number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// Where finished sessions are reported
pub trait StatisticsStore {
    /// Add one session's outcome. Returns the high score rank achieved (1-indexed).
    fn record(&mut self, record: &ScoreRecord) -> Option<usize>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Deaths by cause: self-destruct, collision, fuel
    pub deaths: [u32; 3],
    /// Highest level ever reached
    pub best_level: u32,
    /// Best scores, descending, always `MAX_HIGH_SCORES` long (zero padded)
    pub highscores: Vec<u64>,
}

impl Default for Statistics {
    fn default() -> Self {
        Self {
            deaths: [0; 3],
            best_level: 0,
            highscores: vec![0; MAX_HIGH_SCORES],
        }
    }
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shape check for data read back from storage
    pub fn is_well_formed(&self) -> bool {
        self.highscores.len() == MAX_HIGH_SCORES
    }

    pub fn deaths_by(&self, cause: DeathCause) -> u32 {
        self.deaths[cause.index()]
    }

    pub fn total_deaths(&self) -> u32 {
        self.deaths.iter().sum()
    }

    /// Check if a score would enter the table
    pub fn qualifies(&self, score: u64) -> bool {
        score > 0 && self.highscores.last().is_none_or(|&lowest| score > lowest)
    }

    pub fn top_score(&self) -> Option<u64> {
        self.highscores.first().copied().filter(|&s| s > 0)
    }
}

impl StatisticsStore for Statistics {
    fn record(&mut self, record: &ScoreRecord) -> Option<usize> {
        self.deaths[record.cause.index()] += 1;
        self.best_level = self.best_level.max(record.level);

        if !self.qualifies(record.score) {
            return None;
        }
        let pos = self
            .highscores
            .iter()
            .position(|&s| record.score > s)
            .unwrap_or(self.highscores.len());
        self.highscores.insert(pos, record.score);
        self.highscores.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }
}

/// Statistics backed by a JSON file, saved after every record
#[derive(Debug)]
pub struct StatisticsFile {
    path: PathBuf,
    stats: Statistics,
}

impl StatisticsFile {
    /// Open the file, resetting it if missing or malformed
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let loaded = fs::read_to_string(&path)
            .ok()
            .and_then(|json| serde_json::from_str::<Statistics>(&json).ok())
            .filter(Statistics::is_well_formed);

        match loaded {
            Some(stats) => {
                log::info!("Loaded statistics from {}", path.display());
                Self { path, stats }
            }
            None => {
                log::warn!("Statistics at {} missing or malformed, resetting", path.display());
                let file = Self {
                    path,
                    stats: Statistics::new(),
                };
                if let Err(e) = file.save() {
                    log::warn!("Could not write statistics: {}", e);
                }
                file
            }
        }
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.stats).map_err(io::Error::other)?;
        fs::write(&self.path, json)
    }
}

impl StatisticsStore for StatisticsFile {
    fn record(&mut self, record: &ScoreRecord) -> Option<usize> {
        let rank = self.stats.record(record);
        match self.save() {
            Ok(()) => log::info!("Statistics saved ({} deaths)", self.stats.total_deaths()),
            Err(e) => log::warn!("Could not write statistics to {}: {}", self.path.display(), e),
        }
        rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cause: DeathCause, level: u32, score: u64) -> ScoreRecord {
        ScoreRecord {
            cause,
            level,
            advance_speed: 0,
            score,
        }
    }

    #[test]
    fn test_tally_and_best_level() {
        let mut stats = Statistics::new();
        stats.record(&record(DeathCause::Collision, 4, 300));
        stats.record(&record(DeathCause::Collision, 2, 10));
        stats.record(&record(DeathCause::FuelExhausted, 7, 900));
        assert_eq!(stats.deaths_by(DeathCause::Collision), 2);
        assert_eq!(stats.deaths_by(DeathCause::FuelExhausted), 1);
        assert_eq!(stats.deaths_by(DeathCause::SelfDestruct), 0);
        assert_eq!(stats.total_deaths(), 3);
        assert_eq!(stats.best_level, 7);
    }

    #[test]
    fn test_top_five() {
        let mut stats = Statistics::new();
        assert_eq!(stats.top_score(), None);
        assert_eq!(stats.record(&record(DeathCause::Collision, 1, 0)), None);

        let ranks: Vec<_> = [50, 80, 20, 90, 10, 60]
            .iter()
            .map(|&s| stats.record(&record(DeathCause::Collision, 3, s)))
            .collect();
        assert_eq!(ranks, vec![Some(1), Some(1), Some(3), Some(1), Some(5), Some(3)]);
        assert_eq!(stats.highscores, vec![90, 80, 60, 50, 20]);
        assert_eq!(stats.top_score(), Some(90));

        // Not better than the fifth
        assert_eq!(stats.record(&record(DeathCause::Collision, 3, 20)), None);
        assert!(stats.is_well_formed());
    }

    #[test]
    fn test_file_roundtrip_and_reset() {
        let dir = std::env::temp_dir().join(format!("asteroid-shower-stats-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("statistics.json");

        // Wrong shape: four high scores
        fs::write(
            &path,
            r#"{"deaths": [1, 2, 3], "best_level": 4, "highscores": [4, 3, 2, 1]}"#,
        )
        .unwrap();
        let mut file = StatisticsFile::open(&path);
        assert_eq!(file.stats(), &Statistics::default());

        assert_eq!(file.record(&record(DeathCause::SelfDestruct, 3, 120)), Some(1));
        let reopened = StatisticsFile::open(&path);
        assert_eq!(reopened.stats().highscores, vec![120, 0, 0, 0, 0]);
        assert_eq!(reopened.stats().deaths, [1, 0, 0]);

        fs::remove_dir_all(&dir).ok();
    }
}
