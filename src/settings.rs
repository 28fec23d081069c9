//! Runner settings
//!
//! Loaded from a JSON file by the headless runner. Missing fields fall back
//! to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Headless runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Number of host frames to simulate
    pub ticks: u64,
    /// Drive input from the demo pilot (otherwise the player idles)
    pub autopilot: bool,
    /// Press restart automatically on game over
    pub auto_restart: bool,
    /// Log every game event at info level
    pub log_events: bool,
    /// Print the final render snapshot as JSON
    pub dump_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            // One minute at 60 Hz
            ticks: 3600,
            autopilot: true,
            auto_restart: false,
            log_events: false,
            dump_snapshot: false,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}
