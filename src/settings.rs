//! Game settings
//!
//! Stored as JSON. Missing fields fall back to their defaults so older
//! settings files keep loading. The level layout itself is fixed and not
//! part of the settings.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL_MS};

/// Key codes (`KeyboardEvent.code` values) bound to each action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub reset: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "ArrowLeft".to_string(),
            right: "ArrowRight".to_string(),
            up: "ArrowUp".to_string(),
            down: "ArrowDown".to_string(),
            reset: "Space".to_string(),
        }
    }
}

/// Demo player tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotSettings {
    /// RNG seed; the same seed replays the same run
    pub seed: u64,
    /// Ticks between decisions
    pub decision_interval: u32,
}

impl Default for AutopilotSettings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            decision_interval: 25,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Timer period in milliseconds
    pub tick_interval_ms: u32,
    /// Cap on ticks emitted per frame (prevents a spiral of death)
    pub max_substeps: u32,
    pub bindings: KeyBindings,
    pub autopilot: AutopilotSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            max_substeps: MAX_SUBSTEPS,
            bindings: KeyBindings::default(),
            autopilot: AutopilotSettings::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Zero intervals would stall the session loop
    fn sanitize(&mut self) {
        if self.tick_interval_ms == 0 {
            log::warn!("tick_interval_ms must be positive, using {}", TICK_INTERVAL_MS);
            self.tick_interval_ms = TICK_INTERVAL_MS;
        }
        if self.max_substeps == 0 {
            self.max_substeps = MAX_SUBSTEPS;
        }
        if self.autopilot.decision_interval == 0 {
            self.autopilot.decision_interval = 1;
        }
    }

    /// Timer period in seconds
    pub fn tick_interval_secs(&self) -> f32 {
        self.tick_interval_ms as f32 / 1000.0
    }
}
