use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Accepted step delays, shared by settings sanitizing and the speed slider.
pub const TICK_INTERVAL_RANGE_MS: std::ops::RangeInclusive<u64> = 1..=1000;

/// Runtime configuration. Every field has a default, so a settings file only
/// needs the keys it wants to change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interval between state machine ticks.
    pub tick_interval_ms: u64,
    /// Upper bound on ticks run in a single frame.
    pub max_ticks_per_frame: u32,
    pub window_width: f32,
    pub window_height: f32,
    pub node_radius: f32,
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: 16,
            max_ticks_per_frame: 8,
            window_width: 1024.0,
            window_height: 768.0,
            node_radius: 20.0,
            show_fps: true,
        }
    }
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("no settings file given, using defaults");
            return Ok(Self::default());
        };

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(raw).context("invalid settings JSON")?;
        Ok(settings.sanitized())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    fn sanitized(mut self) -> Self {
        self.tick_interval_ms = self
            .tick_interval_ms
            .clamp(*TICK_INTERVAL_RANGE_MS.start(), *TICK_INTERVAL_RANGE_MS.end());
        self.max_ticks_per_frame = self.max_ticks_per_frame.max(1);
        self.window_width = self.window_width.max(320.0);
        self.window_height = self.window_height.max(240.0);
        self.node_radius = self.node_radius.clamp(4.0, 40.0);
        self
    }

    pub fn with_overrides(
        mut self,
        tick_interval_ms: Option<u64>,
        max_ticks_per_frame: Option<u32>,
        hide_fps: bool,
    ) -> Self {
        if let Some(tick_interval_ms) = tick_interval_ms {
            self.tick_interval_ms = tick_interval_ms;
        }
        if let Some(max_ticks_per_frame) = max_ticks_per_frame {
            self.max_ticks_per_frame = max_ticks_per_frame;
        }
        if hide_fps {
            self.show_fps = false;
        }
        self.sanitized()
    }
}
