//! Canvas settings - serde-backed configuration surface.
//!
//! Every field has a default, so an empty JSON object is a valid free canvas.
//! Settings are validated once and then turned into the runtime types
//! (`ZoneLayout`, `MarkerSettings`).

use crate::constants::{
    DEFAULT_DRAG_END_CLICK_DELAY_MS, DEFAULT_TOOLTIP_HIDE_DELAY_MS, DEFAULT_TOOLTIP_SHOW_DELAY_MS,
    DRAG_END_CLICK_THRESHOLD_MS, KEYBOARD_STEP,
};
use crate::error::{CanvasError, Result};
use crate::marker::MarkerSettings;
use crate::tooltip::TooltipSettings;
use crate::types::{GridConfig, ZoneConfig};
use crate::zones::ZoneLayout;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Explicit grid; computed from the zones when absent
    pub grid: Option<GridConfig>,
    pub zones: Vec<ZoneConfig>,
    /// Background clicks this soon after any drag are ignored (0 disables)
    pub drag_end_click_delay_ms: u64,
    /// Marker clicks this soon after that marker's drag are ignored
    pub marker_click_threshold_ms: u64,
    pub tooltip_show_delay_ms: u64,
    pub tooltip_hide_delay_ms: u64,
    /// Arrow-key step in surface percent
    pub keyboard_step: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            grid: None,
            zones: Vec::new(),
            drag_end_click_delay_ms: DEFAULT_DRAG_END_CLICK_DELAY_MS,
            marker_click_threshold_ms: DRAG_END_CLICK_THRESHOLD_MS,
            tooltip_show_delay_ms: DEFAULT_TOOLTIP_SHOW_DELAY_MS,
            tooltip_hide_delay_ms: DEFAULT_TOOLTIP_HIDE_DELAY_MS,
            keyboard_step: KEYBOARD_STEP,
        }
    }
}

impl CanvasSettings {
    /// Parse and validate settings from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check scalar values. Grid and zones are checked by `build_layout`.
    pub fn validate(&self) -> Result<()> {
        if !self.keyboard_step.is_finite() || self.keyboard_step <= 0.0 {
            return Err(CanvasError::InvalidSettings(format!(
                "keyboard_step must be a positive number, got {}",
                self.keyboard_step
            )));
        }
        Ok(())
    }

    /// Validated zone layout for these settings.
    pub fn build_layout(&self) -> Result<ZoneLayout> {
        ZoneLayout::new(self.grid, self.zones.clone())
    }

    pub fn drag_end_click_delay(&self) -> Duration {
        Duration::from_millis(self.drag_end_click_delay_ms)
    }

    pub fn marker_settings(&self) -> MarkerSettings {
        MarkerSettings {
            keyboard_step: self.keyboard_step,
            click_threshold: Duration::from_millis(self.marker_click_threshold_ms),
            tooltip: TooltipSettings::from_millis(
                self.tooltip_show_delay_ms,
                self.tooltip_hide_delay_ms,
            ),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Load settings from a JSON file.
pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<CanvasSettings> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read canvas settings from {}", path.display()))?;
    let settings = CanvasSettings::from_json(&json)
        .with_context(|| format!("Invalid canvas settings in {}", path.display()))?;
    info!(
        path = %path.display(),
        zones = settings.zones.len(),
        "Loaded canvas settings"
    );
    Ok(settings)
}
