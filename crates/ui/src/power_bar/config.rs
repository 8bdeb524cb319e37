//! Power bar configuration, optionally loaded from JSON.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use rendering::chrome::{LEFT_INDICATOR, SIDEBAR_BITS};

use super::error::PowerBarError;
use crate::tooltip_container::{DEFAULT_TOOLTIP_CONTAINER, SIMPLE_TOOLTIP};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerBarConfig {
    /// Template the tooltip container renders the text with.
    pub tooltip_template: String,
    /// Container that shows the hover tooltip; `None` disables it.
    pub tooltip_container: Option<String>,
    pub indicator_sheet: String,
    pub indicator_image: String,
    /// Offset of the bar's top-right corner from the top-right screen corner.
    pub anchor_offset: [f32; 2],
    /// Bar width and height in points.
    pub size: [f32; 2],
}

impl Default for PowerBarConfig {
    fn default() -> Self {
        Self {
            tooltip_template: SIMPLE_TOOLTIP.to_string(),
            tooltip_container: Some(DEFAULT_TOOLTIP_CONTAINER.to_string()),
            indicator_sheet: SIDEBAR_BITS.to_string(),
            indicator_image: LEFT_INDICATOR.to_string(),
            anchor_offset: [-16.0, 96.0],
            size: [24.0, 220.0],
        }
    }
}

impl PowerBarConfig {
    pub fn from_json_str(json: &str) -> Result<Self, PowerBarError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PowerBarError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
