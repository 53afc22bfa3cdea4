use serde::{Deserialize, Serialize};

use crate::core::BarLayout;
use crate::error::{ChartError, ChartResult};

/// Public chart configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub bar_width: f64,
    pub bar_space: f64,
    /// Bar the host wants centered; ignored while dragging or when out of range.
    #[serde(default)]
    pub center_bar_index: Option<usize>,
    /// Report the bar under the viewport center while dragging.
    #[serde(default)]
    pub select_center_bar_on_scroll: bool,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(bar_width: f64, bar_space: f64) -> Self {
        Self {
            bar_width,
            bar_space,
            center_bar_index: None,
            select_center_bar_on_scroll: false,
        }
    }

    #[must_use]
    pub fn with_center_bar_index(mut self, index: Option<usize>) -> Self {
        self.center_bar_index = index;
        self
    }

    #[must_use]
    pub fn with_select_center_bar_on_scroll(mut self, enabled: bool) -> Self {
        self.select_center_bar_on_scroll = enabled;
        self
    }

    #[must_use]
    pub fn layout(self, bar_count: usize) -> BarLayout {
        BarLayout::new(bar_count, self.bar_width, self.bar_space)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.bar_width.is_finite() || self.bar_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !self.bar_space.is_finite() || self.bar_space < 0.0 {
            return Err(ChartError::InvalidData(
                "bar space must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}
