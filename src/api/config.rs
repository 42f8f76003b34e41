use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{VisualError, VisualResult};

pub const DEFAULT_HELP_LINK_URL: &str = "https://microsoft.github.io/PowerBI-visuals/docs/overview/";

/// Presentation configuration of a visual instance.
///
/// Serializable so hosts can persist it next to their own layout state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualConfig {
    pub viewport: Viewport,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
    /// Height reserved below the bars for category labels when the axis is shown.
    #[serde(default = "default_axis_height_px")]
    pub axis_height_px: f64,
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    #[serde(default = "default_selected_opacity")]
    pub selected_opacity: f64,
    #[serde(default = "default_dimmed_opacity")]
    pub dimmed_opacity: f64,
    #[serde(default = "default_help_link_url")]
    pub help_link_url: String,
}

impl VisualConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            font_size_px: default_font_size_px(),
            axis_height_px: default_axis_height_px(),
            band_padding: default_band_padding(),
            selected_opacity: default_selected_opacity(),
            dimmed_opacity: default_dimmed_opacity(),
            help_link_url: default_help_link_url(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_font_size_px(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_axis_height_px(mut self, axis_height_px: f64) -> Self {
        self.axis_height_px = axis_height_px;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    /// Sets the opacity of selected and dimmed bars while a selection is active.
    #[must_use]
    pub fn with_selection_opacity(mut self, selected: f64, dimmed: f64) -> Self {
        self.selected_opacity = selected;
        self.dimmed_opacity = dimmed;
        self
    }

    #[must_use]
    pub fn with_help_link_url(mut self, url: impl Into<String>) -> Self {
        self.help_link_url = url.into();
        self
    }

    pub fn validate(&self) -> VisualResult<()> {
        if !self.viewport.is_valid() {
            return Err(VisualError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(VisualError::InvalidConfig(
                "font_size_px must be finite and > 0".to_owned(),
            ));
        }
        if !self.axis_height_px.is_finite() || self.axis_height_px < 0.0 {
            return Err(VisualError::InvalidConfig(
                "axis_height_px must be finite and >= 0".to_owned(),
            ));
        }
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(VisualError::InvalidConfig(
                "band_padding must be in [0, 1)".to_owned(),
            ));
        }
        for (name, value) in [
            ("selected_opacity", self.selected_opacity),
            ("dimmed_opacity", self.dimmed_opacity),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(VisualError::InvalidConfig(format!(
                    "{name} must be in [0, 1]"
                )));
            }
        }
        if self.help_link_url.is_empty() {
            return Err(VisualError::InvalidConfig(
                "help_link_url must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> VisualResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| VisualError::Json(format!("failed to parse visual config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> VisualResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VisualError::Json(format!("failed to serialize visual config: {e}")))
    }
}

fn default_font_size_px() -> f64 {
    12.0
}

fn default_axis_height_px() -> f64 {
    25.0
}

fn default_band_padding() -> f64 {
    0.1
}

fn default_selected_opacity() -> f64 {
    1.0
}

fn default_dimmed_opacity() -> f64 {
    0.4
}

fn default_help_link_url() -> String {
    DEFAULT_HELP_LINK_URL.to_owned()
}
