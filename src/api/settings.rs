use serde::{Deserialize, Serialize};

use crate::core::ContrastMode;
use crate::render::Color;

use super::PropertyOverrides;

/// Object group and property names shared with the host property pane.
pub mod names {
    pub const AXIS: &str = "axis";
    pub const COLOR_SELECTOR: &str = "colorSelector";
    pub const GENERAL_VIEW: &str = "generalView";
    pub const AVERAGE_LINE: &str = "averageLine";

    pub const SHOW: &str = "show";
    pub const FILL: &str = "fill";
    pub const OPACITY: &str = "opacity";
    pub const SHOW_HELP_LINK: &str = "showHelpLink";
    pub const HELP_LINK_COLOR: &str = "helpLinkColor";
    pub const DISPLAY_NAME: &str = "displayName";
    pub const SHOW_DATA_LABEL: &str = "showDataLabel";
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSettings {
    pub show: bool,
    pub fill: Color,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            show: false,
            fill: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralViewSettings {
    /// Stored as supplied; the property pane advertises 10..=100.
    pub opacity_percent: i64,
    pub show_help_link: bool,
    pub help_link_color: Color,
}

impl Default for GeneralViewSettings {
    fn default() -> Self {
        Self {
            opacity_percent: 100,
            show_help_link: false,
            help_link_color: Color::from_rgb8(0x80, 0xB0, 0xE0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageLineSettings {
    pub show: bool,
    pub display_name: String,
    pub fill: Color,
    pub show_data_label: bool,
}

impl Default for AverageLineSettings {
    fn default() -> Self {
        Self {
            show: false,
            display_name: "Average Line".to_owned(),
            fill: Color::from_rgb8(0x88, 0x88, 0x88),
            show_data_label: false,
        }
    }
}

/// Resolved appearance settings for one update cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub axis: AxisSettings,
    pub general_view: GeneralViewSettings,
    pub average_line: AverageLineSettings,
}

/// Merges user overrides over `defaults`.
///
/// Precedence per field: contrast-forced value, then a well-typed override,
/// then the default.
#[must_use]
pub fn resolve_settings(
    overrides: &PropertyOverrides,
    contrast: ContrastMode,
    defaults: &Settings,
) -> Settings {
    use names::*;

    let forced_foreground = match contrast {
        ContrastMode::High { foreground, .. } => Some(foreground),
        ContrastMode::Normal => None,
    };

    let axis = AxisSettings {
        show: overrides
            .bool_value(AXIS, SHOW)
            .unwrap_or(defaults.axis.show),
        fill: forced_foreground
            .or_else(|| overrides.fill_value(AXIS, FILL))
            .unwrap_or(defaults.axis.fill),
    };

    let general_view = GeneralViewSettings {
        opacity_percent: overrides
            .integer_value(GENERAL_VIEW, OPACITY)
            .unwrap_or(defaults.general_view.opacity_percent),
        show_help_link: overrides
            .bool_value(GENERAL_VIEW, SHOW_HELP_LINK)
            .unwrap_or(defaults.general_view.show_help_link),
        help_link_color: forced_foreground
            .or_else(|| overrides.fill_value(GENERAL_VIEW, HELP_LINK_COLOR))
            .unwrap_or(defaults.general_view.help_link_color),
    };

    let average_line = AverageLineSettings {
        show: overrides
            .bool_value(AVERAGE_LINE, SHOW)
            .unwrap_or(defaults.average_line.show),
        display_name: overrides
            .text_value(AVERAGE_LINE, DISPLAY_NAME)
            .map_or_else(|| defaults.average_line.display_name.clone(), str::to_owned),
        fill: forced_foreground
            .or_else(|| overrides.fill_value(AVERAGE_LINE, FILL))
            .unwrap_or(defaults.average_line.fill),
        show_data_label: overrides
            .bool_value(AVERAGE_LINE, SHOW_DATA_LABEL)
            .unwrap_or(defaults.average_line.show_data_label),
    };

    Settings {
        axis,
        general_view,
        average_line,
    }
}
