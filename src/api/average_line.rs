use serde::{Deserialize, Serialize};

use crate::core::DataPoint;

/// Room above the line, in font sizes, needed to place the label above it.
pub const LABEL_ROOM_FONT_MULTIPLIER: f64 = 1.5;

/// Arithmetic mean of all point values; missing values count as zero.
///
/// Returns `0.0` for an empty slice.
#[must_use]
pub fn average(points: &[DataPoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum: f64 = points.iter().map(|point| point.value.unwrap_or(0.0)).sum();
    sum / points.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelPlacement {
    Above,
    Below,
}

/// Vertical placement of the average-line label relative to the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelOffset {
    pub placement: LabelPlacement,
    /// Signed baseline offset from the line, in pixels (negative is up).
    pub dy: f64,
}

/// Places the label above the line when there is more than
/// `1.5 * font_size` of room above `average_y`, otherwise below it.
///
/// No hysteresis: the label flips as soon as `average_y` crosses the threshold.
#[must_use]
pub fn label_offset(average_y: f64, font_size: f64) -> LabelOffset {
    let room = LABEL_ROOM_FONT_MULTIPLIER * font_size;
    if average_y > room {
        LabelOffset {
            placement: LabelPlacement::Above,
            dy: -0.5 * font_size,
        }
    } else {
        LabelOffset {
            placement: LabelPlacement::Below,
            dy: room,
        }
    }
}

/// Label text, e.g. `"Average Line: 20"`.
#[must_use]
pub fn average_label_text(display_name: &str, average: f64) -> String {
    let rounded = (average * 100.0).round() / 100.0;
    format!("{display_name}: {rounded}")
}
