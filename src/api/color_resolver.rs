use indexmap::IndexMap;

use crate::core::{ColorPalette, ContrastMode, SelectionId};
use crate::render::Color;

use super::settings::names;
use super::CategoryColumn;

/// Stroke width applied to every bar in high-contrast mode.
pub const HIGH_CONTRAST_STROKE_WIDTH: f64 = 2.0;

/// Fill and stroke derived for one data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointColors {
    pub fill: Color,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
}

/// Per-category fill overrides keyed by category identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryColorOverrides {
    fills: IndexMap<SelectionId, Color>,
}

impl CategoryColorOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects `colorSelector.fill` from the per-row objects of `column`.
    #[must_use]
    pub fn from_column(column: &CategoryColumn) -> Self {
        let fills = column
            .objects
            .iter()
            .enumerate()
            .filter_map(|(row, objects)| {
                let fill = objects
                    .as_ref()?
                    .fill_value(names::COLOR_SELECTOR, names::FILL)?;
                Some((column.identity(row), fill))
            })
            .collect();
        Self { fills }
    }

    pub fn insert(&mut self, identity: SelectionId, fill: Color) {
        self.fills.insert(identity, fill);
    }

    #[must_use]
    pub fn get(&self, identity: &SelectionId) -> Option<Color> {
        self.fills.get(identity).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fills.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }
}

/// Derives the colors of the point with `category` and `identity`.
///
/// High contrast wins over any override. Otherwise an override keyed by the
/// identity wins over the palette color assigned to the category string.
pub fn resolve_point_colors(
    category: &str,
    identity: &SelectionId,
    overrides: &CategoryColorOverrides,
    palette: &mut dyn ColorPalette,
) -> PointColors {
    match palette.contrast_mode() {
        ContrastMode::High {
            foreground,
            background,
            ..
        } => PointColors {
            fill: background,
            stroke_color: Some(foreground),
            stroke_width: HIGH_CONTRAST_STROKE_WIDTH,
        },
        ContrastMode::Normal => {
            // Consulted even when overridden so palette assignment order
            // does not depend on which categories carry overrides.
            let palette_fill = palette.color_for(category);
            let fill = overrides.get(identity).unwrap_or(palette_fill);
            PointColors {
                fill,
                stroke_color: None,
                stroke_width: 0.0,
            }
        }
    }
}
