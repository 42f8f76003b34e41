use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Accessibility mode reported by the host palette.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ContrastMode {
    #[default]
    Normal,
    /// Two-color palette: foreground for text and strokes, background for fills.
    High {
        foreground: Color,
        background: Color,
        foreground_selected: Color,
    },
}

impl ContrastMode {
    #[must_use]
    pub fn is_high_contrast(self) -> bool {
        matches!(self, Self::High { .. })
    }
}

/// Host color-palette service.
pub trait ColorPalette {
    /// Returns the color assigned to `key`; repeated calls with the same key
    /// must return the same color.
    fn color_for(&mut self, key: &str) -> Color;

    fn contrast_mode(&self) -> ContrastMode;
}

const THEME_COLORS: [Color; 10] = [
    Color::from_rgb8(0x01, 0xB8, 0xAA),
    Color::from_rgb8(0x37, 0x46, 0x49),
    Color::from_rgb8(0xFD, 0x62, 0x5E),
    Color::from_rgb8(0xF2, 0xC8, 0x0F),
    Color::from_rgb8(0x5F, 0x6B, 0x6D),
    Color::from_rgb8(0x8A, 0xD4, 0xEB),
    Color::from_rgb8(0xFE, 0x96, 0x66),
    Color::from_rgb8(0xA6, 0x69, 0x99),
    Color::from_rgb8(0x35, 0x99, 0xB8),
    Color::from_rgb8(0xDF, 0xBF, 0xBF),
];

/// Built-in palette assigning theme colors in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct CategoricalPalette {
    assigned: IndexMap<String, Color>,
    contrast: ContrastMode,
}

impl CategoricalPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn high_contrast(foreground: Color, background: Color, foreground_selected: Color) -> Self {
        Self {
            assigned: IndexMap::new(),
            contrast: ContrastMode::High {
                foreground,
                background,
                foreground_selected,
            },
        }
    }

    #[must_use]
    pub fn assigned_len(&self) -> usize {
        self.assigned.len()
    }
}

impl ColorPalette for CategoricalPalette {
    fn color_for(&mut self, key: &str) -> Color {
        if let Some(color) = self.assigned.get(key) {
            return *color;
        }
        let color = THEME_COLORS[self.assigned.len() % THEME_COLORS.len()];
        self.assigned.insert(key.to_owned(), color);
        color
    }

    fn contrast_mode(&self) -> ContrastMode {
        self.contrast
    }
}
