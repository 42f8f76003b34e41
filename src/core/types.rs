use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Settings;
use crate::core::SelectionId;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Raw value of one row in the category column.
///
/// Host JSON strings always deserialize as `Text` and keep their exact
/// spelling. `DateTime` is only produced by hosts that hand over typed
/// date columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    #[serde(skip_deserializing)]
    DateTime(DateTime<Utc>),
    Text(String),
}

impl From<&str> for CategoryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CategoryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CategoryValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for CategoryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::DateTime(value) => {
                f.write_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// One rendered bar.
///
/// `category` is always the string form of the source category value, even
/// when `value` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub value: Option<f64>,
    pub category: String,
    pub color: Color,
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    pub identity: SelectionId,
}

/// Render-ready output of one update cycle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewModel {
    pub data_points: Vec<DataPoint>,
    pub data_max: f64,
    pub settings: Settings,
}

impl ViewModel {
    /// Quiescent model produced when the query result is incomplete.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty()
    }
}
