use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{VisualError, VisualResult};
use crate::render::Color;

/// User-set property values keyed by `(object group, property)`.
///
/// Values are kept as raw JSON because the host does not guarantee their
/// types; the typed accessors treat anything malformed as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyOverrides {
    groups: IndexMap<String, IndexMap<String, Value>>,
}

impl PropertyOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(input: &str) -> VisualResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisualError::Json(format!("failed to parse property overrides: {e}")))
    }

    /// Stores a raw value, replacing any previous one.
    pub fn set(&mut self, group: &str, property: &str, value: Value) {
        self.groups
            .entry(group.to_owned())
            .or_default()
            .insert(property.to_owned(), value);
    }

    #[must_use]
    pub fn with(mut self, group: &str, property: &str, value: Value) -> Self {
        self.set(group, property, value);
        self
    }

    /// Stores a color in the host fill shape `{"solid": {"color": "#RRGGBB"}}`.
    #[must_use]
    pub fn with_fill(self, group: &str, property: &str, color: Color) -> Self {
        self.with(group, property, fill_value(color))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.values().all(IndexMap::is_empty)
    }

    #[must_use]
    pub fn raw(&self, group: &str, property: &str) -> Option<&Value> {
        self.groups.get(group)?.get(property)
    }

    #[must_use]
    pub fn bool_value(&self, group: &str, property: &str) -> Option<bool> {
        let raw = self.raw(group, property)?;
        let value = raw.as_bool();
        if value.is_none() {
            trace!(group, property, "ignoring non-boolean override");
        }
        value
    }

    #[must_use]
    pub fn text_value(&self, group: &str, property: &str) -> Option<&str> {
        let raw = self.raw(group, property)?;
        let value = raw.as_str();
        if value.is_none() {
            trace!(group, property, "ignoring non-text override");
        }
        value
    }

    /// Integral values; finite fractional numbers are rounded.
    #[must_use]
    pub fn integer_value(&self, group: &str, property: &str) -> Option<i64> {
        let raw = self.raw(group, property)?;
        let value = raw.as_i64().or_else(|| {
            raw.as_f64()
                .filter(|number| number.is_finite())
                .map(|number| number.round() as i64)
        });
        if value.is_none() {
            trace!(group, property, "ignoring non-numeric override");
        }
        value
    }

    #[must_use]
    pub fn fill_value(&self, group: &str, property: &str) -> Option<Color> {
        let raw = self.raw(group, property)?;
        let value = raw
            .pointer("/solid/color")
            .and_then(Value::as_str)
            .and_then(|hex| Color::from_hex(hex).ok());
        if value.is_none() {
            trace!(group, property, "ignoring malformed fill override");
        }
        value
    }
}

/// Host fill shape for `color`.
#[must_use]
pub fn fill_value(color: Color) -> Value {
    serde_json::json!({ "solid": { "color": color.to_hex() } })
}
