use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::render::Color;

/// One row handed to the host tooltip service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipItem {
    pub display_name: String,
    pub value: String,
    pub color: Color,
}

#[must_use]
pub fn tooltip_items(point: &DataPoint) -> Vec<TooltipItem> {
    vec![TooltipItem {
        display_name: point.category.clone(),
        value: point.value.map(|value| value.to_string()).unwrap_or_default(),
        color: point.color,
    }]
}
