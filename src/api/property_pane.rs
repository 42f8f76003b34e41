use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{SelectionId, ViewModel};

use super::overrides::fill_value;
use super::settings::names;

/// Inclusive numeric range advertised for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
}

pub const OPACITY_RANGE: NumericRange = NumericRange { min: 10, max: 100 };

/// One editable object instance shown in the host property pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPaneObject {
    pub object_name: String,
    /// Shown instead of the group name, e.g. the category for color entries.
    pub display_name: Option<String>,
    /// Identity the edited values are keyed by; `None` for visual-level groups.
    pub selector: Option<SelectionId>,
    pub properties: IndexMap<String, Value>,
    pub valid_ranges: IndexMap<String, NumericRange>,
}

impl PropertyPaneObject {
    fn group(object_name: &str) -> Self {
        Self {
            object_name: object_name.to_owned(),
            display_name: None,
            selector: None,
            properties: IndexMap::new(),
            valid_ranges: IndexMap::new(),
        }
    }

    fn with(mut self, property: &str, value: Value) -> Self {
        self.properties.insert(property.to_owned(), value);
        self
    }
}

/// Lists the editable settings surface for `view_model`.
///
/// `colorSelector` yields one entry per rendered point.
#[must_use]
pub fn enumerate_property_pane(view_model: &ViewModel) -> Vec<PropertyPaneObject> {
    let settings = &view_model.settings;
    let mut objects = Vec::with_capacity(3 + view_model.data_points.len());

    objects.push(
        PropertyPaneObject::group(names::AXIS)
            .with(names::SHOW, Value::Bool(settings.axis.show))
            .with(names::FILL, fill_value(settings.axis.fill)),
    );

    objects.extend(view_model.data_points.iter().map(|point| {
        let mut entry = PropertyPaneObject::group(names::COLOR_SELECTOR)
            .with(names::FILL, fill_value(point.color));
        entry.display_name = Some(point.category.clone());
        entry.selector = Some(point.identity.clone());
        entry
    }));

    let mut general_view = PropertyPaneObject::group(names::GENERAL_VIEW)
        .with(
            names::OPACITY,
            Value::from(settings.general_view.opacity_percent),
        )
        .with(
            names::SHOW_HELP_LINK,
            Value::Bool(settings.general_view.show_help_link),
        );
    general_view
        .valid_ranges
        .insert(names::OPACITY.to_owned(), OPACITY_RANGE);
    objects.push(general_view);

    objects.push(
        PropertyPaneObject::group(names::AVERAGE_LINE)
            .with(names::SHOW, Value::Bool(settings.average_line.show))
            .with(
                names::DISPLAY_NAME,
                Value::String(settings.average_line.display_name.clone()),
            )
            .with(names::FILL, fill_value(settings.average_line.fill))
            .with(
                names::SHOW_DATA_LABEL,
                Value::Bool(settings.average_line.show_data_label),
            ),
    );

    objects
}
