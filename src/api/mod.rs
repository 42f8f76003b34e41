mod average_line;
mod color_resolver;
mod config;
mod controller;
mod json_contract;
mod overrides;
mod plugin_dispatch;
mod plugin_registry;
mod property_pane;
mod query;
mod selection_controller;
mod settings;
mod tooltip;
mod view_model_builder;

pub use average_line::{
    LABEL_ROOM_FONT_MULTIPLIER, LabelOffset, LabelPlacement, average, average_label_text,
    label_offset,
};
pub use color_resolver::{
    CategoryColorOverrides, HIGH_CONTRAST_STROKE_WIDTH, PointColors, resolve_point_colors,
};
pub use config::{DEFAULT_HELP_LINK_URL, VisualConfig};
pub use controller::{LinkLauncher, VisualController, VisualState};
pub use json_contract::{VIEW_MODEL_JSON_SCHEMA_V1, ViewModelJsonContractV1};
pub use overrides::{PropertyOverrides, fill_value};
pub use property_pane::{NumericRange, OPACITY_RANGE, PropertyPaneObject, enumerate_property_pane};
pub use query::{CategoricalData, CategoryColumn, MeasureColumn, QueryResult};
pub use selection_controller::{ClickTarget, PendingSelection, SettledSelection, click_and_sync};
pub use settings::{
    AverageLineSettings, AxisSettings, GeneralViewSettings, Settings, names, resolve_settings,
};
pub use tooltip::{TooltipItem, tooltip_items};
pub use view_model_builder::build_view_model;
