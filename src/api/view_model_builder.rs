use tracing::debug;

use crate::core::{ColorPalette, DataPoint, ViewModel};

use super::color_resolver::{CategoryColorOverrides, resolve_point_colors};
use super::settings::{Settings, resolve_settings};
use super::{CategoryColumn, MeasureColumn, QueryResult};

/// Builds the render-ready view model for one update cycle.
///
/// Missing or empty category/measure sources yield `ViewModel::empty()`.
/// Mismatched column lengths are padded: a missing measure is `None` and a
/// missing category renders as an empty string.
pub fn build_view_model(query: &QueryResult, palette: &mut dyn ColorPalette) -> ViewModel {
    let Some((category, measure)) = primary_columns(query) else {
        debug!("query result incomplete; using empty view model");
        return ViewModel::empty();
    };

    let settings = resolve_settings(
        &query.objects,
        palette.contrast_mode(),
        &Settings::default(),
    );
    let color_overrides = CategoryColorOverrides::from_column(category);

    let row_count = category.len().max(measure.len());
    let mut data_points = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let label = category
            .values
            .get(row)
            .map(ToString::to_string)
            .unwrap_or_default();
        let identity = category.identity(row);
        let colors = resolve_point_colors(&label, &identity, &color_overrides, palette);
        data_points.push(DataPoint {
            value: measure.values.get(row).copied().flatten(),
            category: label,
            color: colors.fill,
            stroke_color: colors.stroke_color,
            stroke_width: colors.stroke_width,
            identity,
        });
    }

    if category.len() != measure.len() {
        debug!(
            categories = category.len(),
            measures = measure.len(),
            "category and measure lengths differ; padded missing rows"
        );
    }
    debug!(
        points = data_points.len(),
        overrides = color_overrides.len(),
        "built view model"
    );

    ViewModel {
        data_points,
        data_max: measure.maximum.filter(|max| max.is_finite()).unwrap_or(0.0),
        settings,
    }
}

fn primary_columns(query: &QueryResult) -> Option<(&CategoryColumn, &MeasureColumn)> {
    let categorical = query.categorical.as_ref()?;
    let category = categorical.categories.first()?;
    let measure = categorical.values.first()?;
    if category.is_empty() || measure.is_empty() {
        return None;
    }
    Some((category, measure))
}
