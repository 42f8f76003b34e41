use crate::api::{Settings, VisualConfig, average, average_label_text, label_offset};
use crate::core::{BandScale, LinearScale, ViewModel};
use crate::error::VisualResult;
use crate::interaction::{Emphasis, EmphasisMap};

use super::{LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const AVERAGE_LINE_WIDTH_PX: f64 = 1.0;
const LABEL_INSET_PX: f64 = 4.0;
const HELP_GLYPH: &str = "?";

/// Opacity of a bar at `emphasis`.
///
/// Neutral bars use the configured percentage, clamped to `[0.1, 1.0]`.
#[must_use]
pub fn bar_opacity(emphasis: Emphasis, settings: &Settings, config: &VisualConfig) -> f64 {
    match emphasis {
        Emphasis::Full => config.selected_opacity,
        Emphasis::Dimmed => config.dimmed_opacity,
        Emphasis::Neutral => (settings.general_view.opacity_percent as f64 / 100.0).clamp(0.1, 1.0),
    }
}

/// Lays out bars, axis labels, the average line, and the help glyph.
pub fn build_render_frame(
    view_model: &ViewModel,
    emphasis: &EmphasisMap,
    config: &VisualConfig,
) -> VisualResult<RenderFrame> {
    config.validate()?;
    let settings = &view_model.settings;
    let width = f64::from(config.viewport.width);
    let height = f64::from(config.viewport.height);
    let plot_height = if settings.axis.show {
        (height - config.axis_height_px).max(0.0)
    } else {
        height
    };

    let y_scale = LinearScale::new((0.0, view_model.data_max), (plot_height, 0.0))?;
    let x_scale = BandScale::new(
        (0.0, width),
        view_model.data_points.len(),
        config.band_padding,
    )?;
    let baseline = y_scale.value_to_pixel(0.0)?;
    let band_width = x_scale.band_width();

    let mut frame = RenderFrame::new(config.viewport);
    for (index, point) in view_model.data_points.iter().enumerate() {
        let level = emphasis.get(index).unwrap_or_default();
        let opacity = bar_opacity(level, settings, config);
        let top = y_scale.value_to_pixel(point.value.unwrap_or(0.0))?;
        frame.rects.push(RectPrimitive {
            x: x_scale.band_start(index),
            y: top.min(baseline),
            width: band_width,
            height: (top - baseline).abs(),
            fill_color: point.color.with_alpha(opacity),
            stroke_color: point.stroke_color.map(|stroke| stroke.with_alpha(opacity)),
            stroke_width: point.stroke_width,
            point_index: index,
        });

        if settings.axis.show && !point.category.is_empty() {
            frame.texts.push(TextPrimitive::new(
                point.category.clone(),
                x_scale.band_start(index) + band_width * 0.5,
                plot_height + (config.axis_height_px + config.font_size_px) * 0.5,
                config.font_size_px,
                settings.axis.fill,
                TextHAlign::Center,
            ));
        }
    }

    if settings.average_line.show && !view_model.is_empty() {
        let mean = average(&view_model.data_points);
        let average_y = y_scale.value_to_pixel(mean)?;
        frame.lines.push(LinePrimitive::new(
            0.0,
            average_y,
            width,
            average_y,
            AVERAGE_LINE_WIDTH_PX,
            settings.average_line.fill,
        ));
        if settings.average_line.show_data_label {
            let offset = label_offset(average_y, config.font_size_px);
            frame.texts.push(TextPrimitive::new(
                average_label_text(&settings.average_line.display_name, mean),
                LABEL_INSET_PX,
                average_y + offset.dy,
                config.font_size_px,
                settings.average_line.fill,
                TextHAlign::Left,
            ));
        }
    }

    if settings.general_view.show_help_link {
        frame.texts.push(TextPrimitive::new(
            HELP_GLYPH,
            width - LABEL_INSET_PX,
            config.font_size_px + LABEL_INSET_PX,
            config.font_size_px,
            settings.general_view.help_link_color,
            TextHAlign::Right,
        ));
    }

    Ok(frame)
}
