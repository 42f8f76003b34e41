use bar_visual_rs::api::{
    CategoryColorOverrides, CategoryColumn, HIGH_CONTRAST_STROKE_WIDTH, MeasureColumn,
    PropertyOverrides, QueryResult, build_view_model, names, resolve_point_colors,
};
use bar_visual_rs::core::{CategoricalPalette, ColorPalette, SelectionId};
use bar_visual_rs::render::Color;

#[test]
fn normal_mode_uses_palette_without_stroke() {
    let mut palette = CategoricalPalette::new();
    let id = SelectionId::for_row("c", 0);
    let colors = resolve_point_colors("North", &id, &CategoryColorOverrides::new(), &mut palette);

    assert_eq!(colors.stroke_color, None);
    assert_eq!(colors.stroke_width, 0.0);
    assert_eq!(colors.fill, palette.color_for("North"));
}

#[test]
fn palette_assignment_is_stable_per_category_string() {
    let mut palette = CategoricalPalette::new();
    let overrides = CategoryColorOverrides::new();
    let first = resolve_point_colors("A", &SelectionId::for_row("c", 0), &overrides, &mut palette);
    let other = resolve_point_colors("B", &SelectionId::for_row("c", 1), &overrides, &mut palette);
    let again = resolve_point_colors("A", &SelectionId::for_row("c", 7), &overrides, &mut palette);

    assert_eq!(first.fill, again.fill);
    assert_ne!(first.fill, other.fill);
    assert_eq!(palette.assigned_len(), 2);
}

#[test]
fn override_is_keyed_by_identity_not_index() {
    let mut palette = CategoricalPalette::new();
    let red = Color::from_hex("#FF0000").expect("hex");
    let id = SelectionId::new(["Region", "South"]);
    let mut overrides = CategoryColorOverrides::new();
    overrides.insert(id.clone(), red);

    let colors = resolve_point_colors("South", &id, &overrides, &mut palette);
    assert_eq!(colors.fill, red);

    let other = SelectionId::new(["Region", "North"]);
    let colors = resolve_point_colors("North", &other, &overrides, &mut palette);
    assert_ne!(colors.fill, red);
}

#[test]
fn overridden_category_does_not_shift_palette_assignment() {
    let red = Color::from_hex("#FF0000").expect("hex");
    let plain = QueryResult::new(
        CategoryColumn::new("c", ["a", "b"]),
        MeasureColumn::new("m", vec![Some(1.0), Some(2.0)]),
    );
    let overridden = QueryResult::new(
        CategoryColumn::new("c", ["a", "b"]).with_row_objects(
            0,
            PropertyOverrides::new().with_fill(names::COLOR_SELECTOR, names::FILL, red),
        ),
        MeasureColumn::new("m", vec![Some(1.0), Some(2.0)]),
    );

    let plain_model = build_view_model(&plain, &mut CategoricalPalette::new());
    let overridden_model = build_view_model(&overridden, &mut CategoricalPalette::new());
    assert_eq!(overridden_model.data_points[0].color, red);
    assert_eq!(
        overridden_model.data_points[1].color,
        plain_model.data_points[1].color
    );
}

#[test]
fn high_contrast_forces_background_fill_and_stroke() {
    let foreground = Color::WHITE;
    let background = Color::BLACK;
    let mut palette = CategoricalPalette::high_contrast(foreground, background, Color::WHITE);
    let red = Color::from_hex("#FF0000").expect("hex");
    let id = SelectionId::for_row("c", 0);
    let mut overrides = CategoryColorOverrides::new();
    overrides.insert(id.clone(), red);

    let colors = resolve_point_colors("a", &id, &overrides, &mut palette);
    assert_eq!(colors.fill, background);
    assert_eq!(colors.stroke_color, Some(foreground));
    assert_eq!(colors.stroke_width, HIGH_CONTRAST_STROKE_WIDTH);
}

#[test]
fn high_contrast_view_model_has_uniform_fill() {
    let mut palette = CategoricalPalette::high_contrast(Color::WHITE, Color::BLACK, Color::WHITE);
    let red = Color::from_hex("#FF0000").expect("hex");
    let query = QueryResult::new(
        CategoryColumn::new("c", ["a", "b", "c"]).with_row_objects(
            2,
            PropertyOverrides::new().with_fill(names::COLOR_SELECTOR, names::FILL, red),
        ),
        MeasureColumn::new("m", vec![Some(1.0), Some(2.0), Some(3.0)]),
    );

    let view_model = build_view_model(&query, &mut palette);
    assert!(view_model.data_points.iter().all(|point| {
        point.color == Color::BLACK && point.stroke_width == 2.0
    }));
}
