use bar_visual_rs::api::{PropertyOverrides, Settings, names, resolve_settings};
use bar_visual_rs::core::ContrastMode;
use bar_visual_rs::render::Color;
use serde_json::json;

fn high_contrast() -> ContrastMode {
    ContrastMode::High {
        foreground: Color::from_rgb8(0xFF, 0xFF, 0x00),
        background: Color::BLACK,
        foreground_selected: Color::WHITE,
    }
}

#[test]
fn empty_overrides_resolve_to_defaults() {
    let defaults = Settings::default();
    let settings = resolve_settings(&PropertyOverrides::new(), ContrastMode::Normal, &defaults);
    assert_eq!(settings, defaults);
    assert!(!settings.axis.show);
    assert_eq!(settings.general_view.opacity_percent, 100);
    assert_eq!(settings.average_line.display_name, "Average Line");
}

#[test]
fn well_typed_overrides_win_over_defaults() {
    let blue = Color::from_hex("#0000FF").expect("hex");
    let overrides = PropertyOverrides::new()
        .with(names::AXIS, names::SHOW, json!(true))
        .with_fill(names::AXIS, names::FILL, blue)
        .with(names::GENERAL_VIEW, names::OPACITY, json!(45))
        .with(names::GENERAL_VIEW, names::SHOW_HELP_LINK, json!(true))
        .with(names::AVERAGE_LINE, names::SHOW, json!(true))
        .with(names::AVERAGE_LINE, names::DISPLAY_NAME, json!("Mean"))
        .with(names::AVERAGE_LINE, names::SHOW_DATA_LABEL, json!(true));

    let settings = resolve_settings(&overrides, ContrastMode::Normal, &Settings::default());
    assert!(settings.axis.show);
    assert_eq!(settings.axis.fill, blue);
    assert_eq!(settings.general_view.opacity_percent, 45);
    assert!(settings.general_view.show_help_link);
    assert!(settings.average_line.show);
    assert_eq!(settings.average_line.display_name, "Mean");
    assert!(settings.average_line.show_data_label);
}

#[test]
fn malformed_overrides_fall_back_silently() {
    let overrides = PropertyOverrides::new()
        .with(names::AXIS, names::SHOW, json!("yes"))
        .with(names::AXIS, names::FILL, json!("#FF0000"))
        .with(names::GENERAL_VIEW, names::OPACITY, json!("50"))
        .with(names::AVERAGE_LINE, names::DISPLAY_NAME, json!(42))
        .with(
            names::AVERAGE_LINE,
            names::FILL,
            json!({"solid": {"color": "not-a-color"}}),
        );

    let defaults = Settings::default();
    let settings = resolve_settings(&overrides, ContrastMode::Normal, &defaults);
    assert_eq!(settings, defaults);
}

#[test]
fn opacity_is_stored_as_given_without_clamping() {
    let overrides = PropertyOverrides::new().with(names::GENERAL_VIEW, names::OPACITY, json!(5));
    let settings = resolve_settings(&overrides, ContrastMode::Normal, &Settings::default());
    assert_eq!(settings.general_view.opacity_percent, 5);

    let overrides =
        PropertyOverrides::new().with(names::GENERAL_VIEW, names::OPACITY, json!(72.6));
    let settings = resolve_settings(&overrides, ContrastMode::Normal, &Settings::default());
    assert_eq!(settings.general_view.opacity_percent, 73);
}

#[test]
fn contrast_mode_forces_foreground_over_overrides() {
    let red = Color::from_hex("#FF0000").expect("hex");
    let overrides = PropertyOverrides::new()
        .with_fill(names::AXIS, names::FILL, red)
        .with_fill(names::AVERAGE_LINE, names::FILL, red)
        .with_fill(names::GENERAL_VIEW, names::HELP_LINK_COLOR, red)
        .with(names::AXIS, names::SHOW, json!(true));

    let settings = resolve_settings(&overrides, high_contrast(), &Settings::default());
    let foreground = Color::from_rgb8(0xFF, 0xFF, 0x00);
    assert_eq!(settings.axis.fill, foreground);
    assert_eq!(settings.average_line.fill, foreground);
    assert_eq!(settings.general_view.help_link_color, foreground);
    // Non-color fields still honor overrides.
    assert!(settings.axis.show);
}

#[test]
fn custom_defaults_are_respected() {
    let mut defaults = Settings::default();
    defaults.average_line.display_name = "Mittelwert".to_owned();
    defaults.axis.show = true;

    let settings = resolve_settings(&PropertyOverrides::new(), ContrastMode::Normal, &defaults);
    assert_eq!(settings.average_line.display_name, "Mittelwert");
    assert!(settings.axis.show);
}

#[test]
fn overrides_parse_from_json() {
    let overrides = PropertyOverrides::from_json_str(
        r##"{"axis": {"show": true, "fill": {"solid": {"color": "#123456"}}}}"##,
    )
    .expect("overrides json");
    assert_eq!(overrides.bool_value(names::AXIS, names::SHOW), Some(true));
    assert_eq!(
        overrides
            .fill_value(names::AXIS, names::FILL)
            .map(Color::to_hex),
        Some("#123456".to_owned())
    );
    assert!(PropertyOverrides::from_json_str("[1, 2]").is_err());
}
