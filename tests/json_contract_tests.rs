use bar_visual_rs::api::{
    CategoryColumn, MeasureColumn, QueryResult, VIEW_MODEL_JSON_SCHEMA_V1, VisualConfig,
    build_view_model,
};
use bar_visual_rs::core::{CategoricalPalette, Viewport, ViewModel};
use bar_visual_rs::VisualError;

fn sample() -> ViewModel {
    let query = QueryResult::new(
        CategoryColumn::new("c", ["X", "Y"]),
        MeasureColumn::new("m", vec![Some(1.5), None]),
    );
    build_view_model(&query, &mut CategoricalPalette::new())
}

#[test]
fn view_model_contract_roundtrips() {
    let view_model = sample();
    let json = view_model.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = ViewModel::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, view_model);
}

#[test]
fn bare_view_model_json_is_accepted() {
    let view_model = sample();
    let json = serde_json::to_string(&view_model).expect("serialize");
    let parsed = ViewModel::from_json_compat_str(&json).expect("parse bare");
    assert_eq!(parsed, view_model);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = sample()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace(
            &format!("\"schema_version\": {VIEW_MODEL_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );
    let err = ViewModel::from_json_compat_str(&json).expect_err("must reject");
    assert!(matches!(err, VisualError::Json(_)));
}

#[test]
fn config_fills_defaults_from_partial_json() {
    let config = VisualConfig::from_json_str(r#"{"viewport": {"width": 640, "height": 480}}"#)
        .expect("config");
    assert_eq!(config, VisualConfig::new(Viewport::new(640, 480)));

    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(VisualConfig::from_json_str(&json).expect("reparse"), config);
}

#[test]
fn config_validation_rejects_out_of_range_values() {
    let base = VisualConfig::new(Viewport::new(640, 480));
    assert!(base.clone().with_font_size_px(0.0).validate().is_err());
    assert!(base.clone().with_band_padding(1.0).validate().is_err());
    assert!(base.clone().with_selection_opacity(1.2, 0.4).validate().is_err());
    assert!(base.clone().with_axis_height_px(-1.0).validate().is_err());
    assert!(base.clone().with_help_link_url("").validate().is_err());
    assert!(
        VisualConfig::from_json_str(r#"{"viewport": {"width": 0, "height": 480}}"#).is_err()
    );
    base.validate().expect("defaults are valid");
}
