use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: ColorDef = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, ColorDef::rgb(1.0, 0.0, 0.0));

    let c: ColorDef = serde_json::from_value(json!("#0000FF80")).unwrap();
    assert_eq!(c.rgb[2], 1.0);
    assert!((c.alpha.unwrap() - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_arrays() {
    let c: ColorDef = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, ColorDef::rgb(0.25, 0.5, 0.75));

    let c: ColorDef = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, ColorDef::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<ColorDef>(json!([0.1, 0.2])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    for bad in [
        "#ff00",
        "#gg0000",
        "#ff00001",
        "red",
        "#ffé000",
        "#+f+f+f",
        "#+f+f+f+f",
    ] {
        let err = parse_hex(bad).unwrap_err();
        assert!(matches!(err, ConicError::InvalidColor(_)), "{bad}");
    }
}

#[test]
fn attribute_strings_accept_hex_and_arrays() {
    assert_eq!(
        parse_color_str(" #00FF00 ").unwrap(),
        ColorDef::rgb(0.0, 1.0, 0.0)
    );
    assert_eq!(
        parse_color_str("[0, 0, 0, 1]").unwrap(),
        ColorDef::rgba(0.0, 0.0, 0.0, 1.0)
    );
    assert!(parse_color_str("[0, 0]").is_err());
    assert!(parse_color_str("[0, 0,").is_err());
}

#[test]
fn flat_colors_are_range_checked() {
    assert_eq!(
        ColorDef::rgb(0.5, 0.5, 0.5).to_rgba().unwrap(),
        Rgba::opaque(0.5, 0.5, 0.5)
    );
    let err = ColorDef::rgba(0.0, 0.0, 0.0, 2.0).to_rgba().unwrap_err();
    assert!(matches!(err, ConicError::InvalidColor(_)));
}
