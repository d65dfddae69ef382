use super::*;

#[test]
fn canvas_rejects_empty_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    let c = Canvas::new(3, 2).unwrap();
    assert_eq!(c.rgba8_len(), 24);
}

#[test]
fn canvas_rejects_unaddressable_sizes() {
    let err = Canvas::new(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, ConicError::Validation(_)));
    assert!(Canvas::new(u32::MAX, 1).is_ok());
}

#[test]
fn rgba_quantizes_with_rounding_and_clamping() {
    assert_eq!(Rgba::opaque(1.0, 0.0, 0.0).to_rgba8(), [255, 0, 0, 255]);
    assert_eq!(Rgba::new(0.5, 0.2, 0.0, 0.0).to_rgba8(), [128, 51, 0, 0]);
    assert_eq!(Rgba::new(1.5, -0.5, 0.0, 1.0).to_rgba8(), [255, 0, 0, 255]);
}

#[test]
fn rgba_lerp_is_channelwise() {
    let a = Rgba::new(0.0, 1.0, 0.0, 1.0);
    let b = Rgba::new(1.0, 0.0, 0.5, 0.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba::new(0.5, 0.5, 0.25, 0.5));
}
