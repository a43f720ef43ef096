use super::*;

#[test]
fn rounding_uses_per_field_precision() {
    let t = StackTransform {
        translate_y: 12.3456,
        scale: 0.912_345,
        rotation: 1.005,
        blur: 0.0049,
        z_index: 4,
    }
    .rounded();
    assert_eq!(t.translate_y, 12.35);
    assert_eq!(t.scale, 0.912);
    assert_eq!(t.blur, 0.0);
    assert_eq!(t.z_index, 4);
}

#[test]
fn style_strings_match_css_shape() {
    let style = StackTransform {
        translate_y: -120.5,
        scale: 0.9,
        rotation: 0.0,
        blur: 0.0,
        z_index: 3,
    }
    .to_style();
    assert_eq!(
        style.transform,
        "translate3d(0, -120.5px, 0) scale(0.9) rotate(0deg)"
    );
    assert_eq!(style.filter, "");
    assert_eq!(style.z_index, 3);

    let blurred = StackTransform {
        translate_y: 0.0,
        scale: 1.0,
        rotation: 2.5,
        blur: 1.25,
        z_index: 1,
    }
    .to_style();
    assert_eq!(
        blurred.transform,
        "translate3d(0, 0px, 0) scale(1) rotate(2.5deg)"
    );
    assert_eq!(blurred.filter, "blur(1.25px)");
}

#[test]
fn affine_pivots_at_top_center() {
    let t = StackTransform {
        translate_y: 40.0,
        scale: 0.5,
        rotation: 0.0,
        blur: 0.0,
        z_index: 0,
    };
    let m = t.to_affine();
    assert_eq!(m * kurbo::Point::new(0.0, 0.0), kurbo::Point::new(0.0, 40.0));
    assert_eq!(m * kurbo::Point::new(100.0, 200.0), kurbo::Point::new(50.0, 140.0));
}
