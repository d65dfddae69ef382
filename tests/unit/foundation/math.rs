use super::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn normalize_angle_stays_in_range() {
    for a in [
        -100.0, -TWO_PI, -PI, -1e-18, 0.0, 1e-18, PI, TWO_PI, 7.5, 1234.5,
    ] {
        let n = normalize_angle(a);
        assert!((0.0..TWO_PI).contains(&n), "normalize({a}) = {n}");
    }
}

#[test]
fn normalize_angle_wraps_negative_forward() {
    assert!(approx(normalize_angle(-FRAC_PI_2), 3.0 * FRAC_PI_2));
    assert_eq!(normalize_angle(-TWO_PI), 0.0);
    assert_eq!(normalize_angle(TWO_PI), 0.0);
}

#[test]
fn normalize_angle_ignores_full_turns() {
    for a in [-3.0, -0.25, 0.0, 0.5, 2.0, 6.0] {
        assert!(approx(normalize_angle(a + TWO_PI), normalize_angle(a)));
        assert!(approx(normalize_angle(a - 3.0 * TWO_PI), normalize_angle(a)));
    }
}

#[test]
fn degrees_convert_to_radians() {
    assert_eq!(degrees_to_radians(0.0), 0.0);
    assert!(approx(degrees_to_radians(180.0), PI));
    assert!(approx(degrees_to_radians(-90.0), -FRAC_PI_2));
}

#[test]
fn polar_of_center_is_zero() {
    let c = Point::new(50.0, 50.0);
    assert_eq!(cartesian_to_polar(c, c), (0.0, 0.0));

    let (r, theta) = cartesian_to_polar(Point::new(50.0, 60.0), c);
    assert!(approx(r, 10.0));
    assert!(approx(theta, FRAC_PI_2));
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp(0.25, 0.75, 0.0), 0.25);
    assert_eq!(lerp(0.25, 0.75, 1.0), 0.75);
    assert!(approx(lerp(0.0, 1.0, 0.25), 0.25));
}
