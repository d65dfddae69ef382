use kurbo::{Point, Vec2};

/// One full turn in radians.
pub const TWO_PI: f64 = std::f64::consts::TAU;

/// Map any angle (radians) into `[0, 2π)`.
///
/// Negative angles wrap forward, so `-π/2` becomes `3π/2`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TWO_PI);
    // rem_euclid of a tiny negative value can round up to exactly one turn.
    if a >= TWO_PI { 0.0 } else { a }
}

/// Degrees to radians, one multiply by π/180.
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

/// Polar form `(r, theta)` of `point` relative to `center`.
///
/// `theta` follows `atan2`, so the center itself maps to `(0, 0)`.
pub fn cartesian_to_polar(point: Point, center: Point) -> (f64, f64) {
    polar(point - center)
}

pub(crate) fn polar(offset: Vec2) -> (f64, f64) {
    (offset.hypot(), offset.atan2())
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
