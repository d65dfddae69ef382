use kurbo::{Point, Vec2};

use crate::foundation::math::{TWO_PI, normalize_angle, polar};

/// Result of sampling a [`RadialProfile`] at an offset from its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileSample {
    /// Distance from the center relative to the shape boundary in the same direction.
    /// `<= 1` is inside the shape.
    pub radius_ratio: f64,
    /// Rotation-adjusted angle as a fraction of a full turn, in `[0, 1)`.
    pub angle_fraction: f64,
}

impl ProfileSample {
    pub fn is_outside(self) -> bool {
        self.radius_ratio > 1.0
    }
}

/// Center, semi-axes and angles of a superellipse (Lamé curve).
///
/// `p = 2` is an ellipse; `p -> ∞` approaches a rectangle and `p = 1` a diamond. The clip angle
/// rotates the shape boundary only, the rotation turns the color wheel only. All angles are in
/// radians.
///
/// Profiles are plain values: the `with_*` methods return a modified copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialProfile {
    center: Point,
    rx: f64,
    ry: f64,
    p: f64,
    rotation: f64,
    clip_angle: f64,
}

impl Default for RadialProfile {
    fn default() -> Self {
        Self {
            center: Point::ORIGIN,
            rx: 1.0,
            ry: 1.0,
            p: 2.0,
            rotation: 0.0,
            clip_angle: 0.0,
        }
    }
}

impl RadialProfile {
    pub fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            ..Self::default()
        }
    }

    pub fn circle(center: Point, r: f64) -> Self {
        Self::new(center, r, r)
    }

    #[must_use]
    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }

    #[must_use]
    pub fn with_radii(self, rx: f64, ry: f64) -> Self {
        Self { rx, ry, ..self }
    }

    #[must_use]
    pub fn with_exponent(self, p: f64) -> Self {
        Self { p, ..self }
    }

    #[must_use]
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    #[must_use]
    pub fn with_clip_angle(self, clip_angle: f64) -> Self {
        Self { clip_angle, ..self }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radii(&self) -> (f64, f64) {
        (self.rx, self.ry)
    }

    pub fn exponent(&self) -> f64 {
        self.p
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn clip_angle(&self) -> f64 {
        self.clip_angle
    }

    /// Distance from the center to the shape boundary along direction `theta`.
    ///
    /// `R(θ') = rx·ry / (|ry·cos θ'|^p + |rx·sin θ'|^p)^(1/p)` with `θ' = θ - clip_angle`.
    pub fn boundary_radius(&self, theta: f64) -> f64 {
        let t = normalize_angle(theta - self.clip_angle);
        let a = (self.ry * t.cos()).abs();
        let b = (self.rx * t.sin()).abs();
        // Factor out the larger term so `x^p` cannot overflow for large exponents.
        let m = a.max(b);
        let norm = m * ((a / m).powf(self.p) + (b / m).powf(self.p)).powf(1.0 / self.p);
        (self.rx * self.ry) / norm
    }

    /// Sample the profile at offset `(dx, dy)` from the center (y pointing up).
    ///
    /// The exact center has `theta = atan2(0, 0) = 0`, so it gets ratio 0 and the angle
    /// fraction of the bare rotation.
    pub fn angle_and_radius_ratio(&self, dx: f64, dy: f64) -> ProfileSample {
        let (r, theta) = polar(Vec2::new(dx, dy));
        let fraction = normalize_angle(theta - self.rotation) / TWO_PI;
        ProfileSample {
            radius_ratio: r / self.boundary_radius(theta),
            angle_fraction: if fraction < 1.0 { fraction } else { 0.0 },
        }
    }

    /// Whether `point` (same coordinate space as the center) lies inside or on the boundary.
    pub fn contains(&self, point: Point) -> bool {
        let offset = point - self.center;
        !self.angle_and_radius_ratio(offset.x, offset.y).is_outside()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/profile/radial.rs"]
mod tests;
