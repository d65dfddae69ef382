use crate::foundation::core::{Canvas, Rgba};
use crate::gradient::stops::GradientStops;
use crate::profile::radial::RadialProfile;

/// What to paint outside the profile's shape.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ClipPolicy {
    /// Keep painting the color wheel; the shape has no visible effect.
    #[default]
    Clamp,
    /// Paint a flat color wherever the radius ratio exceeds 1.
    FixedColor(Rgba),
}

/// Everything needed to render one image. Immutable; build a new one to change anything.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientConfig {
    canvas: Canvas,
    profile: RadialProfile,
    stops: GradientStops,
    clip: ClipPolicy,
}

impl GradientConfig {
    pub fn new(
        canvas: Canvas,
        profile: RadialProfile,
        stops: GradientStops,
        clip: ClipPolicy,
    ) -> Self {
        Self {
            canvas,
            profile,
            stops,
            clip,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn profile(&self) -> &RadialProfile {
        &self.profile
    }

    pub fn stops(&self) -> &GradientStops {
        &self.stops
    }

    pub fn clip(&self) -> ClipPolicy {
        self.clip
    }

    #[must_use]
    pub fn with_profile(self, profile: RadialProfile) -> Self {
        Self { profile, ..self }
    }

    #[must_use]
    pub fn with_clip(self, clip: ClipPolicy) -> Self {
        Self { clip, ..self }
    }
}

/// Straight color of raster pixel `(x, y)`, `y = 0` being the top row.
///
/// The profile lives in a y-up space where raster row `y` sits at `height - y`.
pub fn color_at_pixel(x: u32, y: u32, config: &GradientConfig) -> Rgba {
    let center = config.profile.center();
    let dx = f64::from(x) - center.x;
    let dy = f64::from(config.canvas.height) - f64::from(y) - center.y;
    let sample = config.profile.angle_and_radius_ratio(dx, dy);
    match config.clip {
        ClipPolicy::FixedColor(color) if sample.is_outside() => color,
        // Clamp deliberately reuses the unmodified angle position outside the shape.
        _ => config.stops.color_at(sample.angle_fraction),
    }
}

/// RGBA8 value of raster pixel `(x, y)`. Pure: depends only on its arguments.
pub fn compute_pixel(x: u32, y: u32, config: &GradientConfig) -> [u8; 4] {
    color_at_pixel(x, y, config).to_rgba8()
}

/// Fill one tightly packed raster row.
pub(crate) fn fill_row(config: &GradientConfig, y: u32, row: &mut [u8]) {
    for (x, px) in (0..config.canvas.width).zip(row.chunks_exact_mut(4)) {
        px.copy_from_slice(&compute_pixel(x, y, config));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
