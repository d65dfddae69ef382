use crate::foundation::error::{ConicError, ConicResult};
use crate::foundation::math::lerp;

pub use kurbo::{Point, Vec2};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> ConicResult<Self> {
        if width == 0 || height == 0 {
            return Err(ConicError::validation(format!(
                "canvas must be at least 1x1, got {width}x{height}"
            )));
        }
        let fits = (width as usize)
            .checked_mul(height as usize)
            .and_then(|px| px.checked_mul(4))
            .is_some();
        if !fits {
            return Err(ConicError::validation(format!(
                "canvas {width}x{height} is too large to address as RGBA8"
            )));
        }
        Ok(Self { width, height })
    }

    /// Length in bytes of a tightly packed RGBA8 raster of this size.
    ///
    /// Cannot overflow for a canvas built through [`Canvas::new`].
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Straight (non-premultiplied) RGBA color with `f64` channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn channels(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channel-wise linear blend; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Quantize to straight RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
