//! conicgrad is a procedural conic gradient rasterizer.
//!
//! Given a center, a superelliptic shape, a rotation, an ordered list of color stops and a clip
//! policy, it computes the color of every pixel in a fixed-size raster.
//!
//! # Pipeline overview
//!
//! 1. **Define**: a JSON or attribute-style [`GradientDef`] (hex/array colors, degrees)
//! 2. **Build**: `GradientDef -> GradientConfig` (validated, numeric, immutable)
//! 3. **Render**: `GradientConfig -> PixelBuffer` ([`render`] or [`render_with`] for row-parallel)
//!
//! The color wheel sweeps by angle: a full turn around the center maps the stop range exactly
//! once. The shape only decides which pixels count as outside, which matters when the clip
//! policy is a fixed color.
//!
//! Rendering is deterministic: the same configuration always produces byte-identical output,
//! sequential or parallel.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod gradient;
mod profile;
mod render;

pub use config::color::{ColorDef, parse_color_str, parse_hex};
pub use config::def::{ATTRIBUTE_NAMES, ClipDef, GradientDef, StopDef, StopsDef};
pub use foundation::core::{Canvas, Point, Rgba, Vec2};
pub use foundation::error::{ConicError, ConicResult};
pub use foundation::math::{TWO_PI, cartesian_to_polar, degrees_to_radians, normalize_angle};
pub use gradient::stops::{ColorStop, GradientStops, StopSpec};
pub use profile::radial::{ProfileSample, RadialProfile};
pub use render::buffer::PixelBuffer;
pub use render::pipeline::{RenderThreading, render, render_with};
pub use render::raster::{ClipPolicy, GradientConfig, color_at_pixel, compute_pixel};
