//! Per-pixel rasterization of a [`crate::GradientConfig`] into a [`crate::PixelBuffer`].

pub(crate) mod buffer;
pub(crate) mod pipeline;
pub(crate) mod raster;
