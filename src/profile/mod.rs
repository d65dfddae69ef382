//! Superelliptic shape profile: radius ratio and color-wheel angle per pixel offset.

pub(crate) mod radial;
