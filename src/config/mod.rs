//! Boundary model: JSON / attribute-string gradient definitions and their color literals.
//!
//! Everything here is presentation convenience. It parses hex and array colors, degrees and
//! shorthand radii, then lowers into the numeric [`crate::GradientConfig`].

pub(crate) mod color;
pub(crate) mod def;
