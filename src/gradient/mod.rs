//! Ordered color stops and piecewise-linear color lookup.

pub(crate) mod stops;
