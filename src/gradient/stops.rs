use crate::foundation::core::Rgba;
use crate::foundation::error::{ConicError, ConicResult};

/// A validated stop: straight RGBA color at a position in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub color: Rgba,
    pub position: f64,
}

/// Unvalidated stop input.
///
/// Alpha may be omitted (defaults to 1). Position may be omitted, but then it must be omitted
/// on every stop of the list, in which case positions are spread evenly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopSpec {
    pub rgb: [f64; 3],
    pub alpha: Option<f64>,
    pub position: Option<f64>,
}

impl StopSpec {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: None,
            position: None,
        }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            alpha: Some(a),
            ..Self::rgb(r, g, b)
        }
    }

    pub fn from_color(color: Rgba) -> Self {
        Self::rgba(color.r, color.g, color.b, color.a)
    }

    /// Attach an explicit position.
    #[must_use]
    pub fn at(mut self, position: f64) -> Self {
        self.position = Some(position);
        self
    }
}

/// An immutable, validated list of color stops.
///
/// Invariants: at least two stops, every channel in `[0, 1]`, first position exactly 0, last
/// exactly 1, positions non-decreasing.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStops {
    stops: Vec<ColorStop>,
}

impl GradientStops {
    /// Validate `specs` into a stop list.
    ///
    /// Checks run in a fixed order: stop count, channel ranges, position mode, boundary
    /// positions, ordering. The first failing check determines the error.
    pub fn new(specs: impl IntoIterator<Item = StopSpec>) -> ConicResult<Self> {
        let specs: Vec<StopSpec> = specs.into_iter().collect();
        let n = specs.len();
        if n < 2 {
            return Err(ConicError::InvalidStopCount { count: n });
        }

        let mut colors = Vec::with_capacity(n);
        for (idx, spec) in specs.iter().enumerate() {
            let [r, g, b] = spec.rgb;
            let color = Rgba::new(r, g, b, spec.alpha.unwrap_or(1.0));
            if let Some(&value) = color
                .channels()
                .iter()
                .find(|c| !(0.0..=1.0).contains(*c))
            {
                return Err(ConicError::ChannelOutOfRange { stop: idx, value });
            }
            colors.push(color);
        }

        let explicit = specs.iter().filter(|s| s.position.is_some()).count();
        let positions: Vec<f64> = if explicit == 0 {
            let step = 1.0 / ((n - 1) as f64);
            (0..n)
                .map(|i| if i == n - 1 { 1.0 } else { i as f64 * step })
                .collect()
        } else if explicit == n {
            specs.iter().filter_map(|s| s.position).collect()
        } else {
            return Err(ConicError::MixedPositionSpecification);
        };

        let (first, last) = (positions[0], positions[n - 1]);
        if first != 0.0 || last != 1.0 {
            return Err(ConicError::BoundaryPositionMismatch { first, last });
        }

        if let Some(idx) = positions
            .windows(2)
            .position(|w| w[1].is_nan() || w[1] < w[0])
        {
            return Err(ConicError::UnorderedStops { index: idx + 1 });
        }

        let stops: Vec<ColorStop> = colors
            .into_iter()
            .zip(positions)
            .map(|(color, position)| ColorStop { color, position })
            .collect();
        tracing::debug!(
            count = stops.len(),
            auto_positions = explicit == 0,
            "validated color stops"
        );
        Ok(Self { stops })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false: a validated list holds at least two stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Color at normalized position `t`.
    ///
    /// `t` is clamped into `[0, 1]` (NaN reads as 0). The endpoints return the first and last
    /// stop colors exactly. Between them the smallest segment `i` with
    /// `pos[i] <= t <= pos[i + 1]` is interpolated; a zero-length segment yields its earlier
    /// stop.
    pub fn color_at(&self, t: f64) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        if t <= 0.0 {
            return self.stops[0].color;
        }
        if t >= 1.0 {
            return self.stops[last].color;
        }

        let idx = self
            .stops
            .windows(2)
            .position(|w| t <= w[1].position)
            .unwrap_or(last - 1);
        let (a, b) = (&self.stops[idx], &self.stops[idx + 1]);
        let span = b.position - a.position;
        let frac = if span > 0.0 {
            (t - a.position) / span
        } else {
            0.0
        };
        a.color.lerp(b.color, frac)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gradient/stops.rs"]
mod tests;
