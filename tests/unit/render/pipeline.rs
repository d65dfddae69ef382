use super::*;
use crate::foundation::core::{Canvas, Rgba};
use crate::gradient::stops::{GradientStops, StopSpec};
use crate::profile::radial::RadialProfile;
use crate::render::raster::{ClipPolicy, compute_pixel};
use kurbo::Point;

fn rainbow() -> GradientConfig {
    let stops = GradientStops::new([
        StopSpec::rgb(1.0, 0.0, 0.0),
        StopSpec::rgb(1.0, 1.0, 0.0),
        StopSpec::rgb(0.0, 1.0, 0.0),
        StopSpec::rgb(0.0, 0.0, 1.0),
        StopSpec::rgb(1.0, 0.0, 0.0),
    ])
    .unwrap();
    let profile = RadialProfile::new(Point::new(30.0, 20.0), 25.0, 12.0)
        .with_exponent(4.0)
        .with_rotation(0.7)
        .with_clip_angle(-0.3);
    GradientConfig::new(
        Canvas::new(61, 37).unwrap(),
        profile,
        stops,
        ClipPolicy::FixedColor(Rgba::new(0.1, 0.1, 0.1, 0.5)),
    )
}

#[test]
fn render_is_deterministic() {
    let config = rainbow();
    let a = render(&config);
    let b = render(&config);
    assert_eq!(a, b);
    assert_eq!((a.width, a.height), (61, 37));
    assert_eq!(a.data.len(), 61 * 37 * 4);
}

#[test]
fn render_writes_every_pixel_via_compute_pixel() {
    let config = rainbow();
    let buf = render(&config);
    for y in 0..buf.height {
        for x in 0..buf.width {
            assert_eq!(buf.pixel(x, y), Some(compute_pixel(x, y, &config)));
        }
    }
}

#[test]
fn parallel_matches_sequential() {
    let config = rainbow();
    let seq = render(&config);
    for threads in [None, Some(1), Some(3)] {
        let opts = RenderThreading {
            parallel: true,
            threads,
        };
        assert_eq!(render_with(&config, &opts).unwrap(), seq);
    }
}

#[test]
fn sequential_threading_ignores_valid_thread_count() {
    let config = rainbow();
    let opts = RenderThreading {
        parallel: false,
        threads: Some(4),
    };
    assert_eq!(render_with(&config, &opts).unwrap(), render(&config));
}

#[test]
fn zero_threads_is_rejected_in_sequential_mode() {
    let opts = RenderThreading {
        parallel: false,
        threads: Some(0),
    };
    let err = render_with(&rainbow(), &opts).unwrap_err();
    assert!(matches!(err, ConicError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected_in_parallel_mode() {
    let opts = RenderThreading {
        parallel: true,
        threads: Some(0),
    };
    let err = render_with(&rainbow(), &opts).unwrap_err();
    assert!(matches!(err, ConicError::Validation(_)));
}
