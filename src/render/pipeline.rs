use rayon::prelude::*;

use crate::{
    foundation::error::{ConicError, ConicResult},
    render::{
        buffer::PixelBuffer,
        raster::{GradientConfig, fill_row},
    },
};

/// Render a configuration sequentially.
///
/// This is the primary "one-shot" API. Rendering is a pure function of `config`: the same
/// input always produces byte-identical output.
#[tracing::instrument(
    skip(config),
    fields(width = config.canvas().width, height = config.canvas().height)
)]
pub fn render(config: &GradientConfig) -> PixelBuffer {
    let mut out = PixelBuffer::new(config.canvas());
    let stride = out.row_stride();
    for (y, row) in (0u32..).zip(out.data.chunks_exact_mut(stride)) {
        fill_row(config, y, row);
    }
    out
}

/// Row-level threading options for [`render_with`].
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Split rows across a rayon pool.
    pub parallel: bool,
    /// Dedicated pool size (parallel mode only). `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

/// Render with explicit threading options.
///
/// Parallel output is byte-identical to [`render`]; rows are independent and each is written
/// exactly once.
#[tracing::instrument(
    skip(config),
    fields(width = config.canvas().width, height = config.canvas().height)
)]
pub fn render_with(
    config: &GradientConfig,
    threading: &RenderThreading,
) -> ConicResult<PixelBuffer> {
    if threading.threads == Some(0) {
        return Err(ConicError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }
    if !threading.parallel {
        return Ok(render(config));
    }

    let mut out = PixelBuffer::new(config.canvas());
    let stride = out.row_stride();
    let fill = |data: &mut [u8]| {
        data.par_chunks_exact_mut(stride)
            .enumerate()
            .for_each(|(y, row)| fill_row(config, y as u32, row));
    };

    match threading.threads {
        Some(_) => {
            let pool = build_thread_pool(threading.threads)?;
            pool.install(|| fill(&mut out.data));
        }
        None => fill(&mut out.data),
    }
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> ConicResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ConicError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    tracing::debug!(threads = ?threads, "building render thread pool");
    builder
        .build()
        .map_err(|e| ConicError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
