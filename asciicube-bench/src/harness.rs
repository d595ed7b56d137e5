/// Warmup and timed measurement around `render_one_frame`
use anyhow::{Context, Result};
use asciicube_core::CubeRenderer;
use log::debug;
use std::time::{Duration, Instant};

use crate::config::BenchConfig;
use crate::stats::{BenchmarkStats, DurationSeries};

const INITIAL_DURATION_CAPACITY: usize = 1024;

pub fn warmup(renderer: &mut CubeRenderer, frames: usize) -> Result<()> {
    for frame in 0..frames {
        renderer
            .render_one_frame()
            .with_context(|| format!("warmup frame {} failed", frame))?;
    }
    debug!("warmed up with {} frames", frames);
    Ok(())
}

/// Time one frame in milliseconds
pub fn measure_frame(renderer: &mut CubeRenderer) -> Result<f64> {
    let start = Instant::now();
    renderer.render_one_frame().context("frame render failed")?;
    Ok(duration_ms(start.elapsed()))
}

/// Render frames until the configured time has passed and at least one
/// frame was measured
pub fn run_benchmark(config: &BenchConfig, renderer: &mut CubeRenderer) -> Result<BenchmarkStats> {
    let mut timings = DurationSeries::with_capacity(INITIAL_DURATION_CAPACITY);
    let mut stats = BenchmarkStats::default();
    let phase_start = Instant::now();

    loop {
        let elapsed = phase_start.elapsed().as_secs_f64();
        if elapsed >= config.run_seconds && stats.frame_count > 0 {
            break;
        }

        let frame_ms = measure_frame(renderer)?;
        timings.push(frame_ms);
        stats.record(frame_ms);
    }

    debug!("measured {} frames", timings.len());
    stats.finish(&mut timings);
    Ok(stats)
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
