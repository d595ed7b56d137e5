/// asciicube-bench: times off-screen cube frames and appends a summary row to a CSV log
use anyhow::{Context, Result};
use asciicube_core::{CubeRenderer, RenderConfig};
use chrono::Utc;
use log::warn;

mod config;
mod csv_log;
mod harness;
mod memory;
mod stats;

use config::{BenchConfig, MIN_RUN_SECONDS};
use memory::MemorySnapshot;
use stats::BenchmarkStats;

fn main() -> Result<()> {
    env_logger::init();

    let config = BenchConfig::from_env();
    println!("[benchmark] Warmup frames : {}", config.warmup_frames);
    println!(
        "[benchmark] Measure time  : {:.2} seconds (minimum {:.1})",
        config.run_seconds, MIN_RUN_SECONDS
    );
    println!("[benchmark] CSV output    : {}", config.log_path.display());

    let mut renderer =
        CubeRenderer::new(&RenderConfig::default()).context("renderer initialization failed")?;

    harness::warmup(&mut renderer, config.warmup_frames)?;
    let before = MemorySnapshot::capture();
    let stats = harness::run_benchmark(&config, &mut renderer)?;
    let after = MemorySnapshot::capture();
    renderer.teardown();

    let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    print_summary(&timestamp, &stats, &before, &after);

    match csv_log::append_row(&config.log_path, &timestamp, &stats, &after) {
        Ok(()) => println!("  CSV Output           : {}", config.log_path.display()),
        Err(e) => warn!(
            "failed to append CSV row to {}: {}",
            config.log_path.display(),
            e
        ),
    }

    Ok(())
}

fn print_summary(
    timestamp: &str,
    stats: &BenchmarkStats,
    before: &MemorySnapshot,
    after: &MemorySnapshot,
) {
    println!();
    println!("Benchmark Summary ({})", timestamp);
    println!("  Frames Rendered      : {}", stats.frame_count);
    println!("  Total Frame Time     : {:.3} ms", stats.total_ms);
    println!("  Average Frame Time   : {:.3} ms", stats.average_ms);
    println!("  95th Percentile      : {:.3} ms", stats.percentile95_ms);
    println!("  Max Frame Time       : {:.3} ms", stats.max_ms);
    println!("  Max RSS (before)     : {} KiB", before.max_rss_field());
    println!("  Max RSS (after)      : {} KiB", after.max_rss_field());
    println!(
        "  RSS delta            : {} KiB",
        after.max_rss_field() - before.max_rss_field()
    );
    if let Some(resident) = after.resident_kib {
        println!("  Resident Set (statm) : {} KiB", resident);
    }
    if let Some(data) = after.data_kib {
        println!("  Data Segment (statm) : {} KiB", data);
    }
    match after.heap_kib {
        Some(heap) => println!("  Heap Allocated       : {} KiB", heap),
        None => println!("  Heap Allocated       : (mallinfo unavailable on this platform)"),
    }
}
