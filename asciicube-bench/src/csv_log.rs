/// Append-only CSV log of benchmark runs
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::memory::MemorySnapshot;
use crate::stats::BenchmarkStats;

pub const CSV_HEADER: &str = "timestamp,frames,total_ms,avg_ms,p95_ms,max_ms,max_rss_kib";

/// Format one data row (without the trailing newline)
pub fn format_row(timestamp: &str, stats: &BenchmarkStats, memory: &MemorySnapshot) -> String {
    format!(
        "{},{},{:.3},{:.3},{:.3},{:.3},{}",
        timestamp,
        stats.frame_count,
        stats.total_ms,
        stats.average_ms,
        stats.percentile95_ms,
        stats.max_ms,
        memory.max_rss_field()
    )
}

/// Append a row to `path`, creating parent directories as needed.
///
/// The header is written only when the file does not exist yet.
pub fn append_row(
    path: &Path,
    timestamp: &str,
    stats: &BenchmarkStats,
    memory: &MemorySnapshot,
) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let needs_header = !path.exists();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_header {
        debug!("creating benchmark log {}", path.display());
        writeln!(file, "{}", CSV_HEADER)?;
    }
    writeln!(file, "{}", format_row(timestamp, stats, memory))
}
