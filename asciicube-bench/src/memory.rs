/// Process memory readings from procfs and libc
use std::fs;

/// Used when the system will not report its page size
const FALLBACK_PAGE_SIZE_KIB: u64 = 4;

/// Memory figures for the current process; `None` where a source is unavailable
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
    /// Peak resident set size (`VmHWM`)
    pub max_rss_kib: Option<u64>,
    pub resident_kib: Option<u64>,
    pub data_kib: Option<u64>,
    /// Bytes handed out by the allocator (glibc only)
    pub heap_kib: Option<u64>,
}

impl MemorySnapshot {
    pub fn capture() -> Self {
        let max_rss_kib = fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| parse_peak_rss(&status));
        let (resident_kib, data_kib) = fs::read_to_string("/proc/self/statm")
            .ok()
            .and_then(|statm| parse_statm(&statm, page_size_kib()))
            .map_or((None, None), |(resident, data)| (Some(resident), Some(data)));

        Self {
            max_rss_kib,
            resident_kib,
            data_kib,
            heap_kib: heap_allocated_kib(),
        }
    }

    /// Peak RSS for the CSV column, -1 when unknown
    pub fn max_rss_field(&self) -> i64 {
        self.max_rss_kib.map_or(-1, |kib| kib as i64)
    }
}

/// System page size in KiB, 4 when `sysconf` fails
#[cfg(unix)]
pub fn page_size_kib() -> u64 {
    // SAFETY: sysconf has no preconditions
    let bytes = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    page_size_from_bytes(bytes as i64)
}

#[cfg(not(unix))]
pub fn page_size_kib() -> u64 {
    FALLBACK_PAGE_SIZE_KIB
}

fn page_size_from_bytes(bytes: i64) -> u64 {
    if bytes > 0 {
        bytes as u64 / 1024
    } else {
        FALLBACK_PAGE_SIZE_KIB
    }
}

#[cfg(all(target_os = "linux", target_env = "gnu"))]
fn heap_allocated_kib() -> Option<u64> {
    // SAFETY: mallinfo2 only reads allocator statistics
    let info = unsafe { libc::mallinfo2() };
    Some(info.uordblks as u64 / 1024)
}

#[cfg(not(all(target_os = "linux", target_env = "gnu")))]
fn heap_allocated_kib() -> Option<u64> {
    None
}

/// Extract `VmHWM` (in KiB) from the contents of `/proc/self/status`
pub fn parse_peak_rss(status: &str) -> Option<u64> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmHWM:"))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|value| value.parse().ok())
}

/// Resident and data-segment sizes in KiB from `/proc/self/statm`.
///
/// The file holds seven page counts: size resident shared text lib data dt.
pub fn parse_statm(statm: &str, page_size_kib: u64) -> Option<(u64, u64)> {
    let fields: Vec<u64> = statm
        .split_whitespace()
        .map(|f| f.parse().ok())
        .collect::<Option<Vec<u64>>>()?;
    if fields.len() != 7 {
        return None;
    }
    Some((fields[1] * page_size_kib, fields[5] * page_size_kib))
}
