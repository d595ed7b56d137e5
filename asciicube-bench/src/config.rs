/// Benchmark settings read from the environment
use log::warn;
use nom::{character::complete::multispace0, number::complete::double, sequence::preceded, IResult};
use std::path::PathBuf;

pub const DEFAULT_RUN_SECONDS: f64 = 10.0;
pub const MIN_RUN_SECONDS: f64 = 1.0;
pub const DEFAULT_WARMUP_FRAMES: usize = 60;
pub const DEFAULT_LOG_PATH: &str = "logs/benchmark.csv";

pub const ENV_RUN_SECONDS: &str = "RUN_SECONDS";
pub const ENV_LOG_PATH: &str = "CUBE_BENCHMARK_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub run_seconds: f64,
    pub log_path: PathBuf,
    pub warmup_frames: usize,
}

impl BenchConfig {
    pub fn from_env() -> Self {
        let run_seconds = std::env::var(ENV_RUN_SECONDS).ok();
        let log_path = std::env::var(ENV_LOG_PATH).ok();
        Self::from_values(run_seconds.as_deref(), log_path.as_deref())
    }

    /// Build a config from raw variable values; unset and empty mean default
    pub fn from_values(run_seconds: Option<&str>, log_path: Option<&str>) -> Self {
        let run_seconds = match run_seconds.filter(|v| !v.is_empty()) {
            None => DEFAULT_RUN_SECONDS,
            Some(raw) => match parse_run_seconds(raw) {
                Some(seconds) => clamp_run_seconds(seconds),
                None => {
                    warn!(
                        "invalid {} value '{}', using default {:.2} seconds",
                        ENV_RUN_SECONDS, raw, DEFAULT_RUN_SECONDS
                    );
                    DEFAULT_RUN_SECONDS
                }
            },
        };

        let log_path = log_path
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_LOG_PATH);

        Self {
            run_seconds,
            log_path: PathBuf::from(log_path),
            warmup_frames: DEFAULT_WARMUP_FRAMES,
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn leading_number(input: &str) -> IResult<&str, f64> {
    preceded(multispace0, double)(input)
}

/// Parse the leading number of `raw`, ignoring any trailing text.
///
/// Non-finite values count as invalid.
pub fn parse_run_seconds(raw: &str) -> Option<f64> {
    match leading_number(raw) {
        Ok((_, value)) if value.is_finite() => Some(value),
        _ => None,
    }
}

pub fn clamp_run_seconds(requested: f64) -> f64 {
    requested.max(MIN_RUN_SECONDS)
}
