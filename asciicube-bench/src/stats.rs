/// Frame times in milliseconds, in recording order until a percentile sorts them
#[derive(Debug, Clone, Default)]
pub struct DurationSeries {
    values: Vec<f64>,
}

impl DurationSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value_ms: f64) {
        self.values.push(value_ms);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Linear interpolation between the order statistics around
    /// `percentile / 100 * (n - 1)`. An empty series yields 0.
    pub fn percentile(&mut self, percentile: f64) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.values.sort_by(|a, b| a.total_cmp(b));

        let position = percentile / 100.0 * (self.values.len() - 1) as f64;
        let lower = position.floor() as usize;
        let upper = position.ceil() as usize;
        let fraction = position - lower as f64;

        let mut result = self.values[lower];
        if upper != lower {
            result += (self.values[upper] - self.values[lower]) * fraction;
        }
        result
    }
}

/// Aggregates over the measured frames
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BenchmarkStats {
    pub frame_count: usize,
    pub total_ms: f64,
    pub average_ms: f64,
    pub percentile95_ms: f64,
    pub max_ms: f64,
}

impl BenchmarkStats {
    pub fn record(&mut self, frame_ms: f64) {
        self.frame_count += 1;
        self.total_ms += frame_ms;
        if frame_ms > self.max_ms {
            self.max_ms = frame_ms;
        }
    }

    /// Fill in the average and p95 once measurement is over
    pub fn finish(&mut self, series: &mut DurationSeries) {
        if self.frame_count > 0 {
            self.average_ms = self.total_ms / self.frame_count as f64;
        }
        self.percentile95_ms = series.percentile(95.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> DurationSeries {
        let mut s = DurationSeries::default();
        for &v in values {
            s.push(v);
        }
        s
    }

    #[test]
    fn test_percentile_empty() {
        assert_eq!(DurationSeries::default().percentile(95.0), 0.0);
    }

    #[test]
    fn test_percentile_single() {
        assert_eq!(series(&[4.0]).percentile(95.0), 4.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        // position = 0.95 * 4 = 3.8 -> 4 + (5 - 4) * 0.8
        let mut s = series(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        assert!((s.percentile(95.0) - 4.8).abs() < 1e-12);
        assert_eq!(s.percentile(50.0), 3.0);
        assert_eq!(s.percentile(0.0), 1.0);
        assert_eq!(s.percentile(100.0), 5.0);
    }

    #[test]
    fn test_stats_record_and_finish() {
        let mut s = DurationSeries::with_capacity(4);
        let mut stats = BenchmarkStats::default();
        for v in [2.0, 6.0, 4.0] {
            s.push(v);
            stats.record(v);
        }
        stats.finish(&mut s);

        assert_eq!(stats.frame_count, 3);
        assert_eq!(stats.total_ms, 12.0);
        assert_eq!(stats.average_ms, 4.0);
        assert_eq!(stats.max_ms, 6.0);
        // position = 0.95 * 2 = 1.9 -> 4 + 2 * 0.9
        assert!((stats.percentile95_ms - 5.8).abs() < 1e-12);
    }
}
