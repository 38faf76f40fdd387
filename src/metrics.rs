//! Submission metrics for the analyzer.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

use crate::types::prediction::Predictions;

/// Metrics collector for form submissions
pub struct AnalyzerMetrics {
    /// Total submissions that produced predictions
    submissions: AtomicU64,
    /// Total submissions that failed during prediction
    failures: AtomicU64,
    /// Predictions labelled suitable
    suitable: AtomicU64,
    /// Predictions labelled high mortality risk
    high_risk: AtomicU64,
    /// Processing times (in microseconds)
    processing_times: RwLock<Vec<u64>>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl AnalyzerMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            submissions: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            suitable: AtomicU64::new(0),
            high_risk: AtomicU64::new(0),
            processing_times: RwLock::new(Vec::with_capacity(1000)),
            start_time: Instant::now(),
        }
    }

    /// Record a successful submission
    pub fn record_submission(&self, processing_time: Duration, predictions: &Predictions) {
        self.submissions.fetch_add(1, Ordering::Relaxed);

        if predictions.suitability == 1 {
            self.suitable.fetch_add(1, Ordering::Relaxed);
        }
        if predictions.mortality == 1 {
            self.high_risk.fetch_add(1, Ordering::Relaxed);
        }

        if let Ok(mut times) = self.processing_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only last 10000
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }
    }

    /// Record a failed submission
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get processing time statistics
    pub fn get_processing_stats(&self) -> ProcessingStats {
        let times = match self.processing_times.read() {
            Ok(times) => times,
            Err(_) => return ProcessingStats::default(),
        };
        if times.is_empty() {
            return ProcessingStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort_unstable();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();
        let percentile = |p: f64| sorted[((count as f64 * p) as usize).min(count - 1)];

        ProcessingStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: percentile(0.50),
            p95_us: percentile(0.95),
            p99_us: percentile(0.99),
            max_us: sorted[count - 1],
        }
    }

    /// Point-in-time copy of the counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            submissions: self.submissions.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            suitable: self.suitable.load(Ordering::Relaxed),
            high_risk: self.high_risk.load(Ordering::Relaxed),
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let snapshot = self.snapshot();
        let processing = self.get_processing_stats();
        let pct = |n: u64| {
            if snapshot.submissions > 0 {
                (n as f64 / snapshot.submissions as f64) * 100.0
            } else {
                0.0
            }
        };

        info!("╔══════════════════════════════════════════════════════════════╗");
        info!("║            PRE-SURGERY ANALYZER - METRICS SUMMARY            ║");
        info!("╠══════════════════════════════════════════════════════════════╣");
        info!(
            "║ Submissions: {:>8}  │  Failures: {:>8}  │  Uptime: {:>6}s ║",
            snapshot.submissions, snapshot.failures, snapshot.uptime_secs
        );
        info!(
            "║ Suitable: {:>5.1}%  │  High mortality risk: {:>5.1}%            ║",
            pct(snapshot.suitable),
            pct(snapshot.high_risk)
        );
        info!(
            "║ Processing Time (μs): mean={:>5} p50={:>5} p95={:>5} p99={:>5} ║",
            processing.mean_us, processing.p50_us, processing.p95_us, processing.p99_us
        );
        info!("╚══════════════════════════════════════════════════════════════╝");
    }
}

impl Default for AnalyzerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Processing time statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

/// Counter values exposed on the health endpoint
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsSnapshot {
    pub submissions: u64,
    pub failures: u64,
    pub suitable: u64,
    pub high_risk: u64,
    pub uptime_secs: u64,
}
