//! Lookup and load observability counters.
//!
//! Process-wide counters for table lookups and language loads, cheap
//! enough to record on every call. The host can pull a report for
//! diagnostics output.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup/load metrics singleton.
pub struct LookupMetrics {
    /// Number of lookups that found their key in the active table
    lookup_hits: AtomicUsize,

    /// Number of lookups whose key was absent (rendered as empty string)
    lookup_misses: AtomicUsize,

    /// Number of language loads that completed successfully
    loads: AtomicUsize,

    /// Number of language loads that failed
    load_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            lookup_hits: AtomicUsize::new(0),
            lookup_misses: AtomicUsize::new(0),
            loads: AtomicUsize::new(0),
            load_failures: AtomicUsize::new(0),
        })
    }

    /// Record a lookup that found its key.
    pub fn record_lookup_hit(&self) {
        self.lookup_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup whose key was absent.
    pub fn record_lookup_miss(&self) {
        self.lookup_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successfully completed language load.
    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed language load.
    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup hit count.
    pub fn lookup_hits(&self) -> usize {
        self.lookup_hits.load(Ordering::Relaxed)
    }

    /// Get the current lookup miss count.
    pub fn lookup_misses(&self) -> usize {
        self.lookup_misses.load(Ordering::Relaxed)
    }

    /// Get the current completed load count.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Get the current failed load count.
    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.lookup_hits();
        let misses = self.lookup_misses();
        let total_lookups = hits + misses;
        let lookup_hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        let loads = self.loads();
        let failures = self.load_failures();
        let total_loads = loads + failures;
        let load_success_rate = if total_loads > 0 {
            (loads as f64 / total_loads as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookup_hits: hits,
            lookup_misses: misses,
            lookup_hit_rate,
            loads,
            load_failures: failures,
            load_success_rate,
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
        self.loads.store(0, Ordering::Relaxed);
        self.load_failures.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current lookup and load statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookup hits
    pub lookup_hits: usize,

    /// Number of lookup misses
    pub lookup_misses: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub lookup_hit_rate: f64,

    /// Number of completed loads
    pub loads: usize,

    /// Number of failed loads
    pub load_failures: usize,

    /// Load success rate as a percentage (0-100)
    pub load_success_rate: f64,
}
