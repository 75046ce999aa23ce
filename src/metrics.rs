//! Catalog observability and metrics.
//!
//! Lookup and render counters for the catalog. The library's accessor and
//! formatters are pure; recording happens at call sites (e.g., the preview
//! binary), so consumers that don't care about observability pay nothing.

use crate::language::Language;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global catalog metrics singleton.
pub struct CatalogMetrics {
    /// Number of catalog lookups for English
    english_lookups: AtomicUsize,

    /// Number of catalog lookups for Norwegian
    norwegian_lookups: AtomicUsize,

    /// Number of damage questions rendered
    damage_renders: AtomicUsize,

    /// Number of math questions rendered
    math_renders: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<CatalogMetrics> = OnceLock::new();

impl CatalogMetrics {
    /// Get the global catalog metrics instance.
    pub fn global() -> &'static CatalogMetrics {
        METRICS.get_or_init(|| CatalogMetrics {
            english_lookups: AtomicUsize::new(0),
            norwegian_lookups: AtomicUsize::new(0),
            damage_renders: AtomicUsize::new(0),
            math_renders: AtomicUsize::new(0),
        })
    }

    /// Record a catalog lookup for a language.
    pub fn record_lookup(&self, language: Language) {
        match language {
            Language::English => self.english_lookups.fetch_add(1, Ordering::Relaxed),
            Language::Norwegian => self.norwegian_lookups.fetch_add(1, Ordering::Relaxed),
        };
    }

    /// Record a rendered damage question.
    pub fn record_damage_render(&self) {
        self.damage_renders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rendered math question.
    pub fn record_math_render(&self) {
        self.math_renders.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup count for a language.
    pub fn lookups(&self, language: Language) -> usize {
        match language {
            Language::English => self.english_lookups.load(Ordering::Relaxed),
            Language::Norwegian => self.norwegian_lookups.load(Ordering::Relaxed),
        }
    }

    /// Get the current damage-question render count.
    pub fn damage_renders(&self) -> usize {
        self.damage_renders.load(Ordering::Relaxed)
    }

    /// Get the current math-question render count.
    pub fn math_renders(&self) -> usize {
        self.math_renders.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let english = self.lookups(Language::English);
        let norwegian = self.lookups(Language::Norwegian);
        let total = english + norwegian;
        let norwegian_share = if total > 0 {
            (norwegian as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            english_lookups: english,
            norwegian_lookups: norwegian,
            total_lookups: total,
            norwegian_share,
            damage_renders: self.damage_renders(),
            math_renders: self.math_renders(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.english_lookups.store(0, Ordering::Relaxed);
        self.norwegian_lookups.store(0, Ordering::Relaxed);
        self.damage_renders.store(0, Ordering::Relaxed);
        self.math_renders.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current catalog usage statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of English catalog lookups
    pub english_lookups: usize,

    /// Number of Norwegian catalog lookups
    pub norwegian_lookups: usize,

    /// Total catalog lookups across languages
    pub total_lookups: usize,

    /// Share of lookups that selected Norwegian, as a percentage (0-100)
    pub norwegian_share: f64,

    /// Number of damage questions rendered
    pub damage_renders: usize,

    /// Number of math questions rendered
    pub math_renders: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to reset metrics before each test
    fn reset_metrics() {
        CatalogMetrics::global().reset();
    }

    // ==================== Counter Tests ====================

    #[test]
    #[serial]
    fn test_record_lookup_per_language() {
        reset_metrics();
        let metrics = CatalogMetrics::global();

        assert_eq!(metrics.lookups(Language::English), 0);
        metrics.record_lookup(Language::English);
        metrics.record_lookup(Language::English);
        metrics.record_lookup(Language::Norwegian);

        assert_eq!(metrics.lookups(Language::English), 2);
        assert_eq!(metrics.lookups(Language::Norwegian), 1);
    }

    #[test]
    #[serial]
    fn test_record_renders() {
        reset_metrics();
        let metrics = CatalogMetrics::global();

        metrics.record_damage_render();
        metrics.record_math_render();
        metrics.record_math_render();

        assert_eq!(metrics.damage_renders(), 1);
        assert_eq!(metrics.math_renders(), 2);
    }

    // ==================== Report Tests ====================

    #[test]
    #[serial]
    fn test_report_empty() {
        reset_metrics();
        let report = CatalogMetrics::global().report();

        assert_eq!(report.total_lookups, 0);
        assert_eq!(report.norwegian_share, 0.0);
        assert_eq!(report.damage_renders, 0);
        assert_eq!(report.math_renders, 0);
    }

    #[test]
    #[serial]
    fn test_report_norwegian_share() {
        reset_metrics();
        let metrics = CatalogMetrics::global();

        // 3 English, 1 Norwegian = 25% Norwegian share
        metrics.record_lookup(Language::English);
        metrics.record_lookup(Language::English);
        metrics.record_lookup(Language::English);
        metrics.record_lookup(Language::Norwegian);

        let report = metrics.report();
        assert_eq!(report.total_lookups, 4);
        assert_eq!(report.norwegian_share, 25.0);
    }

    #[test]
    #[serial]
    fn test_report_all_norwegian() {
        reset_metrics();
        let metrics = CatalogMetrics::global();

        metrics.record_lookup(Language::Norwegian);
        metrics.record_lookup(Language::Norwegian);

        let report = metrics.report();
        assert_eq!(report.norwegian_share, 100.0);
    }

    #[test]
    #[serial]
    fn test_report_serializes() {
        reset_metrics();
        let report = CatalogMetrics::global().report();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"total_lookups\":0"));
    }

    // ==================== Singleton Tests ====================

    #[test]
    #[serial]
    fn test_global_returns_same_instance() {
        let metrics1 = CatalogMetrics::global();
        let metrics2 = CatalogMetrics::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    #[serial]
    fn test_metrics_persist_across_calls() {
        let metrics1 = CatalogMetrics::global();
        let initial = metrics1.lookups(Language::English);
        metrics1.record_lookup(Language::English);

        let metrics2 = CatalogMetrics::global();
        assert_eq!(metrics2.lookups(Language::English), initial + 1);
    }
}
