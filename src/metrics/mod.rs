//! Basic metrics instrumentation for validation traffic.
//!
//! Provides counters for accepted and rejected cédulas, broken down by
//! rejection reason, and for batch requests.

use crate::domain::RejectionReason;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for validation outcomes.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of validations performed
    validations_total: Arc<AtomicU64>,

    /// Number of validations that succeeded
    accepted_total: Arc<AtomicU64>,

    /// Rejections, indexed by `RejectionReason::index`
    rejected_by_reason: Arc<[AtomicU64; 6]>,

    /// Number of batch requests served
    batches_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            validations_total: Arc::new(AtomicU64::new(0)),
            accepted_total: Arc::new(AtomicU64::new(0)),
            rejected_by_reason: Arc::new(Default::default()),
            batches_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a successful validation.
    pub fn record_accepted(&self) {
        self.validations_total.fetch_add(1, Ordering::Relaxed);
        self.accepted_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected validation.
    pub fn record_rejected(&self, reason: RejectionReason) {
        self.validations_total.fetch_add(1, Ordering::Relaxed);
        self.rejected_by_reason[reason.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Record a batch request.
    pub fn record_batch(&self) {
        self.batches_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total validations.
    pub fn validations_total(&self) -> u64 {
        self.validations_total.load(Ordering::Relaxed)
    }

    /// Get total accepted.
    pub fn accepted_total(&self) -> u64 {
        self.accepted_total.load(Ordering::Relaxed)
    }

    /// Get total rejected across all reasons.
    pub fn rejected_total(&self) -> u64 {
        self.rejected_by_reason
            .iter()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Get rejections for one reason.
    pub fn rejected_for(&self, reason: RejectionReason) -> u64 {
        self.rejected_by_reason[reason.index()].load(Ordering::Relaxed)
    }

    /// Get total batch requests.
    pub fn batches_total(&self) -> u64 {
        self.batches_total.load(Ordering::Relaxed)
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.validations_total.store(0, Ordering::Relaxed);
        self.accepted_total.store(0, Ordering::Relaxed);
        for counter in self.rejected_by_reason.iter() {
            counter.store(0, Ordering::Relaxed);
        }
        self.batches_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        let rejected_by_reason = RejectionReason::ALL
            .iter()
            .map(|&r| (r.code(), self.rejected_for(r)))
            .collect();

        MetricsSummary {
            validations_total: self.validations_total(),
            accepted_total: self.accepted_total(),
            rejected_total: self.rejected_total(),
            rejected_by_reason,
            batches_total: self.batches_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub validations_total: u64,
    pub accepted_total: u64,
    pub rejected_total: u64,
    pub rejected_by_reason: BTreeMap<&'static str, u64>,
    pub batches_total: u64,
}
