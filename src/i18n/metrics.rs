//! Switch metrics module.
//!
//! Counts how picker requests were handled by a single switcher. The counters
//! are owned by the switcher rather than global, so two switchers (or two
//! tests) never see each other's numbers.

use serde::Serialize;

/// Counters for picker requests handled by a switcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchMetrics {
    /// Requests that moved the switcher to a different locale
    transitions: usize,

    /// Requests for the locale that was already selected
    self_transitions: usize,

    /// Requests rejected because the code was not a supported locale
    rejected: usize,
}

impl SwitchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request that changed the selected locale.
    pub fn record_transition(&mut self) {
        self.transitions += 1;
    }

    /// Record a request for the already selected locale.
    pub fn record_self_transition(&mut self) {
        self.self_transitions += 1;
    }

    /// Record a request rejected as an unknown locale.
    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn transitions(&self) -> usize {
        self.transitions
    }

    pub fn self_transitions(&self) -> usize {
        self.self_transitions
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let accepted = self.transitions + self.self_transitions;
        let total = accepted + self.rejected;
        let acceptance_rate = if total > 0 {
            (accepted as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            transitions: self.transitions,
            self_transitions: self.self_transitions,
            rejected: self.rejected,
            total_requests: total,
            acceptance_rate,
        }
    }
}

/// Snapshot of a switcher's counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub transitions: usize,
    pub self_transitions: usize,
    pub rejected: usize,

    /// Every request the switcher has seen
    pub total_requests: usize,

    /// Share of requests naming a supported locale, as a percentage (0-100)
    pub acceptance_rate: f64,
}
