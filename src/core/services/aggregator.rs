//! Severity aggregation
//!
//! Folds check outcomes, in evaluation order, into one [`CheckReport`].
//! Every failure counts as critical under the current policy.

use crate::core::models::{CheckReport, Severity, ValidationOutcome};

/// Accumulates outcomes one check at a time
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    severity: Severity,
    messages: Vec<String>,
}

impl Aggregator {
    /// Start with no failures
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in the outcome of one check
    pub fn record(&mut self, label: &str, outcome: &ValidationOutcome) {
        if let Err(err) = outcome {
            log::debug!("{label} check failed: {err}");
            self.severity = self.severity.worst(Severity::Critical);
            self.messages.push(err.to_string());
        }
    }

    /// Current aggregate severity
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Finish with the family counts
    #[must_use]
    pub fn into_report(self, disk_count: usize, raid_count: usize) -> CheckReport {
        CheckReport {
            severity: self.severity,
            messages: self.messages,
            disk_count,
            raid_count,
        }
    }
}

/// Aggregate `(label, outcome)` pairs in the given order
pub fn aggregate<'a, I>(outcomes: I, disk_count: usize, raid_count: usize) -> CheckReport
where
    I: IntoIterator<Item = (&'a str, &'a ValidationOutcome)>,
{
    let mut aggregator = Aggregator::new();
    for (label, outcome) in outcomes {
        aggregator.record(label, outcome);
    }
    aggregator.into_report(disk_count, raid_count)
}
