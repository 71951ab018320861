//! Check report
//!
//! The product of one probe run, consumed by the output layer.

use serde::Serialize;

use super::Severity;

/// Aggregated result of all checks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CheckReport {
    /// Worst severity of any check
    pub severity: Severity,
    /// Failure messages in check order
    pub messages: Vec<String>,
    /// Disks validated
    pub disk_count: usize,
    /// RAID volumes validated
    pub raid_count: usize,
}

impl CheckReport {
    /// Fixed report for a run that never reached evaluation
    pub fn short_circuit(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            messages: vec![message.into()],
            disk_count: 0,
            raid_count: 0,
        }
    }

    /// Whether every check passed
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.severity == Severity::Ok
    }
}

/// Descriptive strings read from the device
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceInfo {
    /// Model name, e.g. `DS918+`
    pub model: String,
    /// Firmware version, e.g. `DSM 6.2`
    pub version: String,
}
