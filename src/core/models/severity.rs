//! Probe severity levels
//!
//! The numeric value of each level is the status code at the start of the
//! monitoring line. Ordering is "worst-of": a higher level is worse.

use serde::Serialize;

/// Aggregate health level of a probe run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every check passed
    #[default]
    Ok = 0,
    /// Degraded but not failing (not produced by the current policy)
    Warn = 1,
    /// At least one check failed, or the device could not be polled
    Critical = 2,
    /// The probe itself could not run
    Unknown = 3,
}

impl Severity {
    /// Status code printed at the start of the line
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Short label used by the monitoring pipeline
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warn => "WARN",
            Self::Critical => "CRIT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The worse of two levels
    #[must_use]
    pub fn worst(self, other: Self) -> Self {
        self.max(other)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
