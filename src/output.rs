//! Output formatting for human and JSON modes
//!
//! A run always produces exactly one line on stdout. The status code at the
//! start of the line carries the severity; the process exit status does not.

use serde::Serialize;

use crate::core::models::{CheckReport, DeviceInfo, Severity};
use crate::core::ports::TransportFailure;
use crate::core::services::Evaluation;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Monitoring line (default)
    #[default]
    Human,
    /// JSON object on one line
    Json,
}

/// How far a run got
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Device polled and every check evaluated
    Evaluated(DeviceInfo),
    /// The device could not be polled
    TransportFailed,
    /// The probe was misconfigured and never contacted the device
    Misconfigured,
}

/// Everything needed to render a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Service name at the start of the line
    pub service: String,
    /// Host as given by the operator
    pub host: String,
    /// How far the run got
    pub stage: Stage,
    /// Aggregated checks
    pub report: CheckReport,
    /// When the run finished
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Machine-readable form of a [`ProbeResult`]
#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    service: &'a str,
    host: &'a str,
    code: u8,
    status: &'static str,
    healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    disks: usize,
    raids: usize,
    messages: &'a [String],
    checked_at: String,
}

impl ProbeResult {
    /// Result of a run that reached evaluation
    #[must_use]
    pub fn evaluated(service: &str, host: &str, evaluation: Evaluation) -> Self {
        Self::new(service, host, Stage::Evaluated(evaluation.device), evaluation.report)
    }

    /// Result of a run cut short by the transport
    #[must_use]
    pub fn transport_failed(service: &str, failure: &TransportFailure) -> Self {
        let host = match failure {
            TransportFailure::Connect { host, .. } | TransportFailure::Read { host, .. } => host,
        };
        Self::new(
            service,
            host,
            Stage::TransportFailed,
            CheckReport::short_circuit(Severity::Critical, failure.to_string()),
        )
    }

    /// Result of a run that could not start
    #[must_use]
    pub fn misconfigured(service: &str, host: &str, error: &impl std::fmt::Display) -> Self {
        Self::new(
            service,
            host,
            Stage::Misconfigured,
            CheckReport::short_circuit(Severity::Unknown, format!("Invalid configuration: {error}")),
        )
    }

    fn new(service: &str, host: &str, stage: Stage, report: CheckReport) -> Self {
        Self {
            service: service.to_string(),
            host: host.to_string(),
            stage,
            report,
            checked_at: chrono::Utc::now(),
        }
    }

    /// The monitoring line, without a trailing newline
    #[must_use]
    pub fn line(&self) -> String {
        let severity = self.report.severity;
        let head = format!("{} {} - {}", severity.code(), self.service, severity.label());

        match &self.stage {
            Stage::Evaluated(device) => {
                let health = if self.report.is_healthy() { "healthy" } else { "unhealthy" };
                let errors = if self.report.messages.is_empty() {
                    String::new()
                } else {
                    format!(": {}", self.report.messages.join(", "))
                };
                format!(
                    "{head} - Synology NAS {} ({}) on {} is {health} ({} disks, {} raids){errors}",
                    device.model,
                    device.version,
                    self.host,
                    self.report.disk_count,
                    self.report.raid_count,
                )
            },
            Stage::TransportFailed | Stage::Misconfigured => {
                format!("{head} - {}", self.report.messages.join(", "))
            },
        }
    }

    /// JSON form of the result
    pub fn to_json(&self) -> serde_json::Result<String> {
        let device = match &self.stage {
            Stage::Evaluated(device) => Some(device),
            Stage::TransportFailed | Stage::Misconfigured => None,
        };
        serde_json::to_string(&JsonResult {
            service: &self.service,
            host: &self.host,
            code: self.report.severity.code(),
            status: self.report.severity.label(),
            healthy: self.report.is_healthy(),
            model: device.map(|d| d.model.as_str()),
            version: device.map(|d| d.version.as_str()),
            disks: self.report.disk_count,
            raids: self.report.raid_count,
            messages: &self.report.messages,
            checked_at: self.checked_at.to_rfc3339(),
        })
    }

    /// Print the result to stdout
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => println!("{}", self.line()),
            OutputMode::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }
}
