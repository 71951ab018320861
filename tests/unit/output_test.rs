//! Tests for the Output module
//!
//! A probe result renders either as the monitoring line or as one JSON object.

use nas_probe::core::models::{CheckReport, DeviceInfo, Severity};
use nas_probe::core::ports::{TransportError, TransportFailure};
use nas_probe::core::services::Evaluation;
use nas_probe::output::{OutputMode, ProbeResult, Stage};

fn evaluated(report: CheckReport) -> ProbeResult {
    ProbeResult::evaluated(
        "SynologyNAS_nas",
        "nas",
        Evaluation {
            report,
            device: DeviceInfo {
                model: "DS920+".to_string(),
                version: "DSM 7.1".to_string(),
            },
        },
    )
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn json_for_healthy_run() {
    let result = evaluated(CheckReport {
        disk_count: 4,
        raid_count: 2,
        ..CheckReport::default()
    });
    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

    assert_eq!(json["service"], "SynologyNAS_nas");
    assert_eq!(json["code"], 0);
    assert_eq!(json["status"], "OK");
    assert_eq!(json["healthy"], true);
    assert_eq!(json["model"], "DS920+");
    assert_eq!(json["version"], "DSM 7.1");
    assert_eq!(json["disks"], 4);
    assert_eq!(json["raids"], 2);
    assert_eq!(json["messages"], serde_json::json!([]));
    assert!(json["checked_at"].as_str().is_some_and(|t| !t.is_empty()));
}

#[test]
fn json_for_transport_failure_has_no_device() {
    let failure = TransportFailure::Connect {
        host: "nas".to_string(),
        source: TransportError::Protocol("request timeout".to_string()),
    };
    let result = ProbeResult::transport_failed("svc", &failure);
    assert_eq!(result.stage, Stage::TransportFailed);

    let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(json["code"], 2);
    assert_eq!(json["status"], "CRIT");
    assert_eq!(json["healthy"], false);
    assert!(json.get("model").is_none());
    assert_eq!(
        json["messages"][0],
        "Error connecting via SNMP to 'nas': request timeout"
    );
}

#[test]
fn json_is_a_single_line() {
    let result = evaluated(CheckReport {
        severity: Severity::Critical,
        messages: vec!["a".to_string(), "b".to_string()],
        disk_count: 1,
        raid_count: 1,
    });
    assert!(!result.to_json().unwrap().contains('\n'));
}

#[test]
fn zero_counts_render_plainly() {
    let line = evaluated(CheckReport::default()).line();
    assert!(line.ends_with("is healthy (0 disks, 0 raids)"));
}
