//! Tests for the probe pipeline
//!
//! Drive `probe::run` end to end with fake transport ports and check the
//! rendered monitoring line.

use nas_probe::core::models::{Severity, Value};
use nas_probe::core::ports::{Batch, TransportFailure};
use nas_probe::core::services::policy::{DISK_STATUSES, SYSTEM_STATUS, VERSION};
use nas_probe::core::services::{collect, run};
use nas_probe::output::ProbeResult;

use crate::common::{DeviceBuilder, FakeConnector, FakeResolver, disk, endpoint, raid};

const SERVICE: &str = "SynologyNAS_1.2.3.4";

fn probe_line(device: &DeviceBuilder) -> String {
    let connector = FakeConnector::serving(device);
    let evaluation = run(&endpoint("1.2.3.4"), &FakeResolver::to("1.2.3.4"), &connector).unwrap();
    ProbeResult::evaluated(SERVICE, "1.2.3.4", evaluation).line()
}

fn failure_line(failure: &TransportFailure) -> String {
    ProbeResult::transport_failed(SERVICE, failure).line()
}

// =============================================================================
// Evaluated runs
// =============================================================================

#[test]
fn healthy_device() {
    let connector = FakeConnector::serving(&DeviceBuilder::healthy());
    let evaluation = run(&endpoint("1.2.3.4"), &FakeResolver::to("1.2.3.4"), &connector).unwrap();

    assert_eq!(evaluation.report.severity, Severity::Ok);
    assert!(evaluation.report.messages.is_empty());
    assert_eq!(evaluation.report.disk_count, 2);
    assert_eq!(evaluation.report.raid_count, 1);
    assert_eq!(
        ProbeResult::evaluated(SERVICE, "1.2.3.4", evaluation).line(),
        "0 SynologyNAS_1.2.3.4 - OK - Synology NAS DS918+ (DSM 6.2) on 1.2.3.4 is healthy (2 disks, 1 raids)"
    );
}

#[test]
fn failed_system_status() {
    let device = DeviceBuilder::healthy().set(SYSTEM_STATUS, Value::Integer(2));
    assert_eq!(
        probe_line(&device),
        "2 SynologyNAS_1.2.3.4 - CRIT - Synology NAS DS918+ (DSM 6.2) on 1.2.3.4 is unhealthy \
         (2 disks, 1 raids): Invalid value for 'System Status': received 2, expected one of [1]"
    );
}

#[test]
fn missing_version_renders_empty_parentheses() {
    let device = DeviceBuilder::healthy().without(VERSION);
    assert_eq!(
        probe_line(&device),
        "0 SynologyNAS_1.2.3.4 - OK - Synology NAS DS918+ () on 1.2.3.4 is healthy (2 disks, 1 raids)"
    );
}

#[test]
fn failures_are_listed_in_check_order() {
    let device = DeviceBuilder::healthy()
        .with(raid(0, 11))
        .with(disk(1, 5))
        .without(".1.3.6.1.4.1.6574.1.3.0");
    let line = probe_line(&device);
    assert!(line.starts_with("2 SynologyNAS_1.2.3.4 - CRIT - "));
    assert!(line.ends_with(
        "(1 disks, 0 raids): No value for 'Power Status' received, \
         Invalid value for 'Disk Status 1': received 5, expected one of [1 2 3], \
         Invalid value for 'Raid Status 0': received 11, expected one of \
         [1 2 3 4 5 6 7 8 9 10 13 14 15 16 17 18 19 20]"
    ));
}

#[test]
fn empty_bays_are_skipped() {
    let device = DeviceBuilder::healthy()
        .with(disk(2, 1))
        .set(&format!("{DISK_STATUSES}.1"), Value::NoSuchInstance);
    assert!(probe_line(&device).ends_with("is healthy (2 disks, 1 raids)"));
}

#[test]
fn session_opened_to_resolved_address() {
    let connector = FakeConnector::serving(&DeviceBuilder::healthy());
    run(&endpoint("nas.local"), &FakeResolver::to("10.0.0.7"), &connector).unwrap();
    assert_eq!(connector.connected_to.borrow().as_deref(), Some("10.0.0.7"));
    assert!(connector.closed.get());
}

// =============================================================================
// Transport short-circuit
// =============================================================================

#[test]
fn refused_connection_is_critical() {
    let failure =
        run(&endpoint("1.2.3.4"), &FakeResolver::to("1.2.3.4"), &FakeConnector::refusing())
            .unwrap_err();
    let result = ProbeResult::transport_failed(SERVICE, &failure);

    assert_eq!(result.report.severity, Severity::Critical);
    assert_eq!(result.report.messages.len(), 1);
    assert_eq!((result.report.disk_count, result.report.raid_count), (0, 0));
    assert_eq!(
        result.line(),
        "2 SynologyNAS_1.2.3.4 - CRIT - Error connecting via SNMP to '1.2.3.4': connection refused"
    );
}

#[test]
fn resolution_failure_is_a_connect_failure() {
    let connector = FakeConnector::serving(&DeviceBuilder::healthy());
    let failure = run(&endpoint("nas.local"), &FakeResolver::failing(), &connector).unwrap_err();

    assert!(matches!(failure, TransportFailure::Connect { .. }));
    assert_eq!(
        ProbeResult::transport_failed("svc", &failure).line(),
        "2 svc - CRIT - Error connecting via SNMP to 'nas.local': \
         Can't resolve 'nas.local' on 10.0.0.53:53: No results"
    );
    assert!(connector.connected_to.borrow().is_none());
}

#[test]
fn each_batch_names_itself() {
    for (batch, name) in [(Batch::System, "System"), (Batch::Disk, "Disk"), (Batch::Raid, "Raid")] {
        let connector = FakeConnector::serving(&DeviceBuilder::healthy()).failing_on(batch);
        let failure =
            run(&endpoint("1.2.3.4"), &FakeResolver::to("1.2.3.4"), &connector).unwrap_err();

        assert!(matches!(failure, TransportFailure::Read { batch: b, .. } if b == batch));
        assert_eq!(
            failure_line(&failure),
            format!(
                "2 SynologyNAS_1.2.3.4 - CRIT - Error reading {name}-OIDs via SNMP from '1.2.3.4': \
                 request timeout"
            )
        );
        assert!(connector.closed.get(), "session must be closed after a {name} failure");
    }
}

#[test]
fn collect_keeps_families_in_agent_order() {
    let connector = FakeConnector::serving(&DeviceBuilder::healthy());
    let mut session = nas_probe::core::ports::Connector::connect(
        &connector,
        "1.2.3.4",
        &endpoint("1.2.3.4"),
    )
    .unwrap();
    let store = collect(&mut session, "1.2.3.4").unwrap();

    assert_eq!(store.len(), 7);
    let disks: Vec<&str> = store.iter_prefix(DISK_STATUSES).map(|a| a.id.as_str()).collect();
    assert_eq!(disks, vec![".1.3.6.1.4.1.6574.2.1.1.5.0", ".1.3.6.1.4.1.6574.2.1.1.5.1"]);
}
