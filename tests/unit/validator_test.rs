//! Tests for scalar and multi-instance validation

use nas_probe::core::models::{Attribute, AttributeStore, ValidationError, Value};
use nas_probe::core::services::policy::{DISK_STATUSES, DISK_STATUS_OK, RAID_STATUSES, RAID_STATUS_OK};
use nas_probe::core::services::{check_multi_instance, check_scalar};
use test_case::test_case;

use crate::common::{disk, raid};

const STATUS: &str = ".1.3.6.1.4.1.6574.1.1.0";

fn scalar(value: Value) -> AttributeStore {
    [Attribute::new(STATUS, value)].into_iter().collect()
}

// =============================================================================
// Scalar checks
// =============================================================================

#[test_case(Value::Integer(1), None ; "normal passes")]
#[test_case(
    Value::Integer(2),
    Some("Invalid value for 'System Status': received 2, expected one of [1]")
    ; "failed status is rejected"
)]
#[test_case(
    Value::OctetString(b"1".to_vec()),
    Some("Invalid type for 'System Status': received OctetString, expected Integer")
    ; "text is a type mismatch"
)]
#[test_case(
    Value::NoSuchInstance,
    Some("Invalid type for 'System Status': received NoSuchInstance, expected Integer")
    ; "sentinel is a type mismatch for scalars"
)]
fn scalar_outcomes(value: Value, expected: Option<&str>) {
    let outcome = check_scalar(&scalar(value), "System Status", STATUS, &[1]);
    assert_eq!(outcome.err().map(|e| e.to_string()).as_deref(), expected);
}

#[test]
fn scalar_missing_attribute() {
    let err = check_scalar(&AttributeStore::new(), "Power Status", STATUS, &[1]).unwrap_err();
    assert!(matches!(err, ValidationError::MissingAttribute { .. }));
    assert_eq!(err.to_string(), "No value for 'Power Status' received");
}

// =============================================================================
// Multi-instance checks
// =============================================================================

#[test_case(&[1, 2, 3], 3 ; "all disk states that are fine")]
#[test_case(&[1], 1 ; "single disk")]
#[test_case(&[], 0 ; "no disks")]
fn disks_within_policy(statuses: &[i64], expected: usize) {
    let store: AttributeStore =
        statuses.iter().enumerate().map(|(i, &s)| disk(i, s)).collect();
    let tally = check_multi_instance(&store, "Disk Status", DISK_STATUSES, DISK_STATUS_OK);
    assert_eq!(tally.count, expected);
    assert!(tally.outcome.is_ok());
}

#[test_case(4 ; "system partition failed")]
#[test_case(5 ; "crashed")]
fn failing_disk_states(status: i64) {
    let store: AttributeStore = [disk(0, status)].into_iter().collect();
    let tally = check_multi_instance(&store, "Disk Status", DISK_STATUSES, DISK_STATUS_OK);
    assert_eq!(tally.count, 0);
    assert!(matches!(
        tally.outcome,
        Err(ValidationError::ValueNotAllowed { value, .. }) if value == status
    ));
}

#[test_case(11 ; "degrade")]
#[test_case(12 ; "crashed")]
#[test_case(21 ; "unknown status")]
fn failing_raid_states(status: i64) {
    let store: AttributeStore = [raid(0, status)].into_iter().collect();
    let tally = check_multi_instance(&store, "Raid Status", RAID_STATUSES, RAID_STATUS_OK);
    assert!(tally.outcome.is_err());
}

#[test]
fn busy_raid_states_are_fine() {
    let store: AttributeStore =
        [2, 7, 13, 20].iter().enumerate().map(|(i, &s)| raid(i, s)).collect();
    let tally = check_multi_instance(&store, "Raid Status", RAID_STATUSES, RAID_STATUS_OK);
    assert_eq!(tally.count, 4);
    assert!(tally.outcome.is_ok());
}

#[test]
fn empty_bay_is_not_counted() {
    let store: AttributeStore = [
        disk(0, 1),
        Attribute::new(format!("{DISK_STATUSES}.1"), Value::NoSuchObject),
        disk(2, 1),
    ]
    .into_iter()
    .collect();
    let tally = check_multi_instance(&store, "Disk Status", DISK_STATUSES, DISK_STATUS_OK);
    assert_eq!(tally.count, 2);
    assert!(tally.outcome.is_ok());
}

#[test]
fn failure_reports_partial_count_and_instance_number() {
    let store: AttributeStore = [disk(0, 1), disk(1, 1), disk(2, 5), disk(3, 1)].into_iter().collect();
    let tally = check_multi_instance(&store, "Disk Status", DISK_STATUSES, DISK_STATUS_OK);
    assert_eq!(tally.count, 2);
    assert_eq!(
        tally.outcome.unwrap_err().to_string(),
        "Invalid value for 'Disk Status 2': received 5, expected one of [1 2 3]"
    );
}

#[test]
fn wrong_type_instance_fails() {
    let store: AttributeStore = [
        disk(0, 1),
        Attribute::new(format!("{DISK_STATUSES}.1"), Value::Other("Counter32".to_string())),
    ]
    .into_iter()
    .collect();
    let tally = check_multi_instance(&store, "Disk Status", DISK_STATUSES, DISK_STATUS_OK);
    assert_eq!(tally.count, 1);
    assert_eq!(
        tally.outcome.unwrap_err().to_string(),
        "Invalid type for 'Disk Status 1': received Counter32, expected Integer"
    );
}
