//! Synology health policy
//!
//! The fixed set of identifiers polled from the appliance, the codes each one
//! may report while healthy, and the order in which they are evaluated.

use crate::core::models::{AttributeStore, CheckReport, DeviceInfo};

use super::aggregator::Aggregator;
use super::validator::{check_multi_instance, check_scalar};

/// `systemStatus`: Normal(1), Failed(2)
pub const SYSTEM_STATUS: &str = ".1.3.6.1.4.1.6574.1.1.0";
/// `powerStatus`: Normal(1), Failed(2)
pub const POWER_STATUS: &str = ".1.3.6.1.4.1.6574.1.3.0";
/// `modelName`
pub const MODEL_NAME: &str = ".1.3.6.1.4.1.6574.1.5.1.0";
/// `version`
pub const VERSION: &str = ".1.3.6.1.4.1.6574.1.5.3.0";
/// `diskStatus` column, one row per disk
pub const DISK_STATUSES: &str = ".1.3.6.1.4.1.6574.2.1.1.5";
/// `raidStatus` column, one row per volume
pub const RAID_STATUSES: &str = ".1.3.6.1.4.1.6574.3.1.1.3";

/// Scalars fetched in the first batch
pub const SYSTEM_IDS: [&str; 4] = [SYSTEM_STATUS, POWER_STATUS, MODEL_NAME, VERSION];

/// Normal
pub const SYSTEM_STATUS_OK: &[i64] = &[1];
/// Normal
pub const POWER_STATUS_OK: &[i64] = &[1];
/// Normal, Initialized, NotInitialized
///
/// SystemPartitionFailed(4) and Crashed(5) fail the check.
pub const DISK_STATUS_OK: &[i64] = &[1, 2, 3];
/// Every state except Degrade(11), Crashed(12) and RaidUnknownStatus(21)
pub const RAID_STATUS_OK: &[i64] = &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 13, 14, 15, 16, 17, 18, 19, 20];

/// Evaluate every check in the fixed order: system, power, disks, raids
#[must_use]
pub fn evaluate(store: &AttributeStore) -> CheckReport {
    let mut aggregator = Aggregator::new();

    aggregator.record(
        "System Status",
        &check_scalar(store, "System Status", SYSTEM_STATUS, SYSTEM_STATUS_OK),
    );
    aggregator.record(
        "Power Status",
        &check_scalar(store, "Power Status", POWER_STATUS, POWER_STATUS_OK),
    );

    let disks = check_multi_instance(store, "Disk Status", DISK_STATUSES, DISK_STATUS_OK);
    aggregator.record("Disk Status", &disks.outcome);

    let raids = check_multi_instance(store, "Raid Status", RAID_STATUSES, RAID_STATUS_OK);
    aggregator.record("Raid Status", &raids.outcome);

    aggregator.into_report(disks.count, raids.count)
}

/// Model and firmware strings, empty when not reported
#[must_use]
pub fn device_info(store: &AttributeStore) -> DeviceInfo {
    DeviceInfo {
        model: store.get_string(MODEL_NAME),
        version: store.get_string(VERSION),
    }
}
