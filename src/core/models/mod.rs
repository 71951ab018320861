//! Domain models for the probe
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Attribute`] - One retrieved device property
//! - [`AttributeStore`] - All attributes of a run, in retrieval order
//! - [`Severity`] - Aggregate health level
//! - [`ValidationError`] - Why a check failed
//! - [`CheckReport`] - Aggregated result of a run

mod attribute;
mod outcome;
mod report;
mod severity;
mod store;

pub use attribute::{Attribute, Value};
pub use outcome::{InstanceTally, Subject, ValidationError, ValidationOutcome};
pub use report::{CheckReport, DeviceInfo};
pub use severity::Severity;
pub use store::AttributeStore;
