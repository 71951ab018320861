//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! Nothing here opens a socket; transport is reached only through the
//! port traits.
//!
//! - [`validator`] - Scalar and multi-instance attribute checks
//! - [`aggregator`] - Fold check outcomes into one report
//! - [`policy`] - Synology identifiers, allowed codes and check order
//! - [`probe`] - Collect, then evaluate, with the transport short-circuit

pub mod aggregator;
pub mod policy;
pub mod probe;
pub mod validator;

pub use aggregator::{Aggregator, aggregate};
pub use probe::{Evaluation, collect, run};
pub use validator::{check_multi_instance, check_scalar};
