//! Transport port
//!
//! Defines how the probe reaches the appliance. The core never talks to the
//! network directly; it drives these traits.

use std::time::Duration;

use thiserror::Error;

use crate::core::models::Attribute;

/// Where and how to poll the appliance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host as given by the operator (name or address)
    pub host: String,
    /// Agent port
    pub port: u16,
    /// SNMPv2c community string
    pub community: String,
    /// Per-request timeout
    pub timeout: Duration,
}

/// Low-level failure of a transport operation
#[derive(Debug, Error)]
pub enum TransportError {
    /// Name lookup through the alternate server failed
    #[error("Can't resolve '{host}' on {server}: {reason}")]
    Resolve {
        /// Name being looked up
        host: String,
        /// Name server that was asked
        server: String,
        /// Why the lookup failed
        reason: String,
    },

    /// Socket level failure
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The agent answered with something unusable
    #[error("{0}")]
    Protocol(String),

    /// An identifier could not be parsed into numeric components
    #[error("invalid object identifier '{0}'")]
    InvalidIdentifier(String),
}

/// Retrieval batch, used to tell the operator which read failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Batch {
    /// The four scalar system identifiers
    System,
    /// The per-disk status family
    Disk,
    /// The per-volume RAID status family
    Raid,
}

impl std::fmt::Display for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::System => write!(f, "System"),
            Self::Disk => write!(f, "Disk"),
            Self::Raid => write!(f, "Raid"),
        }
    }
}

/// Run-level failure: the device could not be polled, so nothing was evaluated
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// Resolution or session setup failed
    #[error("Error connecting via SNMP to '{host}': {source}")]
    Connect {
        /// Host as given by the operator
        host: String,
        /// Underlying cause
        source: TransportError,
    },

    /// One retrieval batch failed
    #[error("Error reading {batch}-OIDs via SNMP from '{host}': {source}")]
    Read {
        /// Batch that failed
        batch: Batch,
        /// Host as given by the operator
        host: String,
        /// Underlying cause
        source: TransportError,
    },
}

/// An open session that can read attributes
///
/// Dropping the source releases the session.
pub trait AttributeSource {
    /// Read the given identifiers in one batch
    fn get(&mut self, ids: &[&str]) -> Result<Vec<Attribute>, TransportError>;

    /// Read every attribute in the subtree under `prefix`, in agent order
    fn walk(&mut self, prefix: &str) -> Result<Vec<Attribute>, TransportError>;
}

/// Opens sessions to an endpoint
pub trait Connector {
    /// Session type produced by this connector
    type Source: AttributeSource;

    /// Open a session to `address` using the endpoint's port and credentials
    fn connect(&self, address: &str, endpoint: &Endpoint) -> Result<Self::Source, TransportError>;
}

/// Turns the operator's host into the address a session is opened to
pub trait HostResolver {
    /// Resolve `host` to an address string
    fn resolve(&self, host: &str) -> Result<String, TransportError>;
}
