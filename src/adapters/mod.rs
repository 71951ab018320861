//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `snmp` - SNMPv2c sessions (GET and GETNEXT walks)
//! - `dns` - Host resolution, optionally through an alternate name server

pub mod dns;
pub mod snmp;

pub use self::dns::{DnsResolver, PassthroughResolver};
pub use self::snmp::{SnmpConnector, SnmpSource};
