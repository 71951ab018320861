//! Core domain logic for the probe
//!
//! This module contains pure evaluation logic with no I/O dependencies.
//! All network interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Attribute, AttributeStore, Severity, CheckReport)
//! - `services/` - Validation, aggregation and the probe pipeline
//! - `ports/` - Trait definitions for the transport collaborator

pub mod models;
pub mod ports;
pub mod services;
