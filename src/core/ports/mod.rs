//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the evaluation logic and the
//! network: name resolution, session setup and attribute retrieval.
//!
//! Implementations live in the `adapters` module.

mod transport;

pub use transport::{
    AttributeSource, Batch, Connector, Endpoint, HostResolver, TransportError, TransportFailure,
};
