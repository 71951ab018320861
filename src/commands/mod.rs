//! Command implementations

mod probe;

pub use probe::probe;
