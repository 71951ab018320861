//! Retrieved device attributes
//!
//! An attribute is one value read from the appliance, keyed by its object
//! identifier in dotted form (`.1.3.6.1.4.1.6574.1.1.0`).

/// Typed payload of an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed integer
    Integer(i64),
    /// Raw byte string, usually text
    OctetString(Vec<u8>),
    /// The agent has no such object
    NoSuchObject,
    /// The object exists but this instance does not (e.g. an empty disk bay)
    NoSuchInstance,
    /// Any other wire type, kept only by name
    Other(String),
}

impl Value {
    /// Name of the wire type, as shown in type mismatch messages
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Integer(_) => "Integer",
            Self::OctetString(_) => "OctetString",
            Self::NoSuchObject => "NoSuchObject",
            Self::NoSuchInstance => "NoSuchInstance",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Whether the device reported that this slot does not exist
    #[must_use]
    pub const fn is_not_present(&self) -> bool {
        matches!(self, Self::NoSuchObject | Self::NoSuchInstance)
    }
}

/// A single retrieved device property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Dotted object identifier
    pub id: String,
    /// Typed value
    pub value: Value,
}

impl Attribute {
    /// Create an attribute
    pub fn new(id: impl Into<String>, value: Value) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// Integer attribute
    pub fn integer(id: impl Into<String>, value: i64) -> Self {
        Self::new(id, Value::Integer(value))
    }

    /// Text attribute
    pub fn text(id: impl Into<String>, value: &str) -> Self {
        Self::new(id, Value::OctetString(value.as_bytes().to_vec()))
    }

    /// Whether this attribute lies in the subtree rooted at `prefix`
    ///
    /// Matching is per identifier component, so `.1.2.5` covers `.1.2.5.3`
    /// but not `.1.2.50`.
    #[must_use]
    pub fn is_under(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_end_matches('.');
        self.id
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
    }
}
