//! Validation outcomes
//!
//! A check either succeeds or fails with a [`ValidationError`] whose display
//! text is the message shown to the operator.

use thiserror::Error;

/// What a failing check was looking at: a named attribute, optionally one
/// instance of a repeating family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Human-readable name, e.g. `Disk Status`
    pub label: String,
    /// Zero-based instance number for multi-instance checks
    pub instance: Option<usize>,
}

impl Subject {
    /// A non-repeating attribute
    pub fn scalar(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instance: None,
        }
    }

    /// One instance of a repeating attribute family
    pub fn instance(label: impl Into<String>, instance: usize) -> Self {
        Self {
            label: label.into(),
            instance: Some(instance),
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.instance {
            Some(i) => write!(f, "{} {i}", self.label),
            None => f.write_str(&self.label),
        }
    }
}

/// Attribute-level check failure
///
/// These are recoverable: every failure is collected into the report and the
/// remaining checks still run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The attribute was not retrieved at all
    #[error("No value for '{subject}' received")]
    MissingAttribute {
        /// Failing attribute
        subject: Subject,
    },

    /// The attribute is not an integer
    #[error("Invalid type for '{subject}': received {actual}, expected Integer")]
    TypeMismatch {
        /// Failing attribute
        subject: Subject,
        /// Wire type that was received
        actual: String,
    },

    /// The integer is outside the allowed set
    #[error(
        "Invalid value for '{subject}': received {value}, expected one of {}",
        format_allowed(.allowed)
    )]
    ValueNotAllowed {
        /// Failing attribute
        subject: Subject,
        /// Value that was received
        value: i64,
        /// Values the policy accepts
        allowed: Vec<i64>,
    },
}

impl ValidationError {
    /// The attribute this failure refers to
    #[must_use]
    pub const fn subject(&self) -> &Subject {
        match self {
            Self::MissingAttribute { subject }
            | Self::TypeMismatch { subject, .. }
            | Self::ValueNotAllowed { subject, .. } => subject,
        }
    }
}

/// Result of a single check
pub type ValidationOutcome = Result<(), ValidationError>;

/// Result of a multi-instance check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceTally {
    /// Instances validated successfully (before the failure, if any)
    pub count: usize,
    /// Overall outcome of the family
    pub outcome: ValidationOutcome,
}

/// Render an allowed set as `[1 2 3]`
fn format_allowed(allowed: &[i64]) -> String {
    let items: Vec<String> = allowed.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(" "))
}
