//! Attribute validators
//!
//! Pure checks of retrieved attributes against allowed integer codes.

use crate::core::models::{
    AttributeStore, InstanceTally, Subject, ValidationError, ValidationOutcome, Value,
};

/// Validate a single, non-repeating attribute
///
/// Fails when the attribute is absent, is not an integer, or holds a value
/// outside `allowed`.
pub fn check_scalar(
    store: &AttributeStore,
    label: &str,
    id: &str,
    allowed: &[i64],
) -> ValidationOutcome {
    let Some(attribute) = store.get(id) else {
        return Err(ValidationError::MissingAttribute {
            subject: Subject::scalar(label),
        });
    };

    check_integer(Subject::scalar(label), &attribute.value, allowed)
}

/// Validate every instance of a repeating attribute family
///
/// Instances the device reports as not present are skipped and not counted.
/// The first invalid instance stops the walk; the returned count then holds
/// only the instances validated before it. An instance is numbered by how many
/// instances were validated before it.
pub fn check_multi_instance(
    store: &AttributeStore,
    label: &str,
    prefix: &str,
    allowed: &[i64],
) -> InstanceTally {
    let mut count = 0;

    for attribute in store.iter_prefix(prefix) {
        if attribute.value.is_not_present() {
            log::debug!("{label}: skipping absent instance {}", attribute.id);
            continue;
        }

        if let Err(err) = check_integer(Subject::instance(label, count), &attribute.value, allowed)
        {
            return InstanceTally {
                count,
                outcome: Err(err),
            };
        }

        count += 1;
    }

    InstanceTally {
        count,
        outcome: Ok(()),
    }
}

fn check_integer(subject: Subject, value: &Value, allowed: &[i64]) -> ValidationOutcome {
    match value {
        Value::Integer(v) if allowed.contains(v) => Ok(()),
        Value::Integer(v) => Err(ValidationError::ValueNotAllowed {
            subject,
            value: *v,
            allowed: allowed.to_vec(),
        }),
        other => Err(ValidationError::TypeMismatch {
            subject,
            actual: other.type_name().to_string(),
        }),
    }
}
