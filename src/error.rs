//! Crate-level error types
//!
//! Restrictions the standards place on a single property value, such as
//! positive-only measures or bounded sequence lengths, are enforced by
//! `try_*` constructors returning [`ModelError`]. Obligations that span
//! several properties are checked separately by the validation module.

use thiserror::Error;

/// Violation of a restriction on a single property value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A measure the standard restricts to positive values
    #[error("{entity}.{field} must be greater than zero, got {value}")]
    NonPositiveMeasure {
        entity: &'static str,
        field: &'static str,
        value: f64,
    },
    /// A count the standard restricts to positive values
    #[error("{entity}.{field} must be greater than zero, got {value}")]
    NonPositiveCount {
        entity: &'static str,
        field: &'static str,
        value: u64,
    },
    /// A sequence whose length the standard bounds on both sides
    #[error("{entity}.{field} expects between {min} and {max} entries, got {actual}")]
    CardinalityOutOfRange {
        entity: &'static str,
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

/// Result alias for property-level restrictions.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_entity_and_field() {
        let error = ModelError::NonPositiveMeasure {
            entity: "Medium",
            field: "density",
            value: -1.5,
        };
        assert_eq!(
            error.to_string(),
            "Medium.density must be greater than zero, got -1.5"
        );

        let error = ModelError::CardinalityOutOfRange {
            entity: "Georectified",
            field: "corner_points",
            min: 2,
            max: 4,
            actual: 1,
        };
        assert!(error.to_string().contains("between 2 and 4"));
    }
}
