//! Error types for the GA engine.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;

/// Errors surfaced by fallible GA operations.
///
/// Precondition violations (a chromosome of the wrong width, parents of
/// different widths, an empty population) are programmer errors and panic
/// instead of producing one of these variants.
#[derive(Debug, Error)]
pub enum GaError {
    /// A value handed to the codec lies outside its half-open domain.
    #[error("value {value} is outside the codec domain [{low}, {high})")]
    Domain { value: f64, low: f64, high: f64 },

    /// Rejection sampling could not produce a valid entity.
    #[error("no valid {entity} found after {attempts} attempts")]
    ConstraintUnsatisfiable { entity: String, attempts: usize },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing a report failed.
    #[error("report I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message() {
        let err = GaError::Domain {
            value: 6.0,
            low: -5.12,
            high: 5.12,
        };
        assert_eq!(
            err.to_string(),
            "value 6 is outside the codec domain [-5.12, 5.12)"
        );
    }

    #[test]
    fn test_unsatisfiable_message() {
        let err = GaError::ConstraintUnsatisfiable {
            entity: "Living room".into(),
            attempts: 10,
        };
        assert_eq!(err.to_string(), "no valid Living room found after 10 attempts");
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: GaError = io.into();
        assert!(matches!(err, GaError::Io(_)));
    }
}
