//! Error types for parameter validation.
//!
//! The similarity functions themselves are total and never fail. Errors only
//! arise when a caller-supplied Jaro-Winkler configuration is validated.

use thiserror::Error;

/// Errors produced when validating Jaro-Winkler parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JaroError {
    /// Prefix weight is NaN or infinite
    #[error("prefix_weight must be a finite number, got {0}")]
    NonFiniteWeight(f64),

    /// Prefix weight would allow scores above 1.0
    #[error("prefix_weight must be in range [0.0, 0.25], got {0} (values > 0.25 can produce scores > 1.0)")]
    WeightOutOfRange(f64),

    /// A zero-length prefix cap disables the Winkler boost entirely
    #[error("max_prefix_length must be at least 1")]
    ZeroPrefixLength,

    /// The largest possible prefix bonus would push scores above 1.0
    #[error("prefix_weight * max_prefix_length must not exceed 1.0, got {weight} * {length}")]
    PrefixBonusTooLarge { weight: f64, length: usize },
}

pub type Result<T> = std::result::Result<T, JaroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            JaroError::NonFiniteWeight(f64::INFINITY).to_string(),
            "prefix_weight must be a finite number, got inf"
        );
        assert!(JaroError::WeightOutOfRange(0.5)
            .to_string()
            .starts_with("prefix_weight must be in range [0.0, 0.25], got 0.5"));
        assert_eq!(
            JaroError::ZeroPrefixLength.to_string(),
            "max_prefix_length must be at least 1"
        );
        assert_eq!(
            JaroError::PrefixBonusTooLarge {
                weight: 0.25,
                length: 10
            }
            .to_string(),
            "prefix_weight * max_prefix_length must not exceed 1.0, got 0.25 * 10"
        );
    }
}
