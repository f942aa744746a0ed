//! Error types for variate construction.

use thiserror::Error;

/// Errors raised when constructing a sampler with invalid parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariateError {
    /// A shape parameter was zero or negative.
    #[error("Shape parameter '{name}' must be positive, got {value}")]
    NonPositiveShape {
        /// Parameter name as the caller knows it.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_shape_display() {
        let err = VariateError::NonPositiveShape {
            name: "alpha",
            value: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "Shape parameter 'alpha' must be positive, got -1.5"
        );
    }
}
