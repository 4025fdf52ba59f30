//! Error types for nutrirec operations.
//!
//! Provides rich error context for library consumers.

use thiserror::Error;

/// Main error type for the recommendation pipeline.
///
/// # Examples
///
/// ```
/// use nutrirec::error::NutrirecError;
///
/// let err = NutrirecError::DimensionMismatch {
///     expected: "9 features".to_string(),
///     actual: "3 features".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutrirecError {
    /// Matrix/vector dimensions don't match for the operation.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A transformer or index was fitted on zero rows.
    #[error("Cannot fit with zero samples")]
    EmptyData,

    /// `transform`/`kneighbors` was called before `fit`.
    #[error("{0} not fitted. Call fit() first.")]
    NotFitted(&'static str),

    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A feature value was NaN or infinite.
    #[error("Non-finite value in {context}")]
    NonFinite {
        /// Where the value was found
        context: String,
    },

    /// The ingredient matcher could not be compiled.
    #[error("Invalid ingredient pattern: {0}")]
    InvalidPattern(String),

    /// A raw corpus row could not be converted to a recipe.
    #[error("Invalid recipe record: {0}")]
    InvalidRecord(String),
}

impl From<regex::Error> for NutrirecError {
    fn from(err: regex::Error) -> Self {
        NutrirecError::InvalidPattern(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, NutrirecError>;
