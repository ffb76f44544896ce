//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only hard failures live here. Recoverable situations (a defaulted salad
/// weight, a delete that matched nothing) are reported as [`crate::Notice`]s.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A catalog lookup asked for a variant that does not exist.
    #[error("unknown {category} variant: {key:?}")]
    UnknownVariant { category: String, key: String },

    /// The order was already paid for and can no longer change.
    #[error("the order is already paid for")]
    OrderClosed,

    /// The order has handed out every line handle it can represent.
    #[error("the order has run out of line handles")]
    LineIdsExhausted,

    /// A weight was negative or not a finite number.
    #[error("invalid weight: {0}")]
    InvalidWeight(f64),
}

impl DomainError {
    pub fn unknown_variant(category: impl Into<String>, key: impl Into<String>) -> Self {
        Self::UnknownVariant {
            category: category.into(),
            key: key.into(),
        }
    }

    pub fn invalid_weight(weight: f64) -> Self {
        Self::InvalidWeight(weight)
    }
}
