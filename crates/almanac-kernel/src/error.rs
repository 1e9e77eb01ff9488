//! Error types for almanac kernel operations.

use crate::category::Category;

/// Errors arising from malformed values or broken stage chains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlmanacError {
    /// An item was handed to a stage that does not accept its category.
    #[error("category mismatch: stage maps from {expected}, got {actual}")]
    CategoryMismatch {
        expected: Category,
        actual: Category,
    },

    /// A range (or rule span) with a negative start, a non-positive length,
    /// or an end that does not fit in `i64`.
    #[error("malformed range: start {start}, length {length}")]
    MalformedRange { start: i64, length: i64 },

    /// Two stages share the same source category.
    #[error("duplicate stage for source category {category}")]
    DuplicateStage { category: Category },

    /// The chain walk came back to a category it already visited.
    #[error("stage chain revisits category {category}")]
    CycleDetected { category: Category },
}

pub type Result<T> = std::result::Result<T, AlmanacError>;
