use thiserror::Error;

/// Errors surfaced by tree construction and queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The input cannot be indexed: it is empty, or the chosen sentinel
    /// byte already occurs in it.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of why the input was rejected
        reason: String,
    },

    /// A query asked for a substring length outside `[1, n)`, where `n`
    /// is the text length including the sentinel.
    #[error("substring length {len} out of range [1, {max})")]
    OutOfRange {
        /// The requested length
        len: usize,
        /// Exclusive upper bound (the indexed length)
        max: usize,
    },

    /// A top-k query asked for a rank outside the candidate list.
    #[error("rank {k} outside the candidate list of size {count}")]
    NotFound {
        /// The requested rank (1-based)
        k: usize,
        /// Number of candidates for the requested length
        count: usize,
    },
}

/// A specialized Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
