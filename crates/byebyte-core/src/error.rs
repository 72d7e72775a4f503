//! Error types for the corruption engine.

/// Everything that can stop a corruption run before the first write.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BendError {
    /// Discrete and continuous traversal were both requested.
    #[error("discrete and continuous may not be used together")]
    ConflictingMode,

    /// The lower bound of the range sits above the upper bound.
    #[error("{lower} must be smaller than {upper} (got {start} > {stop})")]
    InvalidRange {
        lower: &'static str,
        upper: &'static str,
        start: usize,
        stop: usize,
    },

    /// An absolute offset falls outside the buffer.
    #[error("{name} is out of bounds: {value} > file length {len}")]
    OutOfBounds {
        name: &'static str,
        value: usize,
        len: usize,
    },

    /// A fractional bound is not within `[0, 1]`.
    #[error("{name} must be a fraction between 0 and 1 (got {value})")]
    InvalidFraction { name: &'static str, value: f64 },

    #[error("continuous chance must be between 0 and 1 (got {0})")]
    InvalidChance(f64),

    #[error("cannot corrupt an empty buffer")]
    EmptyBuffer,
}

pub type Result<T> = std::result::Result<T, BendError>;
