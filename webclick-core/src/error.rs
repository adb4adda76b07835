//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// The length of a value does not match the shape of a space.
    #[error("Expected {expected} elements for the space, got {actual}")]
    SpaceShapeError {
        /// Number of elements of the space.
        expected: usize,
        /// Number of elements given.
        actual: usize,
    },
}
