use thiserror::Error;

/// Errors that can occur when operating on a [`Sequence`](crate::Sequence).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("value not found: sequence is empty")]
    Empty,

    #[error("value not found in the sequence")]
    NotFound,

    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: isize, len: usize },
}

impl SequenceError {
    /// Whether this is one of the "value not found" kinds raised by `remove`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SequenceError::Empty | SequenceError::NotFound)
    }
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
