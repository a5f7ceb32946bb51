//! Error types

use std::fmt;

/// Error returned by a `CodepointSource` when the underlying bytes can't be decoded
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum DecodeError {
    /// Invalid or unmapped byte sequence starting at `offset`.
    Malformed { offset: usize },
    /// The buffer ended part way through the sequence starting at `offset`.
    Truncated { offset: usize },
    /// UTF-16 surrogate at `offset` without its pair.
    UnpairedSurrogate { offset: usize },
}

impl DecodeError {
    /// Byte offset of the offending sequence.
    pub fn offset(&self) -> usize {
        match *self {
            DecodeError::Malformed { offset }
            | DecodeError::Truncated { offset }
            | DecodeError::UnpairedSurrogate { offset } => offset,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed { offset } => {
                write!(f, "malformed byte sequence at offset {}", offset)
            }
            DecodeError::Truncated { offset } => {
                write!(f, "truncated byte sequence at offset {}", offset)
            }
            DecodeError::UnpairedSurrogate { offset } => {
                write!(f, "unpaired surrogate at offset {}", offset)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Errors that originate when parsing configuration values
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    BadValue,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadValue => write!(f, "invalid value"),
        }
    }
}

impl std::error::Error for ParseError {}
