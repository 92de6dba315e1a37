//! Error types for text parsing.

use alloc::string::String;
use core::fmt;

/// Errors produced when reading a vector, matrix, or quaternion from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A component token is not a float. `index` counts components within
    /// the value being read, starting at 0.
    InvalidFloat { index: usize, token: String },
    /// The input ran out before every component was read.
    MissingComponent { expected: usize, found: usize },
    /// Tokens remain after a complete value.
    TrailingInput { token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFloat { index, token } => {
                write!(f, "component {index} is not a number: {token:?}")
            }
            Self::MissingComponent { expected, found } => {
                write!(f, "expected {expected} components, found {found}")
            }
            Self::TrailingInput { token } => write!(f, "unexpected trailing input: {token:?}"),
        }
    }
}

impl core::error::Error for ParseError {}
