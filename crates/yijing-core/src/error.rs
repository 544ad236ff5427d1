//! Error types for line/painting construction, parsing and byte decoding.

use thiserror::Error;

/// Broad classification of every error this crate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A raw line tag outside `{0, 1}`.
    InvalidLine,
    /// Indexed access beyond `[0, count)`.
    IndexOutOfRange,
    /// Text that is not a valid digit string or line token.
    Format,
    /// Bytes that are not a valid painting encoding.
    Decode,
}

impl ErrorCode {
    /// Returns a short stable name for the code (e.g., "format").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidLine => "invalid-line",
            ErrorCode::IndexOutOfRange => "index-out-of-range",
            ErrorCode::Format => "format",
            ErrorCode::Decode => "decode",
        }
    }
}

/// Error while constructing or accessing a painting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaintingError {
    #[error("invalid line value: {value} (expected 0 for yin or 1 for yang)")]
    InvalidLine { value: u8 },

    #[error("line index {index} out of range (count: {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

impl PaintingError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaintingError::InvalidLine { .. } => ErrorCode::InvalidLine,
            PaintingError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
        }
    }
}

/// Error while parsing a line token or a painting digit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("cannot parse {input:?} as painting: invalid character {found:?} at position {position}")]
    InvalidDigit {
        input: String,
        found: char,
        position: usize,
    },

    #[error("cannot parse {token:?} as line (expected \"Yin\" or \"Yang\")")]
    InvalidLineToken { token: String },
}

impl ParseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Format
    }
}

/// Error while decoding a painting from bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("no sentinel bit found in {len} input byte(s)")]
    MissingSentinel { len: usize },

    #[error("{field} count {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("encoding is {len} byte(s) but the minimal encoding is {expected}")]
    NonMinimalEncoding { len: usize, expected: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Decode
    }
}
