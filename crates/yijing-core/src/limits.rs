//! Limits applied when decoding untrusted input.
//!
//! The byte format carries no explicit length, so the only bound on a
//! decoded painting is the size of its input. Callers decoding untrusted
//! bytes can lower these through [`DecodeOptions`](crate::codec::DecodeOptions).

/// Default maximum number of lines in a decoded painting (unbounded).
pub const MAX_LINES: usize = usize::MAX;

