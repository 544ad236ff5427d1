//! Painting encoding/decoding.
//!
//! Wire format: bit `i` is 1 when line `i` is yang, then one sentinel 1-bit,
//! packed LSB-first into `ceil((count + 1) / 8)` bytes. Bits after the
//! sentinel are zero.

use crate::codec::primitives::{bytes_for_bits, BitReader, BitWriter};
use crate::error::DecodeError;
use crate::limits::MAX_LINES;
use crate::model::{Line, Painting};

// =============================================================================
// OPTIONS
// =============================================================================

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of lines a decoded painting may have.
    pub max_lines: usize,

    /// Require the minimal encoding.
    ///
    /// When enabled, the sentinel must sit in the last input byte; trailing
    /// all-zero bytes are rejected instead of treated as padding.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_lines: MAX_LINES,
            strict: false,
        }
    }
}

impl DecodeOptions {
    /// Creates default (lenient, unbounded) decoding options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates strict decoding options.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Returns these options with a line limit.
    pub fn with_max_lines(self, max_lines: usize) -> Self {
        Self { max_lines, ..self }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a painting from bytes.
///
/// Any number of trailing zero bytes is accepted as padding.
pub fn decode_painting(input: &[u8]) -> Result<Painting, DecodeError> {
    decode_painting_with_options(input, DecodeOptions::default())
}

/// Decodes a painting from bytes with the given options.
///
/// The highest set bit is the sentinel and every bit below it is a line.
/// This is what a run-length scan produces (each 1-bit emits the pending
/// yins and one yang, and the last emitted yang is dropped), but the
/// line count is known before any line is stored.
pub fn decode_painting_with_options(
    input: &[u8],
    options: DecodeOptions,
) -> Result<Painting, DecodeError> {
    let reader = BitReader::new(input);

    let Some(count) = reader.last_set_bit() else {
        log::debug!("rejecting {} byte(s): no sentinel bit", input.len());
        return Err(DecodeError::MissingSentinel { len: input.len() });
    };

    if count > options.max_lines {
        log::debug!("rejecting painting of {count} lines (max {})", options.max_lines);
        return Err(DecodeError::LengthExceedsLimit {
            field: "lines",
            len: count,
            max: options.max_lines,
        });
    }

    if options.strict {
        let expected = encoded_len(count);
        if input.len() != expected {
            log::debug!("rejecting non-minimal encoding: {} byte(s), expected {expected}", input.len());
            return Err(DecodeError::NonMinimalEncoding {
                len: input.len(),
                expected,
            });
        }
    }

    let lines: Vec<Line> = reader.take(count).map(Line::from).collect();
    log::trace!("decoded {} byte(s) into {count} lines", input.len());
    Ok(Painting::from(lines))
}

// =============================================================================
// ENCODING
// =============================================================================

/// Returns the encoded size in bytes of a painting with `count` lines.
#[inline]
pub fn encoded_len(count: usize) -> usize {
    bytes_for_bits(count + 1)
}

/// Encodes a painting to bytes.
pub fn encode_painting(painting: &Painting) -> Vec<u8> {
    let mut writer = BitWriter::with_bit_capacity(painting.len() + 1);
    for line in painting {
        writer.write_bit(line.is_yang());
    }
    // Sentinel
    writer.write_bit(true);
    log::trace!(
        "encoded {} lines into {} byte(s)",
        painting.len(),
        writer.as_bytes().len()
    );
    writer.into_bytes()
}
