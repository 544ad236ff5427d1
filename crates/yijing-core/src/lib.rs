//! Yin/yang lines and the paintings made of them.
//!
//! A painting is an ordered, immutable sequence of lines where index 0 is the
//! lowest line. This crate provides value equality, a total order, a stable
//! hash and two loss-free encodings for paintings.
//!
//! # Quick Start
//!
//! ```rust
//! use yijing_core::{Line, Painting};
//!
//! // Dui, from the bottom up: yang, yang, yin.
//! let dui = Painting::new([Line::Yang, Line::Yang, Line::Yin]);
//!
//! // Digit string, lowest line first.
//! assert_eq!(dui.to_string(), "110");
//! assert_eq!("110".parse::<Painting>().unwrap(), dui);
//!
//! // Bytes: line bits plus a sentinel bit, LSB-first.
//! let bytes = dui.to_bytes();
//! assert_eq!(bytes, vec![0b1011]);
//! assert_eq!(Painting::from_bytes(&bytes).unwrap(), dui);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core data types (Line, Painting)
//! - [`codec`]: Byte encoding/decoding
//! - [`error`]: Error types
//! - [`limits`]: Limits for decoding
//!
//! # Ordering
//!
//! Paintings with fewer lines sort first. Paintings of equal length compare
//! line by line from the highest line down, with `Yin < Yang`.
//!
//! # Wire Format
//!
//! - Digit string: `'0'` for yin, `'1'` for yang, leftmost character is the
//!   lowest line.
//! - Bytes: bit `i` is line `i` (yang = 1), followed by a single 1-bit
//!   sentinel, packed LSB-first into `ceil((count + 1) / 8)` bytes.

pub mod codec;
pub mod error;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use codec::{decode_painting, decode_painting_with_options, encode_painting, DecodeOptions};
pub use error::{DecodeError, ErrorCode, PaintingError, ParseError};
pub use model::{Line, Painting};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
