//! Binary encoding/decoding for paintings.
//!
//! A painting is written as its line bits (yang = 1) followed by one sentinel
//! 1-bit, packed LSB-first into the fewest bytes that hold them.

pub mod painting;
pub mod primitives;

pub use painting::{
    decode_painting, decode_painting_with_options, encode_painting, encoded_len, DecodeOptions,
};
pub use primitives::{bytes_for_bits, BitReader, BitWriter};
