//! Bit-level primitives for the painting byte format.
//!
//! Bits are packed LSB-first: bit `i` lives in byte `i / 8` at position
//! `i % 8`, counted from the least-significant bit.

// =============================================================================
// DECODING
// =============================================================================

/// Reader over the bits of a byte slice, in LSB-first order.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current bit position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the total number of bits in the data.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// Returns the number of bits not yet read.
    pub fn remaining_bits(&self) -> usize {
        self.bit_len() - self.pos
    }

    /// Returns true if every bit has been read.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.bit_len()
    }

    /// Returns the bit at an absolute index, or `None` past the end.
    #[inline]
    pub fn bit_at(&self, index: usize) -> Option<bool> {
        let byte = self.data.get(index / 8)?;
        Some((*byte >> (index % 8)) & 1 == 1)
    }

    /// Reads the next bit.
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let bit = self.bit_at(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    /// Returns the index of the highest set bit in the whole slice.
    pub fn last_set_bit(&self) -> Option<usize> {
        let (byte_index, byte) = self
            .data
            .iter()
            .enumerate()
            .rev()
            .find(|(_, byte)| **byte != 0)?;
        Some(byte_index * 8 + (7 - byte.leading_zeros() as usize))
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.read_bit()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_bits();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitReader<'_> {}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer that packs bits LSB-first into bytes.
///
/// Unused bits of the last byte stay zero.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    buf: Vec<u8>,
    bits: usize,
}

impl BitWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new writer with room for `bits` bits.
    pub fn with_bit_capacity(bits: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes_for_bits(bits)),
            bits: 0,
        }
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bits written.
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// Returns true if no bits have been written.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Writes a single bit.
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        let offset = self.bits % 8;
        if offset == 0 {
            self.buf.push(0);
        }
        if bit {
            self.buf[self.bits / 8] |= 1 << offset;
        }
        self.bits += 1;
    }
}

/// Returns the number of bytes needed to hold `bits` bits.
#[inline]
pub fn bytes_for_bits(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_packs_lsb_first() {
        let mut writer = BitWriter::new();
        for bit in [true, true, false, true] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.bit_len(), 4);
        assert_eq!(writer.as_bytes(), &[0b0000_1011]);
    }

    #[test]
    fn test_writer_spills_into_next_byte() {
        let mut writer = BitWriter::with_bit_capacity(9);
        for _ in 0..8 {
            writer.write_bit(false);
        }
        writer.write_bit(true);
        assert_eq!(writer.into_bytes(), vec![0x00, 0x01]);
    }

    #[test]
    fn test_empty_writer() {
        let writer = BitWriter::new();
        assert!(writer.is_empty());
        assert!(writer.into_bytes().is_empty());
    }

    #[test]
    fn test_reader_order() {
        let data = [0b1000_0001u8, 0b0000_0010];
        let bits: Vec<bool> = BitReader::new(&data).collect();
        assert_eq!(bits.len(), 16);
        assert!(bits[0]);
        assert!(bits[7]);
        assert!(bits[9]);
        assert_eq!(bits.iter().filter(|b| **b).count(), 3);
    }

    #[test]
    fn test_reader_bit_at() {
        let data = [0b0000_0100u8];
        let reader = BitReader::new(&data);
        assert_eq!(reader.bit_at(2), Some(true));
        assert_eq!(reader.bit_at(3), Some(false));
        assert_eq!(reader.bit_at(8), None);
    }

    #[test]
    fn test_last_set_bit() {
        assert_eq!(BitReader::new(&[]).last_set_bit(), None);
        assert_eq!(BitReader::new(&[0, 0, 0]).last_set_bit(), None);
        assert_eq!(BitReader::new(&[0b1]).last_set_bit(), Some(0));
        assert_eq!(BitReader::new(&[0b1011]).last_set_bit(), Some(3));
        assert_eq!(BitReader::new(&[0xFF, 0b10, 0]).last_set_bit(), Some(9));
        assert_eq!(BitReader::new(&[0, 0x80]).last_set_bit(), Some(15));
    }

    #[test]
    fn test_bytes_for_bits() {
        assert_eq!(bytes_for_bits(0), 0);
        assert_eq!(bytes_for_bits(1), 1);
        assert_eq!(bytes_for_bits(8), 1);
        assert_eq!(bytes_for_bits(9), 2);
    }
}
