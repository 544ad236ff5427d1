//! Paintings: immutable, ordered sequences of lines.
//!
//! Index 0 is the lowest line. Iteration, the digit string and the byte
//! encoding all run from the lowest line upwards; only ordering looks at the
//! highest line first.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;

use crate::codec::painting::{decode_painting, encode_painting};
use crate::error::{DecodeError, PaintingError, ParseError};
use crate::model::Line;

/// A painting made up of yin and yang lines.
///
/// The lower a line, the smaller its index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Painting {
    lines: Box<[Line]>,
}

impl Painting {
    /// Creates a painting from lines, lowest first.
    pub fn new<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = Line>,
    {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// Creates the painting with no lines.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a painting from raw line tags (`0` = yin, `1` = yang).
    ///
    /// Fails on the first tag outside `{0, 1}`.
    pub fn from_raw(values: &[u8]) -> Result<Self, PaintingError> {
        let lines = values
            .iter()
            .map(|&value| Line::try_from(value))
            .collect::<Result<Box<[Line]>, _>>()?;
        Ok(Self { lines })
    }

    /// Returns the line at `index`, where index 0 is the lowest line.
    pub fn get(&self, index: usize) -> Result<Line, PaintingError> {
        self.lines
            .get(index)
            .copied()
            .ok_or(PaintingError::IndexOutOfRange {
                index,
                count: self.lines.len(),
            })
    }

    /// Returns the number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the painting has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the lines, lowest first.
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates from the lowest line to the highest.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Line>> {
        self.lines.iter().copied()
    }

    /// Returns the lowest line (index 0), if any.
    pub fn lowest(&self) -> Option<Line> {
        self.lines.first().copied()
    }

    /// Returns the highest line (index `len - 1`), if any.
    pub fn highest(&self) -> Option<Line> {
        self.lines.last().copied()
    }

    /// Returns the canonical hash value.
    ///
    /// Starting from 1, each line from lowest to highest is shifted in as one
    /// bit (yang = 1). The accumulator is 64 bits wide: once a painting has
    /// more than 63 lines the oldest bits, starting with the leading 1, are
    /// shifted out.
    pub fn hash_code(&self) -> u64 {
        self.lines
            .iter()
            .fold(1u64, |acc, line| (acc << 1) | u64::from(u8::from(*line)))
    }

    /// Parses a digit string, returning `None` instead of an error.
    pub fn try_parse(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Parses a digit string (`'0'` = yin, `'1'` = yang, lowest line first).
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let mut lines = Vec::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            match Line::from_digit(c) {
                Some(line) => lines.push(line),
                None => {
                    log::debug!("rejecting painting digit string: {c:?} at position {position}");
                    return Err(ParseError::InvalidDigit {
                        input: s.to_string(),
                        found: c,
                        position,
                    });
                }
            }
        }
        Ok(Self::from(lines))
    }

    /// Encodes the painting with the sentinel-terminated byte format.
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_painting(self)
    }

    /// Decodes a painting from the sentinel-terminated byte format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        decode_painting(bytes)
    }
}

impl Ord for Painting {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lines
            .len()
            .cmp(&other.lines.len())
            .then_with(|| self.lines.iter().rev().cmp(other.lines.iter().rev()))
    }
}

impl PartialOrd for Painting {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Painting {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl Index<usize> for Painting {
    type Output = Line;

    fn index(&self, index: usize) -> &Line {
        &self.lines[index]
    }
}

impl fmt::Display for Painting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for line in self.lines.iter() {
            f.write_char(line.digit())?;
        }
        Ok(())
    }
}

impl FromStr for Painting {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Painting::parse(s)
    }
}

impl FromIterator<Line> for Painting {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<Line>> for Painting {
    fn from(lines: Vec<Line>) -> Self {
        Self {
            lines: lines.into_boxed_slice(),
        }
    }
}

impl From<&[Line]> for Painting {
    fn from(lines: &[Line]) -> Self {
        Self {
            lines: lines.into(),
        }
    }
}

impl<const N: usize> From<[Line; N]> for Painting {
    fn from(lines: [Line; N]) -> Self {
        Self::new(lines)
    }
}

impl TryFrom<&[u8]> for Painting {
    type Error = PaintingError;

    fn try_from(values: &[u8]) -> Result<Self, Self::Error> {
        Painting::from_raw(values)
    }
}

impl<'a> IntoIterator for &'a Painting {
    type Item = Line;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Line>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Painting {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_vec().into_iter()
    }
}
