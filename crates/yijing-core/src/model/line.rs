//! The two-valued line type.

use std::fmt;
use std::str::FromStr;

use crate::error::{PaintingError, ParseError};

/// A single line of a painting: yin (broken) or yang (solid).
///
/// Ordered with `Yin < Yang`. The raw tag is `0` for yin and `1` for yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Line {
    Yin = 0,
    Yang = 1,
}

impl Line {
    /// Both lines in ascending order.
    pub const ALL: [Line; 2] = [Line::Yin, Line::Yang];

    /// Returns true for yang.
    #[inline]
    pub fn is_yang(self) -> bool {
        matches!(self, Line::Yang)
    }

    /// Returns true for yin.
    #[inline]
    pub fn is_yin(self) -> bool {
        matches!(self, Line::Yin)
    }

    /// Returns the canonical token, `"Yang"` or `"Yin"`.
    pub fn as_token(self) -> &'static str {
        match self {
            Line::Yin => "Yin",
            Line::Yang => "Yang",
        }
    }

    /// Parses a canonical token.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_token(token: &str) -> Result<Line, ParseError> {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("yang") {
            Ok(Line::Yang)
        } else if trimmed.eq_ignore_ascii_case("yin") {
            Ok(Line::Yin)
        } else {
            Err(ParseError::InvalidLineToken {
                token: token.to_string(),
            })
        }
    }

    /// Returns the digit used by the digit-string form (`'1'` or `'0'`).
    #[inline]
    pub(crate) fn digit(self) -> char {
        match self {
            Line::Yin => '0',
            Line::Yang => '1',
        }
    }

    /// Maps a digit-string character back to a line.
    #[inline]
    pub(crate) fn from_digit(c: char) -> Option<Line> {
        match c {
            '0' => Some(Line::Yin),
            '1' => Some(Line::Yang),
            _ => None,
        }
    }
}

impl From<bool> for Line {
    #[inline]
    fn from(is_yang: bool) -> Self {
        if is_yang { Line::Yang } else { Line::Yin }
    }
}

impl From<Line> for bool {
    #[inline]
    fn from(line: Line) -> Self {
        line.is_yang()
    }
}

impl From<Line> for u8 {
    #[inline]
    fn from(line: Line) -> Self {
        line as u8
    }
}

impl TryFrom<u8> for Line {
    type Error = PaintingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Line::Yin),
            1 => Ok(Line::Yang),
            _ => Err(PaintingError::InvalidLine { value }),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Line {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Line::from_token(s)
    }
}
