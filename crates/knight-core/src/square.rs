//! The [`Square`] value type and algebraic coordinate notation.
//!
//! A square is a `(rank, file)` pair with both components in `0..8`.
//! Text form is a lowercase file letter followed by a 1-based rank digit, so
//! `a1` is `(rank 0, file 0)` and `h8` is `(rank 7, file 7)`.

use std::fmt;
use std::str::FromStr;

/// Number of ranks (and files) on the board.
pub const BOARD_SIZE: u8 = 8;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// One of the 64 board positions.
///
/// Construction always validates the range, so every `Square` in existence
/// is on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// Create a square, or `None` if either component is outside `0..8`.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < BOARD_SIZE && file < BOARD_SIZE {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// 0-based rank (row), `0` is rank `1`.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// 0-based file (column), `0` is file `a`.
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Rank-major flat index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * BOARD_SIZE as usize + self.file as usize
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::COUNT {
            return None;
        }
        let size = BOARD_SIZE as usize;
        Some(Self {
            rank: (index / size) as u8,
            file: (index % size) as u8,
        })
    }

    /// The square `d_rank` ranks and `d_file` files away, if it is on the
    /// board.
    #[inline]
    pub fn offset(self, d_rank: i32, d_file: i32) -> Option<Self> {
        let rank = i32::from(self.rank) + d_rank;
        let file = i32::from(self.file) + d_file;
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&rank) && (0..size).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Iterator over all 64 squares, rank-major and file-minor
    /// (`a1, b1, ..., h1, a2, ...`).
    #[inline]
    pub fn all() -> SquareIter {
        SquareIter { next: 0 }
    }

    /// Build a square from a file letter and a rank digit.
    ///
    /// The file letter is case-insensitive. The file is checked first, so
    /// `"z9"` reports the file.
    pub fn from_chars(file: char, rank: char) -> Result<Self, CoordinateError> {
        let file = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as u8 - b'a',
            _ => return Err(CoordinateError::File(file)),
        };
        let rank = match rank {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(CoordinateError::Rank(rank)),
        };
        Ok(Self { rank, file })
    }

    /// Lowercase file letter.
    #[inline]
    pub fn file_char(self) -> char {
        char::from(b'a' + self.file)
    }

    /// 1-based rank digit.
    #[inline]
    pub fn rank_char(self) -> char {
        char::from(b'1' + self.rank)
    }
}

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Parse a 2-character coordinate such as `"a1"` or `"H8"`.
pub fn decode(text: &str) -> Result<Square, CoordinateError> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(CoordinateError::Length(text.chars().count()));
    };
    Square::from_chars(file, rank)
}

/// Render a square in lowercase notation.
pub fn encode(square: Square) -> String {
    square.to_string()
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<String> for Square {
    type Error = CoordinateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        decode(&s)
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

/// A coordinate that does not name a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateError {
    /// The text is not exactly two characters long.
    Length(usize),
    /// The first character is not a file letter `a`–`h`.
    File(char),
    /// The second character is not a rank digit `1`–`8`.
    Rank(char),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(n) => write!(f, "invalid coordinate: expected 2 characters, got {n}"),
            Self::File(c) => write!(f, "invalid coordinate: file {c:?} is not in a-h"),
            Self::Rank(c) => write!(f, "invalid coordinate: rank {c:?} is not in 1-8"),
        }
    }
}

impl std::error::Error for CoordinateError {}

// ---------------------------------------------------------------------------
// SquareIter
// ---------------------------------------------------------------------------

/// Rank-major iterator over the board, see [`Square::all`].
#[derive(Clone, Debug)]
pub struct SquareIter {
    next: usize,
}

impl Iterator for SquareIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = Square::from_index(self.next)?;
        self.next += 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = Square::COUNT.saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).unwrap()
    }

    #[test]
    fn decode_corners() {
        assert_eq!(decode("a1").unwrap(), sq(0, 0));
        assert_eq!(decode("h1").unwrap(), sq(0, 7));
        assert_eq!(decode("a8").unwrap(), sq(7, 0));
        assert_eq!(decode("h8").unwrap(), sq(7, 7));
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(decode("C5").unwrap(), decode("c5").unwrap());
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert_eq!(decode("z9"), Err(CoordinateError::File('z')));
        assert_eq!(decode("i1"), Err(CoordinateError::File('i')));
        assert_eq!(decode("a0"), Err(CoordinateError::Rank('0')));
        assert_eq!(decode("a9"), Err(CoordinateError::Rank('9')));
        assert_eq!(decode("1a"), Err(CoordinateError::File('1')));
    }

    #[test]
    fn decode_rejects_bad_length() {
        assert_eq!(decode(""), Err(CoordinateError::Length(0)));
        assert_eq!(decode("a"), Err(CoordinateError::Length(1)));
        assert_eq!(decode("a1b"), Err(CoordinateError::Length(3)));
    }

    #[test]
    fn codec_is_a_bijection() {
        let mut seen = std::collections::HashSet::new();
        for s in Square::all() {
            let text = encode(s);
            assert_eq!(text.len(), 2);
            assert!(seen.insert(text.clone()));
            assert_eq!(decode(&text).unwrap(), s);
        }
        assert_eq!(seen.len(), Square::COUNT);
    }

    #[test]
    fn encode_is_lowercase() {
        assert_eq!(encode(decode("G7").unwrap()), "g7");
    }

    #[test]
    fn new_validates_range() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn index_round_trip() {
        for i in 0..Square::COUNT {
            assert_eq!(Square::from_index(i).unwrap().index(), i);
        }
        assert!(Square::from_index(Square::COUNT).is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        let a1 = sq(0, 0);
        assert_eq!(a1.offset(2, 1), Some(sq(2, 1)));
        assert_eq!(a1.offset(-1, 2), None);
        assert_eq!(sq(7, 7).offset(1, 0), None);
        assert_eq!(sq(7, 7).offset(-7, -7), Some(a1));
    }

    #[test]
    fn all_is_rank_major() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], sq(0, 0));
        assert_eq!(squares[1], sq(0, 1));
        assert_eq!(squares[8], sq(1, 0));
        assert_eq!(squares[63], sq(7, 7));
    }

    #[test]
    fn all_size_hint() {
        let mut it = Square::all();
        assert_eq!(it.len(), 64);
        it.next();
        assert_eq!(it.len(), 63);
    }

    #[test]
    fn from_str_matches_decode() {
        let s: Square = "e4".parse().unwrap();
        assert_eq!(s, sq(3, 4));
        assert!("e".parse::<Square>().is_err());
    }
}
