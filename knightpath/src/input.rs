//! Character-at-a-time coordinate reader.

use std::io::{Bytes, Read};

use knight_core::Square;
use log::trace;

use crate::error::Error;

/// Reads meaningful characters from a byte stream, skipping line endings
/// and other whitespace left behind by the terminal.
pub struct CharReader<R> {
    bytes: Bytes<R>,
}

impl<R: Read> CharReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes(),
        }
    }

    /// The next non-whitespace character.
    pub fn next_char(&mut self) -> Result<char, Error> {
        for b in self.bytes.by_ref() {
            let b = b?;
            if b.is_ascii_whitespace() {
                trace!("skipping {b:#04x}");
                continue;
            }
            if !b.is_ascii() {
                return Err(Error::NonAscii(b));
            }
            return Ok(char::from(b));
        }
        Err(Error::UnexpectedEof)
    }

    /// Read a file letter and a rank digit and decode them.
    pub fn read_square(&mut self) -> Result<Square, Error> {
        let file = self.next_char()?;
        let rank = self.next_char()?;
        Ok(Square::from_chars(file, rank)?)
    }
}
