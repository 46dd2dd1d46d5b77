use std::fmt;
use std::io;

use knight_core::CoordinateError;
use knight_paths::PathError;

/// Anything that can stop a query.
#[derive(Debug)]
pub enum Error {
    /// Reading stdin or writing stdout failed.
    Io(io::Error),
    /// Input ended before both coordinates were read.
    UnexpectedEof,
    /// A byte outside ASCII where a coordinate character was expected.
    NonAscii(u8),
    /// A coordinate does not name a board square.
    Coordinate(CoordinateError),
    /// The search found no path.
    Path(PathError),
    /// A logger was already installed.
    Logger(log::SetLoggerError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o: {e}"),
            Self::UnexpectedEof => f.write_str("input ended before two coordinates were read"),
            Self::NonAscii(b) => write!(f, "input byte {b:#04x} is not an ASCII character"),
            Self::Coordinate(e) => fmt::Display::fmt(e, f),
            Self::Path(e) => fmt::Display::fmt(e, f),
            Self::Logger(e) => write!(f, "logger: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::UnexpectedEof | Self::NonAscii(_) => None,
            Self::Coordinate(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::Logger(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CoordinateError> for Error {
    fn from(e: CoordinateError) -> Self {
        Self::Coordinate(e)
    }
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(e: log::SetLoggerError) -> Self {
        Self::Logger(e)
    }
}
