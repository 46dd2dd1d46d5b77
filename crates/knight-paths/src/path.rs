//! Path reconstruction from a predecessor map.

use std::fmt;

use knight_core::{BoardMap, Square};

/// A shortest path, start and end inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KnightPath {
    squares: Vec<Square>,
}

impl KnightPath {
    /// The squares visited, in order. Never empty.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of moves, one less than the number of squares.
    pub fn moves(&self) -> usize {
        self.squares.len() - 1
    }

    /// First square of the path.
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    /// Last square of the path.
    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }
}

/// Concatenated coordinates with no delimiter, e.g. `a1b3c5`.
impl fmt::Display for KnightPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in &self.squares {
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

/// Walk `predecessors` back from `end` to `start` and return the path in
/// start-to-end order.
///
/// Fails with [`PathError::UnreachableState`] if the chain breaks (a square
/// other than `start` with no predecessor) or loops.
pub fn reconstruct(
    predecessors: &BoardMap<Option<Square>>,
    start: Square,
    end: Square,
) -> Result<KnightPath, PathError> {
    let mut squares = vec![end];
    let mut cur = end;
    while cur != start {
        cur = predecessors[cur].ok_or(PathError::UnreachableState(cur))?;
        if squares.len() == Square::COUNT {
            return Err(PathError::UnreachableState(cur));
        }
        squares.push(cur);
    }
    squares.reverse();
    Ok(KnightPath { squares })
}

/// Errors from a shortest-path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The frontier emptied before `end` was reached.
    NoPathFound { start: Square, end: Square },
    /// Reconstruction hit a square with no recorded predecessor.
    UnreachableState(Square),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound { start, end } => write!(f, "no path from {start} to {end}"),
            Self::UnreachableState(sq) => {
                write!(f, "broken predecessor chain at {sq}")
            }
        }
    }
}

impl std::error::Error for PathError {}
