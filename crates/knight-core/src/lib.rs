//! **knight-core** — chessboard squares and coordinate notation.
//!
//! This crate provides the board-level types shared by the knight path
//! search: the [`Square`] value type, the `a1`-style coordinate codec, and
//! [`BoardMap`], a per-square table.

pub mod board;
pub mod square;

pub use board::BoardMap;
pub use square::{BOARD_SIZE, CoordinateError, Square, SquareIter, decode, encode};
