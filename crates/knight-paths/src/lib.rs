//! Shortest knight paths on an 8x8 chessboard.
//!
//! The search is a layer-synchronised breadth-first search over the move
//! graph given by a [`Pather`]:
//!
//! - [`search`] builds the predecessor tree from a start square until the
//!   end square is expanded ([`SearchTree`])
//! - [`reconstruct`] walks that tree back into a [`KnightPath`]
//! - [`shortest_path`] does both
//! - [`distance_map`] runs the search to exhaustion and returns the move
//!   distance of every square
//!
//! [`Knight`] is the knight move graph.

mod bfs;
mod neighbors;
mod path;
mod traits;

pub use bfs::{SearchTree, distance_map, search, shortest_path};
pub use neighbors::{KNIGHT_OFFSETS, Knight, is_knight_move};
pub use path::{KnightPath, PathError, reconstruct};
pub use traits::Pather;
