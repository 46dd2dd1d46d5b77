use knight_core::Square;

/// Move-graph interface: enumerates the squares reachable in one move.
pub trait Pather {
    /// Append the on-board neighbours of `sq` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>);
}
