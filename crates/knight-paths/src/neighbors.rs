use knight_core::Square;

use crate::traits::Pather;

/// The eight knight jumps as `(d_rank, d_file)`.
///
/// The order fixes which of several equally short paths a search returns.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// The knight move graph on an 8x8 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Knight;

impl Knight {
    /// Knight moves from `sq` that stay on the board, in [`KNIGHT_OFFSETS`]
    /// order.
    pub fn moves(sq: Square) -> impl Iterator<Item = Square> {
        KNIGHT_OFFSETS
            .iter()
            .filter_map(move |&(dr, df)| sq.offset(dr, df))
    }
}

impl Pather for Knight {
    fn neighbors(&self, sq: Square, buf: &mut Vec<Square>) {
        buf.extend(Self::moves(sq));
    }
}

/// Whether a knight on `a` can jump to `b` in one move.
#[inline]
pub fn is_knight_move(a: Square, b: Square) -> bool {
    let dr = (i32::from(a.rank()) - i32::from(b.rank())).abs();
    let df = (i32::from(a.file()) - i32::from(b.file())).abs();
    (dr == 1 && df == 2) || (dr == 2 && df == 1)
}
