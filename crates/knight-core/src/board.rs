//! [`BoardMap`] — one value per board square.

use std::ops::{Index, IndexMut};

use crate::square::Square;

/// A fixed table holding one `T` for every square, indexed by [`Square`].
///
/// Storage is rank-major, so [`iter`](Self::iter) visits squares in the
/// same order as [`Square::all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardMap<T> {
    cells: [T; Square::COUNT],
}

impl<T: Copy> BoardMap<T> {
    /// A table with every square set to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            cells: [value; Square::COUNT],
        }
    }
}

impl<T> BoardMap<T> {
    /// `(square, value)` pairs in rank-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &T)> {
        Square::all().zip(self.cells.iter())
    }

    /// Squares whose value satisfies `pred`, in rank-major order.
    pub fn squares_where(&self, pred: impl Fn(&T) -> bool) -> impl Iterator<Item = Square> {
        self.iter().filter(move |(_, v)| pred(*v)).map(|(sq, _)| sq)
    }
}

impl<T: Copy + Default> Default for BoardMap<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<Square> for BoardMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, sq: Square) -> &T {
        &self.cells[sq.index()]
    }
}

impl<T> IndexMut<Square> for BoardMap<T> {
    #[inline]
    fn index_mut(&mut self, sq: Square) -> &mut T {
        &mut self.cells[sq.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_by_square() {
        let mut m = BoardMap::filled(0u8);
        let e4: Square = "e4".parse().unwrap();
        m[e4] = 5;
        assert_eq!(m[e4], 5);
        assert_eq!(m.iter().filter(|(_, v)| **v == 5).count(), 1);
    }

    #[test]
    fn iter_follows_scan_order() {
        let m = BoardMap::<u8>::default();
        let squares: Vec<_> = m.iter().map(|(sq, _)| sq).collect();
        assert_eq!(squares, Square::all().collect::<Vec<_>>());
    }

    #[test]
    fn squares_where_filters() {
        let mut m = BoardMap::filled(false);
        let a = "a1".parse().unwrap();
        let b = "h8".parse().unwrap();
        m[b] = true;
        m[a] = true;
        let hits: Vec<Square> = m.squares_where(|v| *v).collect();
        assert_eq!(hits, vec![a, b]);
    }

    #[test]
    fn filled_sets_every_square() {
        let m = BoardMap::filled(9u32);
        assert!(m.iter().all(|(_, v)| *v == 9));
    }
}
