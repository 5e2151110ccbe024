//! 64-bit square sets: one bit per square, bit `i` is [`Square`] index `i`.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

use crate::lut::masks;
use crate::square::Square;

/// A set of squares.
///
/// A bitboard may hold one piece kind's squares, a structural mask such as
/// a row, or any union of those.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No squares set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// All 64 squares set.
    pub const FULL: Bitboard = Bitboard(!0);

    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// Return the raw mask.
    #[inline]
    pub const fn inner(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        self.0 != 0
    }

    /// Count the squares in the set.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    /// Return `true` if every square of `self` is also in `other`.
    #[inline]
    pub const fn is_subset_of(self, other: Bitboard) -> bool {
        self.0 | other.0 == other.0
    }

    /// Return a copy with `sq` added.
    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1u64 << sq.index()))
    }

    /// Return a copy with `sq` removed.
    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1u64 << sq.index()))
    }

    /// Lowest square in the set, or `None` if empty.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }

    /// Iterate the squares of the set in ascending index order.
    ///
    /// Each call starts afresh from the current mask.
    #[inline]
    pub const fn squares(self) -> Squares {
        Squares(self.0)
    }

    // --- Structural masks ---

    /// The single-square mask for `sq`.
    #[inline]
    pub const fn for_square(sq: Square) -> Bitboard {
        masks::SQUARES[sq.index()]
    }

    /// All squares of row `row` (0..8).
    #[inline]
    #[track_caller]
    pub const fn for_row(row: u8) -> Bitboard {
        assert!(row < 8, "row must be in 0..8");
        masks::ROWS[row as usize]
    }

    /// All squares of column `col` (0..8).
    #[inline]
    #[track_caller]
    pub const fn for_col(col: u8) -> Bitboard {
        assert!(col < 8, "col must be in 0..8");
        masks::COLS[col as usize]
    }

    /// All squares of diagonal `index` (0..15), see [`Square::diag_index`].
    #[inline]
    #[track_caller]
    pub const fn for_diag(index: usize) -> Bitboard {
        assert!(index < 15, "diagonal index must be in 0..15");
        masks::DIAGS[index]
    }

    /// All squares of anti-diagonal `index` (0..15), see [`Square::anti_diag_index`].
    #[inline]
    #[track_caller]
    pub const fn for_anti_diag(index: usize) -> Bitboard {
        assert!(index < 15, "anti-diagonal index must be in 0..15");
        masks::ANTI_DIAGS[index]
    }

    /// The row through `sq`.
    #[inline]
    pub const fn row_of(sq: Square) -> Bitboard {
        masks::ROWS[sq.row() as usize]
    }

    /// The column through `sq`.
    #[inline]
    pub const fn col_of(sq: Square) -> Bitboard {
        masks::COLS[sq.col() as usize]
    }

    /// The diagonal through `sq`.
    #[inline]
    pub const fn diag_of(sq: Square) -> Bitboard {
        masks::DIAGS[sq.diag_index()]
    }

    /// The anti-diagonal through `sq`.
    #[inline]
    pub const fn anti_diag_of(sq: Square) -> Bitboard {
        masks::ANTI_DIAGS[sq.anti_diag_index()]
    }
}

impl From<Square> for Bitboard {
    #[inline]
    fn from(sq: Square) -> Bitboard {
        Bitboard::for_square(sq)
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl Not for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

// Shifting by 64 or more empties the set.

impl Shl<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shl(self, rhs: u32) -> Bitboard {
        Bitboard(self.0.checked_shl(rhs).unwrap_or(0))
    }
}

impl Shr<u32> for Bitboard {
    type Output = Bitboard;
    #[inline]
    fn shr(self, rhs: u32) -> Bitboard {
        Bitboard(self.0.checked_shr(rhs).unwrap_or(0))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline]
    fn into_iter(self) -> Squares {
        self.squares()
    }
}

/// Iterator over the squares of a [`Bitboard`], lowest index first.
#[derive(Debug, Clone)]
pub struct Squares(u64);

impl Iterator for Squares {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let sq = Square::from_index_unchecked(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

impl FusedIterator for Squares {}

/// Hex mask followed by an 8x8 grid of 0/1, row 7 on top.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:#018x}", self.0)?;
        for row in (0..8u8).rev() {
            for col in 0..8u8 {
                let bit = self.contains(Square::from_row_col(row, col)) as u8;
                if col < 7 {
                    write!(f, "{bit} ")?;
                } else {
                    write!(f, "{bit}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::square::Square;

    #[test]
    fn empty_and_full() {
        assert!(Bitboard::EMPTY.is_empty());
        assert!(Bitboard::FULL.is_nonempty());
        assert_eq!(!Bitboard::EMPTY, Bitboard::FULL);
        assert_eq!(Bitboard::FULL.count(), 64);
        assert_eq!(Bitboard::default(), Bitboard::EMPTY);
    }

    #[test]
    fn with_without_contains() {
        let bb = Bitboard::EMPTY.with(Square::E4);
        assert!(bb.contains(Square::E4));
        assert!(!bb.contains(Square::D4));
        assert!(bb.without(Square::E4).is_empty());
        assert_eq!(Bitboard::from(Square::E4), bb);
    }

    #[test]
    fn set_algebra() {
        let a = Bitboard::for_row(0);
        let b = Bitboard::for_col(0);
        assert_eq!(a & b, Bitboard::for_square(Square::A1));
        assert_eq!((a | b).count(), 15);
        assert_eq!((a ^ b).count(), 14);

        let mut c = a;
        c |= b;
        c &= Bitboard::for_col(0);
        assert_eq!(c, b);
        c ^= Bitboard::for_square(Square::A1);
        assert_eq!(c.count(), 7);
    }

    #[test]
    fn subset() {
        assert!(Bitboard::EMPTY.is_subset_of(Bitboard::EMPTY));
        assert!(Bitboard::for_square(Square::E4).is_subset_of(Bitboard::for_row(3)));
        assert!(!Bitboard::for_row(3).is_subset_of(Bitboard::for_square(Square::E4)));
    }

    #[test]
    fn shifts_move_rows() {
        assert_eq!(Bitboard::for_row(0) << 8, Bitboard::for_row(1));
        assert_eq!(Bitboard::for_row(7) >> 56, Bitboard::for_row(0));
        assert_eq!(Bitboard::for_row(7) << 8, Bitboard::EMPTY);
    }

    #[test]
    fn shifts_of_64_or_more_are_empty() {
        assert_eq!(Bitboard::FULL << 64, Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL >> 64, Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL << 200, Bitboard::EMPTY);
        assert_eq!(Bitboard::FULL >> 63, Bitboard::for_square(Square::A1));
    }

    #[test]
    fn iteration_is_ascending_and_restartable() {
        let bb = Bitboard::EMPTY
            .with(Square::H8)
            .with(Square::A1)
            .with(Square::E4);
        let first: Vec<_> = bb.squares().collect();
        assert_eq!(first, vec![Square::A1, Square::E4, Square::H8]);

        let second: Vec<_> = bb.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(bb.count(), 3);
        assert_eq!(bb.squares().len(), 3);
    }

    #[test]
    fn lsb() {
        assert_eq!(Bitboard::EMPTY.lsb(), None);
        assert_eq!(Bitboard::for_row(2).lsb(), Some(Square::A3));
    }

    #[test]
    fn structural_lookups_by_square() {
        assert_eq!(Bitboard::row_of(Square::E4), Bitboard::for_row(3));
        assert_eq!(Bitboard::col_of(Square::E4), Bitboard::for_col(4));
        assert!(Bitboard::diag_of(Square::E4).contains(Square::H7));
        assert!(Bitboard::anti_diag_of(Square::E4).contains(Square::H1));
    }

    #[test]
    #[should_panic(expected = "row must be in 0..8")]
    fn row_out_of_range() {
        let _ = Bitboard::for_row(8);
    }

    #[test]
    fn debug_dump() {
        let dump = format!("{:?}", Bitboard::for_square(Square::A8));
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines[0], "0x0100000000000000");
        assert_eq!(lines[1], "1 0 0 0 0 0 0 0");
        assert_eq!(lines[8], "0 0 0 0 0 0 0 0");
        assert_eq!(lines.len(), 9);
    }
}
