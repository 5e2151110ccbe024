//! Row/column board coordinates.

use std::fmt;

use crate::square::Square;

/// A (row, col) coordinate on the board, both in `0..8`.
///
/// Naming follows the game's UI layer: the *file* is the 1-based row
/// number and the *rank* is the column letter, so `Position::from_algebraic(4, 'e')`
/// is the square usually written `e4`. A piece that has left the board
/// has no position; such places use `Option<Position>`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[inline]
    #[track_caller]
    pub const fn new(row: u8, col: u8) -> Position {
        assert!(row < 8 && col < 8, "row and col must be in 0..8");
        Position { row, col }
    }

    #[inline]
    pub const fn from_square(sq: Square) -> Position {
        sq.position()
    }

    #[inline]
    pub const fn to_square(self) -> Square {
        Square::from_row_col(self.row, self.col)
    }

    /// Build a position from a file number (`1..=8`) and a rank letter
    /// (`'a'..='h'`, either case).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate falls outside the board.
    #[track_caller]
    pub fn from_algebraic(file: u8, rank: char) -> Position {
        assert!((1..=8).contains(&file), "file must be in 1..=8, got {file}");
        let rank = rank.to_ascii_lowercase();
        assert!(('a'..='h').contains(&rank), "rank must be in a..=h, got {rank:?}");
        Position::new(file - 1, rank as u8 - b'a')
    }

    /// Parse text such as `"e4"`, returning `None` for anything that does
    /// not name a square.
    pub fn parse_algebraic(s: &str) -> Option<Position> {
        let &[letter, digit] = s.as_bytes() else {
            return None;
        };
        let letter = letter.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&letter) || !(b'1'..=b'8').contains(&digit) {
            return None;
        }
        Some(Position::new(digit - b'1', letter - b'a'))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 1-based row number.
    #[inline]
    pub const fn file(self) -> u8 {
        self.row + 1
    }

    /// Column letter.
    #[inline]
    pub const fn rank(self) -> char {
        (self.col + b'a') as char
    }
}

impl From<Square> for Position {
    fn from(sq: Square) -> Position {
        Position::from_square(sq)
    }
}

impl From<Position> for Square {
    fn from(pos: Position) -> Square {
        pos.to_square()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.file())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::square::Square;

    #[test]
    fn square_roundtrip() {
        for sq in Square::all() {
            let pos = Position::from_square(sq);
            assert_eq!(pos.to_square(), sq);
            assert_eq!(Square::from(pos), sq);
        }
    }

    #[test]
    fn algebraic_naming() {
        let pos = Position::from_algebraic(4, 'e');
        assert_eq!(pos.row(), 3);
        assert_eq!(pos.col(), 4);
        assert_eq!(pos.file(), 4);
        assert_eq!(pos.rank(), 'e');
        assert_eq!(pos.to_square(), Square::E4);
        assert_eq!(Position::from_algebraic(1, 'A'), Position::new(0, 0));
    }

    #[test]
    fn parse_text() {
        assert_eq!(Position::parse_algebraic("a1"), Some(Position::new(0, 0)));
        assert_eq!(Position::parse_algebraic("H8"), Some(Position::new(7, 7)));
        assert_eq!(Position::parse_algebraic("i1"), None);
        assert_eq!(Position::parse_algebraic("a9"), None);
        assert_eq!(Position::parse_algebraic("a10"), None);
        assert_eq!(Position::parse_algebraic(""), None);
    }

    #[test]
    #[should_panic(expected = "file must be in 1..=8")]
    fn algebraic_file_out_of_range() {
        let _ = Position::from_algebraic(9, 'a');
    }

    #[test]
    #[should_panic(expected = "rank must be in a..=h")]
    fn algebraic_rank_out_of_range() {
        let _ = Position::from_algebraic(1, 'z');
    }

    #[test]
    #[should_panic(expected = "row and col must be in 0..8")]
    fn new_out_of_range() {
        let _ = Position::new(3, 8);
    }

    #[test]
    fn display_is_algebraic() {
        assert_eq!(Position::new(3, 4).to_string(), "e4");
        assert_eq!(format!("{:?}", Position::new(3, 4)), "Position(3, 4)");
    }
}
