//! Text grid rendering of an engine's board.

use std::fmt;

use bitchess_core::Position;

use crate::engine::MoveEngine;

/// Wrapper for pretty-printing a board as an 8x8 grid, row 7 at the top.
///
/// White pieces are upper case, Black lower case, empty squares `.`.
pub struct PrettyBoard<'a>(&'a MoveEngine);

impl<'a> PrettyBoard<'a> {
    pub(crate) fn new(engine: &'a MoveEngine) -> Self {
        PrettyBoard(engine)
    }
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = self.0;
        for row in (0u8..8).rev() {
            write!(f, "{}  ", row + 1)?;
            for col in 0u8..8 {
                let c = engine
                    .piece_at(Position::new(row, col))
                    .map_or('.', |piece| piece.letter());
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::MoveEngine;

    #[test]
    fn starting_grid() {
        let text = MoveEngine::new().pretty().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[1], "7  p p p p p p p p");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
