//! Piece placement strings: the board field of FEN, optionally followed by
//! the side to move.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::piece_set::PieceSet;
use crate::square::Square;

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Both sides' pieces and the side to move, as read from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub white: PieceSet,
    pub black: PieceSet,
    pub turn: Color,
}

impl Placement {
    /// The set belonging to `color`.
    pub fn side(&self, color: Color) -> &PieceSet {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut PieceSet {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Piece on `sq`, looking at White first.
    fn piece_on(&self, sq: Square) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            self.side(color)
                .kind_on(sq)
                .map(|kind| Piece::new(color, kind))
        })
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Placement, PlacementError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 2 {
            return Err(PlacementError::WrongFieldCount {
                found: fields.len(),
            });
        }

        // Rows are listed from row 7 down to row 0.
        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut placement = Placement {
            white: PieceSet::EMPTY,
            black: PieceSet::EMPTY,
            turn: Color::White,
        };

        for (i, row_str) in rows.iter().enumerate() {
            let row = 7 - i as u8;
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += run as usize;
                    continue;
                }

                let piece =
                    Piece::from_letter(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(PlacementError::BadRowLength {
                        row,
                        length: col + 1,
                    });
                }
                let sq = Square::from_row_col(row, col as u8);
                placement.side_mut(piece.color).place(piece.kind, sq);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        if let Some(&token) = fields.get(1) {
            placement.turn = Color::from_token(token).ok_or_else(|| {
                PlacementError::InvalidSideToMove {
                    found: token.to_string(),
                }
            })?;
        }

        Ok(placement)
    }
}

/// Writes the placement field and the side to move.
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8u8).rev() {
            let mut empty = 0;
            for col in 0..8u8 {
                match self.piece_on(Square::from_row_col(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 0 {
                f.write_str("/")?;
            }
        }
        let token = match self.turn {
            Color::White => "w",
            Color::Black => "b",
        };
        write!(f, " {token}")
    }
}
