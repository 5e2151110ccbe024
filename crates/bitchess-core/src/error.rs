//! Error types for placement parsing and piece-set validation.

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Errors that occur when parsing a piece placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// More than two whitespace-separated fields.
    #[error("expected a placement and an optional side to move, found {found} fields")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement does not have exactly 8 rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Board row (0 = White's back row).
        row: u8,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSideToMove {
        /// The invalid token.
        found: String,
    },
}

/// Errors from structural validation of piece sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two piece kinds of one side claim the same square.
    #[error("{color} {first} and {second} overlap on {square}")]
    OverlappingKinds {
        color: Color,
        first: PieceKind,
        second: PieceKind,
        square: Square,
    },
    /// White and black both occupy a square.
    #[error("white and black pieces overlap on {square}")]
    OverlappingSides {
        square: Square,
    },
}
