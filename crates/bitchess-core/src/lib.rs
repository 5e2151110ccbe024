//! Board representation: squares, bitboards, lookup tables and per-side
//! piece sets.

pub mod attacks;
mod bitboard;
mod color;
mod error;
pub mod lut;
mod piece;
mod piece_kind;
mod piece_set;
mod placement;
mod position;
mod square;

pub use bitboard::{Bitboard, Squares};
pub use color::Color;
pub use error::{BoardError, PlacementError};
pub use lut::LineFamily;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use piece_set::PieceSet;
pub use placement::{Placement, STARTING_PLACEMENT};
pub use position::Position;
pub use square::Square;
