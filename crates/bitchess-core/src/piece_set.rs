//! One side's pieces: a bitboard per piece kind.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::lut;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The squares held by each piece kind of one side.
///
/// A square belongs to at most one kind. Nothing here knows which side the
/// set belongs to; the owner keeps that association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceSet {
    /// Indexed by [`PieceKind::index()`].
    boards: [Bitboard; PieceKind::COUNT],
}

impl PieceSet {
    /// A set with no pieces.
    pub const EMPTY: PieceSet = PieceSet {
        boards: [Bitboard::EMPTY; PieceKind::COUNT],
    };

    /// Build a set from per-kind bitboards in [`PieceKind::ALL`] order.
    #[inline]
    pub const fn new(boards: [Bitboard; PieceKind::COUNT]) -> PieceSet {
        PieceSet { boards }
    }

    /// `color`'s pieces at the start of a game.
    pub const fn starting(color: Color) -> PieceSet {
        let mut boards = [Bitboard::EMPTY; PieceKind::COUNT];
        let mut k = 0;
        while k < PieceKind::COUNT {
            boards[k] = lut::starting_position(color, PieceKind::ALL[k]);
            k += 1;
        }
        PieceSet { boards }
    }

    /// Kind of the piece standing on `pos`, if any.
    ///
    /// Kinds are tested in [`PieceKind::ALL`] order and the first match
    /// wins.
    pub fn piece_at(&self, pos: Position) -> Option<PieceKind> {
        self.kind_on(pos.to_square())
    }

    /// Square-indexed form of [`piece_at`](Self::piece_at).
    pub fn kind_on(&self, sq: Square) -> Option<PieceKind> {
        let mask = Bitboard::for_square(sq);
        PieceKind::ALL
            .into_iter()
            .find(|&kind| (self.boards[kind.index()] & mask).is_nonempty())
    }

    /// The squares held by `kind`.
    #[inline]
    pub fn board(&self, kind: PieceKind) -> Bitboard {
        self.boards[kind.index()]
    }

    /// Mutable access to the squares held by `kind`.
    #[inline]
    pub fn board_mut(&mut self, kind: PieceKind) -> &mut Bitboard {
        &mut self.boards[kind.index()]
    }

    /// Union of every kind's squares.
    pub fn all(&self) -> Bitboard {
        self.boards
            .iter()
            .fold(Bitboard::EMPTY, |acc, &board| acc | board)
    }

    /// Put a `kind` piece on `sq`. Does not clear other kinds.
    #[inline]
    pub fn place(&mut self, kind: PieceKind, sq: Square) {
        *self.board_mut(kind) |= Bitboard::for_square(sq);
    }

    /// Remove whatever stands on `sq`, returning its kind.
    pub fn remove(&mut self, sq: Square) -> Option<PieceKind> {
        let kind = self.kind_on(sq)?;
        *self.board_mut(kind) &= !Bitboard::for_square(sq);
        Some(kind)
    }

    /// Number of pieces in the set.
    pub fn count(&self) -> u32 {
        self.boards.iter().map(|b| b.count()).sum()
    }

    /// Check that no two kinds share a square. `color` only labels the
    /// error.
    pub fn validate(&self, color: Color) -> Result<(), BoardError> {
        for (i, &first) in PieceKind::ALL.iter().enumerate() {
            for &second in &PieceKind::ALL[i + 1..] {
                let shared = self.board(first) & self.board(second);
                if let Some(square) = shared.lsb() {
                    return Err(BoardError::OverlappingKinds {
                        color,
                        first,
                        second,
                        square,
                    });
                }
            }
        }
        Ok(())
    }
}
