//! The move engine: both sides' piece sets and whose turn it is.

use tracing::{debug, trace};

use bitchess_core::attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_captures, queen_attacks, rook_attacks,
};
use bitchess_core::{
    Bitboard, BoardError, Color, Piece, PieceKind, PieceSet, Placement, Position, lut,
};

use crate::error::EngineError;
use crate::moves::{AppliedMove, Move, MoveOutcome, RejectReason};
use crate::pretty::PrettyBoard;

/// Applies moves to a pair of piece sets.
///
/// Movement is pseudo-legal: the engine clears the source, resolves what
/// stands on the destination and sets the destination. The only guards are
/// that the opposing king cannot be captured and that a side cannot land
/// on its own piece. Cloning gives an independent copy of the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEngine {
    /// Indexed by [`Color::index()`].
    sides: [PieceSet; Color::COUNT],
    turn: Color,
}

impl MoveEngine {
    /// Create an engine holding the standard starting position, White to move.
    pub fn new() -> Self {
        lut::init();
        debug!("engine created with the starting position");
        Self {
            sides: [
                PieceSet::starting(Color::White),
                PieceSet::starting(Color::Black),
            ],
            turn: Color::White,
        }
    }

    /// Create an engine from explicit piece sets.
    ///
    /// # Errors
    ///
    /// Fails if a set has two kinds on one square or the sets share a square.
    pub fn from_sets(white: PieceSet, black: PieceSet, turn: Color) -> Result<Self, BoardError> {
        white.validate(Color::White)?;
        black.validate(Color::Black)?;
        if let Some(square) = (white.all() & black.all()).lsb() {
            return Err(BoardError::OverlappingSides { square });
        }

        lut::init();
        debug!(
            white = white.count(),
            black = black.count(),
            %turn,
            "engine created from piece sets"
        );
        Ok(Self {
            sides: [white, black],
            turn,
        })
    }

    /// Create an engine from placement text such as
    /// `"4k3/8/8/p7/8/8/8/R3K3 w"`.
    ///
    /// # Errors
    ///
    /// Fails if the text does not parse or describes an invalid board.
    pub fn from_placement(text: &str) -> Result<Self, EngineError> {
        let placement: Placement = text.parse()?;
        Ok(Self::from_sets(placement.white, placement.black, placement.turn)?)
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// `color`'s pieces.
    #[inline]
    pub fn pieces(&self, color: Color) -> &PieceSet {
        &self.sides[color.index()]
    }

    /// All occupied squares.
    pub fn occupied(&self) -> Bitboard {
        self.sides[0].all() | self.sides[1].all()
    }

    /// The piece standing on `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        Color::ALL.into_iter().find_map(|color| {
            self.pieces(color)
                .piece_at(pos)
                .map(|kind| Piece::new(color, kind))
        })
    }

    /// Squares the piece on `pos` attacks, excluding squares held by its
    /// own side. Empty when `pos` is empty.
    ///
    /// Sliders stop at the first occupied square. This is informational:
    /// [`attempt_move`](Self::attempt_move) does not consult it.
    pub fn attacks_from(&self, pos: Position) -> Bitboard {
        let Some(piece) = self.piece_at(pos) else {
            return Bitboard::EMPTY;
        };
        let sq = pos.to_square();
        let occupied = self.occupied();
        let reach = match piece.kind {
            PieceKind::Pawn => pawn_captures(piece.color, sq),
            PieceKind::Knight => knight_attacks(sq),
            PieceKind::Bishop => bishop_attacks(sq, occupied),
            PieceKind::Rook => rook_attacks(sq, occupied),
            PieceKind::Queen => queen_attacks(sq, occupied),
            PieceKind::King => king_attacks(sq),
        };
        reach & !self.pieces(piece.color).all()
    }

    /// Snapshot of the board in placement form.
    pub fn placement(&self) -> Placement {
        Placement {
            white: self.sides[Color::White.index()],
            black: self.sides[Color::Black.index()],
            turn: self.turn,
        }
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard::new(self)
    }

    /// Move the side-to-move's piece on `source` to `dest`.
    ///
    /// An opposing piece on `dest` is captured and reported in the
    /// outcome. The turn passes to the other side only when the move is
    /// accepted; a rejected move leaves every bitboard untouched.
    ///
    /// # Panics
    ///
    /// Panics if the side to move has no piece on `source`.
    #[track_caller]
    pub fn attempt_move(&mut self, source: Position, dest: Position) -> MoveOutcome {
        let us = self.turn;
        let Some(kind) = self.pieces(us).piece_at(source) else {
            panic!("no {us} piece on {source}");
        };

        let outcome = match kind {
            PieceKind::Pawn => self.attempt_pawn_move(us, source, dest),
            PieceKind::Knight
            | PieceKind::Bishop
            | PieceKind::Rook
            | PieceKind::Queen
            | PieceKind::King => self.move_and_capture(Piece::new(us, kind), source, dest),
        };

        match &outcome {
            MoveOutcome::Accepted(applied) => {
                self.turn = us.flip();
                trace!(mv = %applied.moved, "move applied");
            }
            MoveOutcome::Rejected(reason) => {
                trace!(from = %source, to = %dest, %reason, "move rejected");
            }
        }
        outcome
    }

    fn attempt_pawn_move(&mut self, color: Color, source: Position, dest: Position) -> MoveOutcome {
        // TODO: replace a pawn reaching the last row and set `promotion`.
        self.move_and_capture(Piece::new(color, PieceKind::Pawn), source, dest)
    }

    /// Clear `source`, take any opposing piece off `dest`, set `dest`.
    fn move_and_capture(&mut self, piece: Piece, source: Position, dest: Position) -> MoveOutcome {
        let us = piece.color;
        let them = us.flip();

        if self.pieces(us).piece_at(dest).is_some() {
            return MoveOutcome::Rejected(RejectReason::OwnPiece { square: dest });
        }
        let target = self.pieces(them).piece_at(dest);
        if target == Some(PieceKind::King) {
            return MoveOutcome::Rejected(RejectReason::KingCapture { king: dest });
        }

        let src_mask = Bitboard::for_square(source.to_square());
        let dst_mask = Bitboard::for_square(dest.to_square());

        let capture = target.map(|kind| {
            *self.sides[them.index()].board_mut(kind) &= !dst_mask;
            let captured = Move::removal(Piece::new(them, kind), dest);
            trace!(captured = %captured.piece, at = %dest, "piece captured");
            captured
        });

        let board = self.sides[us.index()].board_mut(piece.kind);
        *board &= !src_mask;
        *board |= dst_mask;

        MoveOutcome::Accepted(AppliedMove {
            moved: Move::new(piece, source, dest),
            capture,
            promotion: false,
        })
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new()
    }
}
