//! Move descriptions and the result of submitting a move.

use std::fmt;

use bitchess_core::{Piece, Position};

/// A piece travelling from `source` to `dest`.
///
/// `dest == None` means the piece left the board, which is how a capture
/// is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub source: Position,
    pub dest: Option<Position>,
}

impl Move {
    #[inline]
    pub const fn new(piece: Piece, source: Position, dest: Position) -> Move {
        Move {
            piece,
            source,
            dest: Some(dest),
        }
    }

    /// `piece` taken off the board from `source`.
    #[inline]
    pub const fn removal(piece: Piece, source: Position) -> Move {
        Move {
            piece,
            source,
            dest: None,
        }
    }

    #[inline]
    pub const fn is_removal(&self) -> bool {
        self.dest.is_none()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dest {
            Some(dest) => write!(f, "{} {}-{}", self.piece, self.source, dest),
            None => write!(f, "{} {} off the board", self.piece, self.source),
        }
    }
}

/// Why a move was refused. A refused move changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The destination holds the opposing king.
    KingCapture { king: Position },
    /// The destination holds a piece of the side moving.
    OwnPiece { square: Position },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::KingCapture { king } => write!(f, "cannot capture the king on {king}"),
            RejectReason::OwnPiece { square } => write!(f, "{square} holds a piece of the side moving"),
        }
    }
}

/// A move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The moving piece and its path.
    pub moved: Move,
    /// The piece removed from the destination, if any.
    pub capture: Option<Move>,
    /// Whether a pawn promoted. Promotion is not implemented, so this is
    /// always `false`.
    pub promotion: bool,
}

/// Result of [`MoveEngine::attempt_move`](crate::MoveEngine::attempt_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Accepted(AppliedMove),
    Rejected(RejectReason),
}

impl MoveOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    #[inline]
    pub fn applied(&self) -> Option<&AppliedMove> {
        match self {
            MoveOutcome::Accepted(applied) => Some(applied),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// The captured piece, if the move was accepted and captured one.
    #[inline]
    pub fn capture(&self) -> Option<Move> {
        self.applied().and_then(|applied| applied.capture)
    }

    /// The promotion flag of an accepted move; `false` when rejected.
    #[inline]
    pub fn promotion(&self) -> bool {
        self.applied().is_some_and(|applied| applied.promotion)
    }

    #[inline]
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitchess_core::{Color, PieceKind};

    fn pos(s: &str) -> Position {
        Position::parse_algebraic(s).unwrap()
    }

    #[test]
    fn removal_has_no_destination() {
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let mv = Move::removal(pawn, pos("a5"));
        assert!(mv.is_removal());
        assert_eq!(mv.to_string(), "black pawn a5 off the board");

        let mv = Move::new(pawn, pos("a7"), pos("a5"));
        assert!(!mv.is_removal());
        assert_eq!(mv.to_string(), "black pawn a7-a5");
    }

    #[test]
    fn outcome_accessors() {
        let rook = Piece::new(Color::White, PieceKind::Rook);
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);
        let accepted = MoveOutcome::Accepted(AppliedMove {
            moved: Move::new(rook, pos("a1"), pos("a5")),
            capture: Some(Move::removal(pawn, pos("a5"))),
            promotion: false,
        });
        assert!(accepted.is_accepted());
        assert_eq!(accepted.capture().map(|m| m.piece), Some(pawn));
        assert!(!accepted.promotion());
        assert_eq!(accepted.rejection(), None);

        let rejected = MoveOutcome::Rejected(RejectReason::KingCapture { king: pos("e8") });
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.capture(), None);
        assert!(rejected.applied().is_none());
        assert_eq!(
            rejected.rejection().map(|r| r.to_string()),
            Some("cannot capture the king on e8".to_string())
        );
    }
}
