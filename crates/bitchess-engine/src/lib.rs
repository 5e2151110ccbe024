//! Move application for bitchess: a pair of piece sets, the side to move,
//! and the rules for applying a move to them.

mod engine;
mod error;
mod moves;
mod pretty;

pub use engine::MoveEngine;
pub use error::EngineError;
pub use moves::{AppliedMove, Move, MoveOutcome, RejectReason};
pub use pretty::PrettyBoard;
