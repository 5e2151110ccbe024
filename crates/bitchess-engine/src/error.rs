//! Engine construction errors.

use bitchess_core::{BoardError, PlacementError};

/// Errors that can occur while setting up a [`MoveEngine`](crate::MoveEngine).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The placement text could not be parsed.
    #[error("invalid placement: {source}")]
    Placement {
        #[from]
        source: PlacementError,
    },

    /// The piece sets break the one-piece-per-square rule.
    #[error("invalid board: {source}")]
    Board {
        #[from]
        source: BoardError,
    },
}
