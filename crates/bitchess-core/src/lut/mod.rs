//! Process-wide lookup tables.
//!
//! Structural masks are compile-time constants. The occupancy tables are
//! built on first use (or by an explicit [`init`]) and are read-only
//! afterwards.

pub(crate) mod masks;
mod occupancy;

pub use self::occupancy::{LINE_LEN, LineFamily, PATTERNS};

pub(crate) use self::occupancy::tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Build the occupancy tables now rather than on the first query.
///
/// Calling this more than once is harmless.
pub fn init() {
    let _ = tables();
}

/// Squares reached by a slider at `place` (0..8) along the reference line
/// of `family`, when the line's other squares are occupied per `occ`.
///
/// The reference lines are row 0, column 0, diagonal 7 (a1-h8) and
/// anti-diagonal 7 (h1-a8); places count along the line in ascending
/// square order. The result never leaves the reference line.
///
/// # Panics
///
/// Panics if `place` is 8 or more.
#[track_caller]
pub fn occupancy_mask(family: LineFamily, place: usize, occ: u8) -> Bitboard {
    assert!(place < LINE_LEN, "place must be in 0..8, got {place}");
    tables().get(family, place, occ)
}

/// Starting squares of `color`'s pieces of `kind`.
#[inline]
pub const fn starting_position(color: Color, kind: PieceKind) -> Bitboard {
    masks::START[color.index()][kind.index()]
}
