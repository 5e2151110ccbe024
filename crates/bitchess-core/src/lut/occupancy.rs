//! Occupancy-bounded sliding tables.
//!
//! For each line family the table is built along one reference line (row
//! 0, column 0, diagonal 7, anti-diagonal 7). An entry maps the slider's
//! place on that line and an 8-bit blocker pattern to the squares the
//! slider reaches, blockers included. Other lines of the same family are
//! served by shifting whole rows onto the reference line and back, see
//! [`crate::attacks`].

use std::fmt;
use std::sync::OnceLock;

use tracing::debug;

use crate::bitboard::Bitboard;
use crate::lut::masks;
use crate::square::Square;

/// Number of places along a line.
pub const LINE_LEN: usize = 8;

/// Number of distinct blocker patterns of a line.
pub const PATTERNS: usize = 256;

/// The four directions a line can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LineFamily {
    Row = 0,
    Col = 1,
    Diag = 2,
    AntiDiag = 3,
}

impl LineFamily {
    pub const COUNT: usize = 4;

    pub const ALL: [LineFamily; 4] = [
        LineFamily::Row,
        LineFamily::Col,
        LineFamily::Diag,
        LineFamily::AntiDiag,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The line every table entry of this family is expressed on.
    #[inline]
    pub const fn reference_line(self) -> Bitboard {
        match self {
            LineFamily::Row => masks::ROWS[0],
            LineFamily::Col => masks::COLS[0],
            LineFamily::Diag => masks::DIAGS[7],
            LineFamily::AntiDiag => masks::ANTI_DIAGS[7],
        }
    }

    /// The line of this family passing through `sq`.
    #[inline]
    pub const fn line_through(self, sq: Square) -> Bitboard {
        match self {
            LineFamily::Row => Bitboard::row_of(sq),
            LineFamily::Col => Bitboard::col_of(sq),
            LineFamily::Diag => Bitboard::diag_of(sq),
            LineFamily::AntiDiag => Bitboard::anti_diag_of(sq),
        }
    }
}

impl fmt::Display for LineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineFamily::Row => "row",
            LineFamily::Col => "column",
            LineFamily::Diag => "diagonal",
            LineFamily::AntiDiag => "anti-diagonal",
        };
        f.write_str(name)
    }
}

/// Nearest set bit of `occ` strictly below `place`.
fn closest_below(place: usize, occ: u8) -> Option<usize> {
    (0..place).rev().find(|&j| occ & (1 << j) != 0)
}

/// Nearest set bit of `occ` strictly above `place`.
fn closest_above(place: usize, occ: u8) -> Option<usize> {
    (place + 1..LINE_LEN).find(|&j| occ & (1 << j) != 0)
}

/// Squares reached from `place` along `line` (listed in ascending square
/// order) when the line's blockers are `occ`. The bit for `place` itself
/// is ignored.
fn line_attacks(line: &[Square; LINE_LEN], place: usize, occ: u8) -> Bitboard {
    let low = closest_below(place, occ).unwrap_or(0);
    let high = closest_above(place, occ).unwrap_or(LINE_LEN - 1);
    (low..=high)
        .filter(|&j| j != place)
        .fold(Bitboard::EMPTY, |acc, j| acc.with(line[j]))
}

/// Squares of `line` in ascending index order.
pub(crate) fn line_squares(line: Bitboard) -> [Square; LINE_LEN] {
    let mut out = [Square::A1; LINE_LEN];
    let mut n = 0;
    for sq in line {
        out[n] = sq;
        n += 1;
    }
    debug_assert_eq!(n, LINE_LEN, "reference lines hold exactly 8 squares");
    out
}

pub(crate) struct OccupancyTables {
    /// Reference-line squares per family.
    lines: [[Square; LINE_LEN]; LineFamily::COUNT],
    /// Flat `[family][place][pattern]` table.
    attacks: Vec<Bitboard>,
}

impl OccupancyTables {
    #[inline]
    fn slot(family: LineFamily, place: usize, occ: u8) -> usize {
        (family.index() * LINE_LEN + place) * PATTERNS + occ as usize
    }

    fn build() -> OccupancyTables {
        let lines = LineFamily::ALL.map(|family| line_squares(family.reference_line()));
        let mut attacks = vec![Bitboard::EMPTY; LineFamily::COUNT * LINE_LEN * PATTERNS];

        for family in LineFamily::ALL {
            let reference = family.reference_line();
            let line = &lines[family.index()];
            for place in 0..LINE_LEN {
                for occ in 0..=u8::MAX {
                    let reach = line_attacks(line, place, occ);
                    assert!(
                        reach.is_subset_of(reference),
                        "{family} table leaves its line at place {place}, pattern {occ:#04x}"
                    );
                    attacks[Self::slot(family, place, occ)] = reach;
                }
            }
        }

        debug!(entries = attacks.len(), "occupancy tables built");
        OccupancyTables { lines, attacks }
    }

    #[inline]
    pub(crate) fn get(&self, family: LineFamily, place: usize, occ: u8) -> Bitboard {
        self.attacks[Self::slot(family, place, occ)]
    }

    /// Reference-line squares of `family`, ascending.
    #[inline]
    pub(crate) fn line(&self, family: LineFamily) -> &[Square; LINE_LEN] {
        &self.lines[family.index()]
    }
}

static TABLES: OnceLock<OccupancyTables> = OnceLock::new();

pub(crate) fn tables() -> &'static OccupancyTables {
    TABLES.get_or_init(OccupancyTables::build)
}
