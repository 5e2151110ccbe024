//! Attack queries: leaper tables computed at compile time and sliding
//! attacks read from the occupancy tables.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::lut::{self, LINE_LEN, LineFamily};
use crate::square::Square;

const fn compute_leaper(deltas: [(i8, i8); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0usize;
    while sq < 64 {
        let row = (sq / 8) as i8;
        let col = (sq % 8) as i8;
        let mut bits = 0u64;
        let mut d = 0;
        while d < 8 {
            let r = row + deltas[d].0;
            let c = col + deltas[d].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                bits |= 1u64 << (r as usize * 8 + c as usize);
            }
            d += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Diagonal forward targets of a pawn. White moves toward row 7.
const fn compute_pawn_captures() -> [[Bitboard; 64]; 2] {
    let mut table = [[Bitboard::EMPTY; 64]; 2];
    let mut sq = 0usize;
    while sq < 64 {
        let row = sq / 8;
        let col = sq % 8;
        let mut white = 0u64;
        let mut black = 0u64;
        if row < 7 {
            if col > 0 {
                white |= 1u64 << (sq + 7);
            }
            if col < 7 {
                white |= 1u64 << (sq + 9);
            }
        }
        if row > 0 {
            if col > 0 {
                black |= 1u64 << (sq - 9);
            }
            if col < 7 {
                black |= 1u64 << (sq - 7);
            }
        }
        table[0][sq] = Bitboard::new(white);
        table[1][sq] = Bitboard::new(black);
        sq += 1;
    }
    table
}

static KNIGHT_ATTACKS: [Bitboard; 64] = compute_leaper([
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
]);

static KING_ATTACKS: [Bitboard; 64] = compute_leaper([
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
]);

static PAWN_CAPTURES: [[Bitboard; 64]; 2] = compute_pawn_captures();

/// Squares a knight on `sq` attacks.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

/// Squares a king on `sq` attacks.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// Squares a `color` pawn on `sq` could capture on.
#[inline]
pub fn pawn_captures(color: Color, sq: Square) -> Bitboard {
    PAWN_CAPTURES[color.index()][sq.index()]
}

/// Row shift (in bits, positive = toward row 0) that carries the line of
/// `family` through `sq` onto the family's reference line, and the place
/// `sq` lands on.
fn projection(family: LineFamily, sq: Square) -> (i32, usize) {
    let (row, col) = (sq.row() as i32, sq.col() as i32);
    match family {
        LineFamily::Row => (8 * row, col as usize),
        LineFamily::Col => (col, row as usize),
        LineFamily::Diag => (8 * (row - col), col as usize),
        LineFamily::AntiDiag => (8 * (row + col - 7), (7 - col) as usize),
    }
}

#[inline]
fn shift_toward_a1(bb: Bitboard, by: i32) -> Bitboard {
    if by >= 0 { bb >> by as u32 } else { bb << by.unsigned_abs() }
}

/// Squares a slider on `sq` reaches along its `family` line, stopping at
/// (and including) the first occupied square in each direction.
pub fn line_attacks(family: LineFamily, sq: Square, occupied: Bitboard) -> Bitboard {
    let tables = lut::tables();
    let line = family.line_through(sq);
    let (shift, place) = projection(family, sq);

    let projected = shift_toward_a1(occupied & line, shift);
    let reference = tables.line(family);
    let pattern = (0..LINE_LEN)
        .filter(|&j| projected.contains(reference[j]))
        .fold(0u8, |acc, j| acc | (1 << j));

    shift_toward_a1(tables.get(family, place, pattern), -shift) & line
}

#[inline]
pub fn row_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    line_attacks(LineFamily::Row, sq, occupied)
}

#[inline]
pub fn col_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    line_attacks(LineFamily::Col, sq, occupied)
}

#[inline]
pub fn diag_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    line_attacks(LineFamily::Diag, sq, occupied)
}

#[inline]
pub fn anti_diag_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    line_attacks(LineFamily::AntiDiag, sq, occupied)
}

/// Rook attacks from `sq` given `occupied` squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    row_attacks(sq, occupied) | col_attacks(sq, occupied)
}

/// Bishop attacks from `sq` given `occupied` squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    diag_attacks(sq, occupied) | anti_diag_attacks(sq, occupied)
}

/// Queen attacks from `sq` given `occupied` squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk each ray from `sq` until a blocker, which is included.
    fn walk_rays(sq: Square, occupied: u64, dirs: &[(i8, i8)]) -> Bitboard {
        let mut attacks = 0u64;
        for &(dr, dc) in dirs {
            let mut r = sq.row() as i8 + dr;
            let mut c = sq.col() as i8 + dc;
            while (0..8).contains(&r) && (0..8).contains(&c) {
                let bit = 1u64 << (r as usize * 8 + c as usize);
                attacks |= bit;
                if occupied & bit != 0 {
                    break;
                }
                r += dr;
                c += dc;
            }
        }
        Bitboard::new(attacks)
    }

    const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

    #[test]
    fn knight_counts() {
        assert_eq!(knight_attacks(Square::E4).count(), 8);
        assert_eq!(knight_attacks(Square::A1).count(), 2);
        assert!(knight_attacks(Square::G1).contains(Square::F3));
    }

    #[test]
    fn king_counts() {
        assert_eq!(king_attacks(Square::E1).count(), 5);
        assert_eq!(king_attacks(Square::E4).count(), 8);
        assert_eq!(king_attacks(Square::H8).count(), 3);
    }

    #[test]
    fn pawn_captures_do_not_wrap() {
        let a = pawn_captures(Color::White, Square::A4);
        assert_eq!(a, Bitboard::for_square(Square::B5));
        let h = pawn_captures(Color::White, Square::H4);
        assert_eq!(h, Bitboard::for_square(Square::G5));
        let black = pawn_captures(Color::Black, Square::E5);
        assert_eq!(black, Bitboard::EMPTY.with(Square::D4).with(Square::F4));
        assert!(pawn_captures(Color::White, Square::E8).is_empty());
    }

    #[test]
    fn rook_on_empty_board_sees_14() {
        for sq in Square::all() {
            assert_eq!(rook_attacks(sq, Bitboard::EMPTY).count(), 14, "rook on {sq}");
        }
    }

    #[test]
    fn bishop_centre_and_corner() {
        assert_eq!(bishop_attacks(Square::D4, Bitboard::EMPTY).count(), 13);
        assert_eq!(bishop_attacks(Square::A1, Bitboard::EMPTY).count(), 7);
        assert_eq!(bishop_attacks(Square::H1, Bitboard::EMPTY).count(), 7);
    }

    #[test]
    fn rook_stops_at_blocker() {
        let attacks = rook_attacks(Square::E4, Bitboard::for_square(Square::E6));
        assert!(attacks.contains(Square::E5));
        assert!(attacks.contains(Square::E6));
        assert!(!attacks.contains(Square::E7));
    }

    #[test]
    fn own_square_is_never_attacked() {
        for sq in Square::all() {
            assert!(!queen_attacks(sq, Bitboard::FULL).contains(sq));
        }
    }

    #[test]
    fn table_lookup_matches_ray_walk() {
        let mut rng: u64 = 0x9E37_79B9_7F4A_7C15;
        for sq in Square::all() {
            for _ in 0..64 {
                rng = rng
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                // Sparser boards exercise the longer rays.
                let occupied = rng & (rng >> 7);
                let occ = Bitboard::new(occupied);
                assert_eq!(
                    rook_attacks(sq, occ),
                    walk_rays(sq, occupied, &ORTHOGONAL),
                    "rook on {sq}, occupied {occupied:#018x}"
                );
                assert_eq!(
                    bishop_attacks(sq, occ),
                    walk_rays(sq, occupied, &DIAGONAL),
                    "bishop on {sq}, occupied {occupied:#018x}"
                );
            }
        }
    }

    #[test]
    fn line_attacks_stay_on_their_line() {
        let occ = Bitboard::new(0x00FF_0000_1818_0000);
        for family in LineFamily::ALL {
            for sq in Square::all() {
                let line = family.line_through(sq);
                assert!(line_attacks(family, sq, occ).is_subset_of(line));
            }
        }
    }
}
