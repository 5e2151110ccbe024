//! Compile-time structural masks: squares, rows, columns, diagonals and
//! the starting placement of every piece.

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;

const ROW_BASE: u64 = 0xFF;
const COL_BASE: u64 = 0x0101_0101_0101_0101;
/// Diagonal 7: a1, b2, ..., h8.
const DIAG_BASE: u64 = 0x8040_2010_0804_0201;
/// Anti-diagonal 7: h1, g2, ..., a8.
const ANTI_DIAG_BASE: u64 = 0x0102_0408_1020_4080;

/// Move a line that passes through row 0 at index 7 to line `index` by
/// shifting whole rows; bits pushed past either edge fall off.
const fn shift_line(base: u64, index: usize) -> u64 {
    if index >= 7 {
        base << (8 * (index - 7))
    } else {
        base >> (8 * (7 - index))
    }
}

const fn compute_squares() -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        table[sq] = Bitboard::new(1u64 << sq);
        sq += 1;
    }
    table
}

const fn compute_rows() -> [Bitboard; 8] {
    let mut table = [Bitboard::EMPTY; 8];
    let mut row = 0;
    while row < 8 {
        table[row] = Bitboard::new(ROW_BASE << (8 * row));
        row += 1;
    }
    table
}

const fn compute_cols() -> [Bitboard; 8] {
    let mut table = [Bitboard::EMPTY; 8];
    let mut col = 0;
    while col < 8 {
        table[col] = Bitboard::new(COL_BASE << col);
        col += 1;
    }
    table
}

const fn compute_lines(base: u64) -> [Bitboard; 15] {
    let mut table = [Bitboard::EMPTY; 15];
    let mut index = 0;
    while index < 15 {
        table[index] = Bitboard::new(shift_line(base, index));
        index += 1;
    }
    table
}

/// Squares at columns `cols` (bit `c` set means column `c`) on `row`.
const fn on_row(row: u8, cols: u8) -> Bitboard {
    Bitboard::new((cols as u64) << (8 * row as u32))
}

const fn start_mask(color: Color, kind: PieceKind) -> Bitboard {
    match kind {
        PieceKind::Pawn => on_row(color.pawn_row(), 0xFF),
        PieceKind::Knight => on_row(color.back_row(), 0b0100_0010),
        PieceKind::Bishop => on_row(color.back_row(), 0b0010_0100),
        PieceKind::Rook => on_row(color.back_row(), 0b1000_0001),
        PieceKind::Queen => on_row(color.back_row(), 0b0000_1000),
        PieceKind::King => on_row(color.back_row(), 0b0001_0000),
    }
}

const fn compute_start() -> [[Bitboard; PieceKind::COUNT]; Color::COUNT] {
    let mut table = [[Bitboard::EMPTY; PieceKind::COUNT]; Color::COUNT];
    let mut c = 0;
    while c < Color::COUNT {
        let mut k = 0;
        while k < PieceKind::COUNT {
            table[c][k] = start_mask(Color::ALL[c], PieceKind::ALL[k]);
            k += 1;
        }
        c += 1;
    }
    table
}

pub(crate) const SQUARES: [Bitboard; 64] = compute_squares();
pub(crate) const ROWS: [Bitboard; 8] = compute_rows();
pub(crate) const COLS: [Bitboard; 8] = compute_cols();
pub(crate) const DIAGS: [Bitboard; 15] = compute_lines(DIAG_BASE);
pub(crate) const ANTI_DIAGS: [Bitboard; 15] = compute_lines(ANTI_DIAG_BASE);
pub(crate) const START: [[Bitboard; PieceKind::COUNT]; Color::COUNT] = compute_start();
