// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

pub const SIZE: usize = 9;
pub const BOX: usize = 3;
pub const BOXES: usize = (SIZE / BOX) * (SIZE / BOX);

pub const TRAY_SIZE: usize = 3;

/// Bonus points per cleared unit (row, column, or 3x3 box).
/// A turn that clears nothing still scores one point per placed cell.
pub const CLEAR_UNIT_BONUS: u32 = 10;

/// Bit mask of a fully occupied row (bit `c` = column `c`).
pub const FULL_ROW: u16 = (1 << SIZE) - 1;

#[inline]
pub fn box_of(row: usize, col: usize) -> usize {
    debug_assert!(row < SIZE);
    debug_assert!(col < SIZE);
    (row / BOX) * (SIZE / BOX) + col / BOX
}

#[inline]
pub fn box_origin(b: usize) -> (usize, usize) {
    debug_assert!(b < BOXES);
    ((b / (SIZE / BOX)) * BOX, (b % (SIZE / BOX)) * BOX)
}
