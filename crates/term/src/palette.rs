//! Block colors.
//!
//! Index 0 is the empty cell and is never drawn; 1..=7 belong to the seven
//! piece templates in catalog order.

use crate::fb::Rgb;
use crate::types::PALETTE_LEN;

pub const PALETTE: [Rgb; PALETTE_LEN] = [
    Rgb::new(0x00, 0x00, 0x00), // empty
    Rgb::new(0xFF, 0x00, 0x00), // I
    Rgb::new(0x00, 0xFF, 0x00), // J
    Rgb::new(0x00, 0x00, 0xFF), // L
    Rgb::new(0xFF, 0xA5, 0x00), // O
    Rgb::new(0xFF, 0xFF, 0x00), // S
    Rgb::new(0x80, 0x00, 0x80), // T
    Rgb::new(0xFF, 0x00, 0xFF), // Z
];

/// Color for a stored cell value, or `None` for empty/unknown values
pub fn block_color(index: u8) -> Option<Rgb> {
    match index {
        0 => None,
        i => PALETTE.get(i as usize).copied(),
    }
}
