//! Segment palette

use crate::options::Color;

/// Default segment colors, cycled for wheels with more than 10 segments
pub const DEFAULT_PALETTE: [Color; 10] = [
    Color::rgb(0xE0, 0x70, 0x26), // orange
    Color::rgb(0xE8, 0xC2, 0x2E), // yellow
    Color::rgb(0xAB, 0xC9, 0x37), // lime
    Color::rgb(0x4F, 0x99, 0x1D), // green
    Color::rgb(0x22, 0xAF, 0xD3), // cyan
    Color::rgb(0x58, 0x58, 0xD0), // blue
    Color::rgb(0x7B, 0x48, 0xC8), // violet
    Color::rgb(0xD8, 0x43, 0xB9), // magenta
    Color::rgb(0xE2, 0x3B, 0x80), // pink
    Color::rgb(0xD8, 0x2B, 0x2B), // red
];

/// Color for segment `index`, wrapping around the palette.
///
/// The palette must be non-empty; options validation guarantees that for
/// user palettes.
#[inline]
pub fn color_for_index(palette: &[Color], index: usize) -> Color {
    palette[index % palette.len()]
}
