//! Built-in 5x7 bitmap font used when no system font can be loaded.
//!
//! Each glyph is eight rows of five bits (bit 4 is the leftmost column). Rows 0 through 6 sit above
//! the baseline and row 7 is the descender row.

use crate::font::handle::GlyphRaster;

pub(crate) const CELL_WIDTH: u32 = 5;
pub(crate) const CELL_HEIGHT: u32 = 8;
pub(crate) const ASCENT: i32 = 7;
pub(crate) const ADVANCE: f32 = 6.0;

type Rows = [u8; 8];

const TOFU: Rows = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111, 0,
];

// Printable ASCII, 0x20..=0x7E.
const ASCII: [Rows; 95] = [
    [0, 0, 0, 0, 0, 0, 0, 0],                                         // ' '
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0, 0b00100, 0],     // '!'
    [0b01010, 0b01010, 0b01010, 0, 0, 0, 0, 0],                       // '"'
    [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010, 0], // '#'
    [0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100, 0], // '$'
    [0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011, 0], // '%'
    [0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101, 0], // '&'
    [0b01100, 0b00100, 0b01000, 0, 0, 0, 0, 0],                       // '\''
    [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010, 0], // '('
    [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000, 0], // ')'
    [0, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0, 0],           // '*'
    [0, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0, 0],           // '+'
    [0, 0, 0, 0, 0b01100, 0b00100, 0b01000, 0],                       // ','
    [0, 0, 0, 0b11111, 0, 0, 0, 0],                                   // '-'
    [0, 0, 0, 0, 0, 0b01100, 0b01100, 0],                             // '.'
    [0, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0, 0],           // '/'
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110, 0], // '0'
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0], // '1'
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111, 0], // '2'
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110, 0], // '3'
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010, 0], // '4'
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110, 0], // '5'
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110, 0], // '6'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0], // '7'
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110, 0], // '8'
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100, 0], // '9'
    [0, 0b01100, 0b01100, 0, 0b01100, 0b01100, 0, 0],                 // ':'
    [0, 0b01100, 0b01100, 0, 0b01100, 0b00100, 0b01000, 0],           // ';'
    [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010, 0], // '<'
    [0, 0, 0b11111, 0, 0b11111, 0, 0, 0],                             // '='
    [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000, 0], // '>'
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0, 0b00100, 0],     // '?'
    [0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110, 0], // '@'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0], // 'A'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110, 0], // 'B'
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110, 0], // 'C'
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100, 0], // 'D'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111, 0], // 'E'
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0], // 'F'
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111, 0], // 'G'
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0], // 'H'
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0], // 'I'
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100, 0], // 'J'
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001, 0], // 'K'
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111, 0], // 'L'
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001, 0], // 'M'
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0], // 'N'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0], // 'O'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000, 0], // 'P'
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101, 0], // 'Q'
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001, 0], // 'R'
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110, 0], // 'S'
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0], // 'T'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110, 0], // 'U'
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0], // 'V'
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010, 0], // 'W'
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001, 0], // 'X'
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0], // 'Y'
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111, 0], // 'Z'
    [0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110, 0], // '['
    [0, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0, 0],           // '\\'
    [0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110, 0], // ']'
    [0b00100, 0b01010, 0b10001, 0, 0, 0, 0, 0],                       // '^'
    [0, 0, 0, 0, 0, 0, 0b11111, 0],                                   // '_'
    [0b01000, 0b00100, 0b00010, 0, 0, 0, 0, 0],                       // '`'
    [0, 0, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111, 0],           // 'a'
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110, 0], // 'b'
    [0, 0, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110, 0],           // 'c'
    [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111, 0], // 'd'
    [0, 0, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110, 0],           // 'e'
    [0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000, 0], // 'f'
    [0, 0, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],     // 'g'
    [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, 0], // 'h'
    [0b00100, 0, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110, 0],     // 'i'
    [0b00010, 0, 0b00110, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // 'j'
    [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0], // 'k'
    [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110, 0], // 'l'
    [0, 0, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001, 0],           // 'm'
    [0, 0, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001, 0],           // 'n'
    [0, 0, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110, 0],           // 'o'
    [0, 0, 0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000],     // 'p'
    [0, 0, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001],     // 'q'
    [0, 0, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000, 0],           // 'r'
    [0, 0, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110, 0],           // 's'
    [0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110, 0], // 't'
    [0, 0, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101, 0],           // 'u'
    [0, 0, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0],           // 'v'
    [0, 0, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010, 0],           // 'w'
    [0, 0, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0],           // 'x'
    [0, 0, 0b10001, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110],     // 'y'
    [0, 0, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111, 0],           // 'z'
    [0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010, 0], // '{'
    [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0], // '|'
    [0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000, 0], // '}'
    [0, 0, 0b01000, 0b10101, 0b00010, 0, 0, 0],                       // '~'
];

/// Combining marks are zero-width and stack above the previous cell.
pub(crate) fn is_combining_mark(ch: char) -> bool {
    matches!(
        u32::from(ch),
        0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF | 0xFE20..=0xFE2F
    )
}

pub(crate) fn glyph(ch: char) -> GlyphRaster {
    if is_combining_mark(ch) {
        return combining_glyph(ch);
    }
    let rows = match u32::from(ch) {
        c @ 0x20..=0x7E => &ASCII[(c - 0x20) as usize],
        _ if ch.is_whitespace() => &ASCII[0],
        _ => &TOFU,
    };
    let mut coverage = vec![0u8; (CELL_WIDTH * CELL_HEIGHT) as usize];
    for (y, bits) in rows.iter().enumerate() {
        for x in 0..CELL_WIDTH {
            if bits & (0b10000 >> x) != 0 {
                coverage[y * CELL_WIDTH as usize + x as usize] = 255;
            }
        }
    }
    GlyphRaster {
        left: 0,
        top: -ASCENT,
        width: CELL_WIDTH,
        height: CELL_HEIGHT,
        coverage,
        advance: ADVANCE,
    }
}

// A short bar floating one to three rows above the previous glyph.
fn combining_glyph(ch: char) -> GlyphRaster {
    let lift = 1 + (u32::from(ch) % 3) as i32;
    let width = 3u32;
    GlyphRaster {
        left: 1 - ADVANCE as i32,
        top: -ASCENT - lift,
        width,
        height: 1,
        coverage: vec![255; width as usize],
        advance: 0.0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/font/builtin.rs"]
mod tests;
