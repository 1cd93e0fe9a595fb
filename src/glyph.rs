//! Monochrome bitmap fonts and their expansion into RGB565 pixel data.
//!
//! A font is an opaque table of glyph bitmaps, one bit per pixel with the most significant bit
//! leftmost, rows stored top to bottom. Glyphs are 8 or 16 pixels wide (1 or 2 bytes per row) and
//! a multiple of 8 rows tall. They are drawn in passes of 8 rows.

use itertools::iproduct;

use crate::color::Color;
use crate::command::consts::{GLYPH8_BUF_LEN, GLYPH_BUF_LEN};

/// Rows expanded per glyph pass.
pub const PASS_ROWS: u16 = 8;

const BIT_MASKS: [u8; 8] = [0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01];

/// A read-only bitmap font table covering the code points `first..last`.
#[derive(Clone, Copy, Debug)]
pub struct Font {
    /// First code point in the table.
    pub first: u32,
    /// One past the last code point in the table.
    pub last: u32,
    /// Glyph cell width in pixels, 8 or 16.
    pub width: u16,
    /// Glyph cell height in pixels, a multiple of 8.
    pub height: u16,
    /// Glyph bitmaps, `bytes_per_glyph` bytes per code point starting at `first`.
    pub data: &'static [u8],
}

impl Font {
    pub const fn new(first: u32, last: u32, width: u16, height: u16, data: &'static [u8]) -> Self {
        Font {
            first,
            last,
            width,
            height,
            data,
        }
    }

    /// Whether glyphs of this size can be drawn.
    pub fn is_supported(&self) -> bool {
        (self.width == 8 || self.width == 16) && self.height > 0 && self.height % PASS_ROWS == 0
    }

    /// Bytes in one row of a glyph.
    pub fn bytes_per_row(&self) -> usize {
        usize::from(self.width / 8)
    }

    /// Bytes in one glyph.
    pub fn bytes_per_glyph(&self) -> usize {
        self.bytes_per_row() * usize::from(self.height)
    }

    /// Number of 8 row passes needed to draw one glyph.
    pub fn passes(&self) -> u16 {
        self.height / PASS_ROWS
    }

    /// Whether `ch` has a glyph in this table.
    pub fn contains(&self, ch: char) -> bool {
        let code = u32::from(ch);
        self.first <= code && code < self.last
    }

    /// The bitmap bytes of pass `pass` of the glyph for `ch`, or `None` if the table has no such
    /// glyph.
    pub fn pass_bitmap(&self, ch: char, pass: u16) -> Option<&'static [u8]> {
        if !self.contains(ch) || pass >= self.passes() {
            return None;
        }
        let index = (u32::from(ch) - self.first) as usize;
        let pass_len = self.bytes_per_row() * usize::from(PASS_ROWS);
        let start = index * self.bytes_per_glyph() + usize::from(pass) * pass_len;
        self.data.get(start..start + pass_len)
    }
}

/// Expand 1 bit per pixel `bitmap` into `out`, two bytes per pixel, `fg` where a bit is set and
/// `bg` where it is clear. Returns the number of bytes written, which is 16 per bitmap byte or
/// less if `out` is too short.
pub fn pack(bitmap: &[u8], fg: Color, bg: Color, out: &mut [u8]) -> usize {
    let fg = fg.to_bytes();
    let bg = bg.to_bytes();
    let mut written = 0;
    let bits = iproduct!(bitmap.iter(), BIT_MASKS.iter());
    for ((byte, mask), px) in bits.zip(out.chunks_exact_mut(2)) {
        px.copy_from_slice(if byte & mask != 0 { &fg } else { &bg });
        written += 2;
    }
    written
}

/// Expand one pass of an 8 pixel wide glyph: 8 rows of 1 byte into 128 bytes.
pub fn pack8(bitmap: &[u8], fg: Color, bg: Color, out: &mut [u8; GLYPH8_BUF_LEN]) {
    pack(&bitmap[..bitmap.len().min(8)], fg, bg, out);
}

/// Expand one pass of a 16 pixel wide glyph: 8 rows of 2 bytes into 256 bytes.
pub fn pack16(bitmap: &[u8], fg: Color, bg: Color, out: &mut [u8; GLYPH_BUF_LEN]) {
    pack(&bitmap[..bitmap.len().min(16)], fg, bg, out);
}
