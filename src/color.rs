//! RGB565 colors as the controller receives them.

/// A 16 bit RGB565 color (5 bits red, 6 bits green, 5 bits blue), held as the two bytes sent on
/// the wire, most significant byte first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color([u8; 2]);

impl Color {
    pub const BLACK: Color = Color([0x00, 0x00]);
    pub const BLUE: Color = Color([0x00, 0x08]);
    pub const RED: Color = Color([0xF8, 0x00]);
    pub const GREEN: Color = Color([0x07, 0xE0]);
    pub const CYAN: Color = Color([0x07, 0xFF]);
    pub const MAGENTA: Color = Color([0xF8, 0x1F]);
    pub const YELLOW: Color = Color([0xFF, 0xE0]);
    pub const ORANGE: Color = Color([0xFC, 0x00]);
    pub const WHITE: Color = Color([0xFF, 0xFF]);

    /// Pack 8 bit channels into RGB565 by dropping the low bits of each.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        let word = ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3);
        Color(word.to_be_bytes())
    }

    /// A color from its wire-order byte pair.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Color(bytes)
    }

    /// A color from its 16 bit RGB565 value.
    pub const fn from_u16(word: u16) -> Self {
        Color(word.to_be_bytes())
    }

    pub const fn to_bytes(self) -> [u8; 2] {
        self.0
    }

    pub const fn to_u16(self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

impl From<u16> for Color {
    fn from(word: u16) -> Self {
        Color::from_u16(word)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.to_u16()
    }
}
