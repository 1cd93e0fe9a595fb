//! Bitmap text.

use embedded_hal::delay::DelayNs;
use log::{trace, warn};

use super::{Display, Error};
use crate::color::Color;
use crate::command::BufCommand;
use crate::glyph::{self, Font, PASS_ROWS};
use crate::interface;

impl<DI, D> Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayNs,
{
    /// Draw `s` in `font` with its top left corner at `(x, y)`, `fg` on `bg`, and return the
    /// column after the last character.
    ///
    /// The cursor moves right by the cell width for every character, including ones that are
    /// not drawn because the font has no glyph for them or the cell would cross the frame edge.
    /// Fonts other than 8 or 16 pixels wide by a multiple of 8 tall draw nothing.
    pub fn text(
        &mut self,
        font: &Font,
        s: &str,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
    ) -> Result<u16, Error<DI::Error>> {
        if !font.is_supported() {
            warn!(
                "st7789: {}x{} glyphs are not supported",
                font.width, font.height
            );
            return Ok(x);
        }
        let fits_rows = u32::from(y) + u32::from(font.height) <= u32::from(self.frame.height);
        let mut cursor = x;
        for ch in s.chars() {
            let fits_cols =
                u32::from(cursor) + u32::from(font.width) <= u32::from(self.frame.width);
            if fits_rows && fits_cols && font.contains(ch) {
                self.draw_glyph(font, ch, cursor, y, fg, bg)?;
            }
            cursor = cursor.saturating_add(font.width);
        }
        Ok(cursor)
    }

    /// Draw one glyph cell in 8 row passes. The cell must fit in the frame.
    fn draw_glyph(
        &mut self,
        font: &Font,
        ch: char,
        x: u16,
        y: u16,
        fg: Color,
        bg: Color,
    ) -> Result<(), Error<DI::Error>> {
        // A table too short for the last pass is missing the whole glyph.
        if font.pass_bitmap(ch, font.passes() - 1).is_none() {
            trace!("st7789: no glyph for {:?}", ch);
            return Ok(());
        }
        for pass in 0..font.passes() {
            let bitmap = match font.pass_bitmap(ch, pass) {
                Some(bitmap) => bitmap,
                None => return Ok(()),
            };
            let top = y + pass * PASS_ROWS;
            self.set_window(x, top, x + font.width - 1, top + PASS_ROWS - 1)?;
            if font.width == 8 {
                glyph::pack8(bitmap, fg, bg, &mut self.glyph8);
                BufCommand::MemoryWrite(&self.glyph8).send(&mut self.iface)?;
            } else {
                glyph::pack16(bitmap, fg, bg, &mut self.glyph16);
                BufCommand::MemoryWrite(&self.glyph16).send(&mut self.iface)?;
            }
        }
        Ok(())
    }
}
