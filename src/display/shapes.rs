//! Outline shapes. Everything here reduces to `pixel` and `fill_rect` writes.

use embedded_hal::delay::DelayNs;

use super::{Display, Error};
use crate::color::Color;
use crate::interface;
use crate::raster;

impl<DI, D> Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayNs,
{
    /// Set a pixel produced by the rasterizer. Points with a negative or oversized coordinate
    /// cannot be addressed and are dropped.
    fn plot(&mut self, x: i64, y: i64, color: Color) -> Result<(), Error<DI::Error>> {
        match (u16::try_from(x), u16::try_from(y)) {
            (Ok(x), Ok(y)) => self.pixel(x, y, color),
            _ => Ok(()),
        }
    }

    /// Draw a one pixel wide line between `(x0, y0)` and `(x1, y1)`, both ends included.
    pub fn line(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        raster::line(x0, y0, x1, y1, |x, y| self.plot(x, y, color))
    }

    /// Draw the outline of a circle of radius `r` centred on `(xc, yc)`.
    pub fn circle(
        &mut self,
        xc: i32,
        yc: i32,
        r: i32,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        raster::circle(xc, yc, r, |x, y| self.plot(x, y, color))
    }

    /// Draw the part of a circle outline between `alpha1` and `alpha2` degrees, measured
    /// counter-clockwise from the positive x axis as seen on the panel, with
    /// `-180 <= alpha1 < alpha2 <= 180`.
    pub fn arc(
        &mut self,
        xc: i32,
        yc: i32,
        r: i32,
        alpha1: f64,
        alpha2: f64,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        raster::arc(xc, yc, r, alpha1, alpha2, |x, y| self.plot(x, y, color))
    }

    /// Horizontal line of `len` pixels starting at `(x, y)` and running right.
    pub fn hline(
        &mut self,
        x: u16,
        y: u16,
        len: u16,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        self.fill_rect(x, y, len, 1, color)
    }

    /// Vertical line of `len` pixels starting at `(x, y)` and running down.
    pub fn vline(
        &mut self,
        x: u16,
        y: u16,
        len: u16,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        self.fill_rect(x, y, 1, len, color)
    }

    /// Outline of the `w` by `h` rectangle at `(x, y)`.
    pub fn rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.hline(x, y, w, color)?;
        self.vline(x, y, h, color)?;
        self.vline(x.saturating_add(w - 1), y, h, color)?;
        self.hline(x, y.saturating_add(h - 1), w, color)
    }

    /// Outline of the `w` by `h` rectangle at `(x, y)` with corners rounded to radius `r`. A
    /// radius larger than half the shorter side is reduced to fit; the outline always spans
    /// exactly `w` by `h` pixels.
    pub fn round_box(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        r: u16,
        color: Color,
    ) -> Result<(), Error<DI::Error>> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        let r = r.min(w.min(h) / 2);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        self.hline(x.saturating_add(r), y, w - 2 * r, color)?;
        self.vline(x, y.saturating_add(r), h - 2 * r, color)?;
        self.vline(right, y.saturating_add(r), h - 2 * r, color)?;
        self.hline(x.saturating_add(r), bottom, w - 2 * r, color)?;

        let (x, y, r) = (i32::from(x), i32::from(y), i32::from(r));
        let (right, bottom) = (i32::from(right), i32::from(bottom));
        self.arc(x + r, y + r, r, 90.0, 180.0, color)?;
        self.arc(right - r, y + r, r, 0.0, 90.0, color)?;
        self.arc(x + r, bottom - r, r, -180.0, -90.0, color)?;
        self.arc(right - r, bottom - r, r, -90.0, 0.0, color)
    }
}
