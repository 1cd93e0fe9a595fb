//! The main API to the display driver. `Display` owns the interface, the orientation state and
//! the transfer buffers, and offers window-addressed writes on which the shape and text drawing
//! in the submodules are built.

// This has to be here in order to be usable by mods declared afterwards.
#[cfg(test)]
#[macro_use]
pub mod testing {
    macro_rules! send {
        ((bl $on:expr)) => {$crate::interface::test_spy::Sent::Backlight($on)};
        ((rst $asserted:expr)) => {$crate::interface::test_spy::Sent::Reset($asserted)};
        ([$($d:expr),*]) => {$crate::interface::test_spy::Sent::Data(vec![$($d,)*])};
        ($c:expr) => {$crate::interface::test_spy::Sent::Cmd($c)};
    }
    macro_rules! sends {
        ($($e:tt),*) => {&[$(send!($e),)*]};
    }
}

pub mod frame;
mod shapes;
mod text;

use core::fmt;

use embedded_hal::delay::DelayNs;
use log::{debug, trace, warn};

use crate::color::Color;
use crate::command::consts::*;
use crate::command::{BufCommand, Command};
use crate::config::Config;
use crate::display::frame::{FrameWindow, Mode};
use crate::interface;

/// Errors raised by the display driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<IE> {
    /// The interface failed. The panel contents are undefined after a failed write.
    Interface(IE),
    /// An orientation mode outside 0-7 was requested.
    InvalidMode(u8),
    /// A pixel buffer did not hold exactly 2 bytes per pixel of its rectangle.
    BufferSizeMismatch { expected: usize, actual: usize },
}

impl<IE> From<IE> for Error<IE> {
    fn from(e: IE) -> Self {
        Error::Interface(e)
    }
}

impl<IE: fmt::Display> fmt::Display for Error<IE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Interface(e) => write!(f, "display interface error: {}", e),
            Error::InvalidMode(m) => write!(f, "invalid display mode {}, expected 0-7", m),
            Error::BufferSizeMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {} bytes, rectangle needs {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl<IE: fmt::Debug + fmt::Display> std::error::Error for Error<IE> {}

/// A driver for an ST7789 driving a 170x320 panel.
pub struct Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayNs,
{
    iface: DI,
    delay: D,
    mode: Mode,
    frame: FrameWindow,
    /// Solid fill staging, refilled with the fill color on every `fill_rect`.
    buf: [u8; TRANSFER_BUF_LEN],
    /// One expanded pass of an 8 pixel wide glyph.
    glyph8: [u8; GLYPH8_BUF_LEN],
    /// One expanded pass of a 16 pixel wide glyph.
    glyph16: [u8; GLYPH_BUF_LEN],
}

impl<DI, D> Display<DI, D>
where
    DI: interface::DisplayInterface,
    D: DelayNs,
{
    /// Construct a new display driver on the interface `iface`, using `delay` for the timing the
    /// controller needs. Nothing is sent until `init`.
    pub fn new(iface: DI, delay: D) -> Self {
        let mode = Mode::default();
        Display {
            iface,
            delay,
            mode,
            frame: FrameWindow::for_mode(mode),
            buf: [0; TRANSFER_BUF_LEN],
            glyph8: [0; GLYPH8_BUF_LEN],
            glyph16: [0; GLYPH_BUF_LEN],
        }
    }

    /// Reset and bring up the controller in the configured orientation, switch the display on and
    /// clear the frame. An invalid mode is rejected before anything is sent. Any interface error
    /// aborts the sequence and leaves the panel in an unknown state.
    pub fn init(&mut self, config: Config) -> Result<(), Error<DI::Error>> {
        let mode = Mode::new(config.mode).ok_or(Error::InvalidMode(config.mode))?;
        debug!("st7789: init, mode {}", mode.value());

        self.backlight(config.backlight)?;
        self.hardware_reset()?;

        Command::SoftwareReset.send(&mut self.iface)?;
        self.delay.delay_ms(SOFTWARE_RESET_MS);
        Command::SleepOut.send(&mut self.iface)?;
        self.delay.delay_ms(SLEEP_OUT_MS);
        Command::PixelFormat(COLMOD_RGB565).send(&mut self.iface)?;
        self.invert(config.inversion)?;
        Command::NormalDisplayOn.send(&mut self.iface)?;

        self.mode = mode;
        self.frame = FrameWindow::for_mode(mode);
        self.program_frame()?;

        Command::DisplayOn.send(&mut self.iface)?;
        self.clear(config.clear_color)
    }

    /// Pulse the reset line high, low, high with `consts::RESET_EDGE_MS` after each edge.
    fn hardware_reset(&mut self) -> Result<(), Error<DI::Error>> {
        for &asserted in [false, true, false].iter() {
            self.iface.set_reset(asserted)?;
            self.delay.delay_ms(RESET_EDGE_MS);
        }
        Ok(())
    }

    /// Set the address window to the whole frame and send the orientation. The end addresses are
    /// one past the frame, which the controller tolerates.
    fn program_frame(&mut self) -> Result<(), Error<DI::Error>> {
        let f = self.frame;
        Command::ColumnAddressSet(f.x_start, f.x_start + f.width).send(&mut self.iface)?;
        Command::RowAddressSet(f.y_start, f.y_start + f.height).send(&mut self.iface)?;
        Command::MemoryAccessControl(self.mode.madctl()).send(&mut self.iface)?;
        Ok(())
    }

    /// Switch orientation. Modes 0-3 are landscape and 4-7 portrait. An out of range mode is
    /// logged and ignored, leaving the current orientation in place.
    pub fn set_mode(&mut self, mode: u8) -> Result<(), Error<DI::Error>> {
        let mode = match Mode::new(mode) {
            Some(m) => m,
            None => {
                warn!("st7789: {} is not a valid mode, keeping {}", mode, self.mode.value());
                return Ok(());
            }
        };
        debug!("st7789: mode {}", mode.value());
        self.mode = mode;
        self.frame = FrameWindow::for_mode(mode);
        self.program_frame()
    }

    /// The current orientation mode.
    pub fn mode(&self) -> u8 {
        self.mode.value()
    }

    /// The frame window of the current orientation.
    pub fn frame(&self) -> FrameWindow {
        self.frame
    }

    /// Frame width in pixels for the current orientation.
    pub fn width(&self) -> u16 {
        self.frame.width
    }

    /// Frame height in pixels for the current orientation.
    pub fn height(&self) -> u16 {
        self.frame.height
    }

    /// Set the inclusive window `(x0, y0)`-`(x1, y1)`, in frame coordinates, that the next memory
    /// write fills. Coordinates are not checked against the frame.
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<DI::Error>> {
        trace!("st7789: window ({}, {})-({}, {})", x0, y0, x1, y1);
        let f = self.frame;
        Command::ColumnAddressSet(f.column(x0), f.column(x1)).send(&mut self.iface)?;
        Command::RowAddressSet(f.row(y0), f.row(y1)).send(&mut self.iface)?;
        Ok(())
    }

    /// Copy RGB565 pixel data, row by row, into the `w` by `h` rectangle at `(x, y)`. `buffer`
    /// must hold exactly `w * h * 2` bytes.
    pub fn blit(
        &mut self,
        buffer: &[u8],
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) -> Result<(), Error<DI::Error>> {
        let expected = usize::from(w) * usize::from(h) * 2;
        if buffer.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }
        if expected == 0 {
            return Ok(());
        }
        self.set_window(x, y, x.saturating_add(w - 1), y.saturating_add(h - 1))?;
        BufCommand::MemoryWrite(buffer).send(&mut self.iface)?;
        Ok(())
    }

    /// Fill the `w` by `h` rectangle at `(x, y)` with `color`.
    pub fn fill_rect(
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
        self.set_window(x, y, x.saturating_add(w - 1), y.saturating_add(h - 1))?;
        Command::MemoryWrite.send(&mut self.iface)?;

        // Stream the color from the fixed buffer: whole buffers, then the remainder.
        let total = usize::from(w) * usize::from(h) * 2;
        let (chunks, rest) = (total / TRANSFER_BUF_LEN, total % TRANSFER_BUF_LEN);
        let bytes = color.to_bytes();
        for px in self.buf.chunks_exact_mut(2) {
            px.copy_from_slice(&bytes);
        }
        for _ in 0..chunks {
            self.iface.send_data(&self.buf)?;
        }
        if rest > 0 {
            self.iface.send_data(&self.buf[..rest])?;
        }
        Ok(())
    }

    /// Set one pixel.
    pub fn pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Error<DI::Error>> {
        self.set_window(x, y, x, y)?;
        BufCommand::MemoryWrite(&color.to_bytes()).send(&mut self.iface)?;
        Ok(())
    }

    /// Fill the whole frame with `color`.
    pub fn clear(&mut self, color: Color) -> Result<(), Error<DI::Error>> {
        let f = self.frame;
        self.fill_rect(0, 0, f.width, f.height, color)
    }

    /// Switch the backlight on or off.
    pub fn backlight(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        self.iface.set_backlight(on)?;
        Ok(())
    }

    /// Control sleep mode. Leaving sleep waits `consts::SLEEP_OUT_MS` before returning.
    pub fn sleep(&mut self, enabled: bool) -> Result<(), Error<DI::Error>> {
        if enabled {
            Command::SleepIn.send(&mut self.iface)?;
        } else {
            Command::SleepOut.send(&mut self.iface)?;
            self.delay.delay_ms(SLEEP_OUT_MS);
        }
        Ok(())
    }

    /// Show or blank the frame memory.
    pub fn display_on(&mut self, on: bool) -> Result<(), Error<DI::Error>> {
        let cmd = if on {
            Command::DisplayOn
        } else {
            Command::DisplayOff
        };
        cmd.send(&mut self.iface)?;
        Ok(())
    }

    /// Control color inversion.
    pub fn invert(&mut self, inverted: bool) -> Result<(), Error<DI::Error>> {
        let cmd = if inverted {
            Command::InversionOn
        } else {
            Command::InversionOff
        };
        cmd.send(&mut self.iface)?;
        Ok(())
    }

    /// Define the vertical scrolling area as `top` fixed lines, `scroll` scrolling lines and
    /// `bottom` fixed lines, in controller rows. The three should add up to 320.
    pub fn vertical_scroll_area(
        &mut self,
        top: u16,
        scroll: u16,
        bottom: u16,
    ) -> Result<(), Error<DI::Error>> {
        Command::VerticalScrollDefine(top, scroll, bottom).send(&mut self.iface)?;
        Ok(())
    }

    /// Show frame memory line `line` at the top of the scrolling area.
    pub fn vertical_scroll(&mut self, line: u16) -> Result<(), Error<DI::Error>> {
        Command::VerticalScrollAddress(line).send(&mut self.iface)?;
        Ok(())
    }

    /// Give back the interface and delay.
    pub fn release(self) -> (DI, D) {
        (self.iface, self.delay)
    }
}
