//! The command subset of the ST7789 used to drive a 170x320 IPS panel.
//!
//! Note 1: The ST7789 display RAM is 240x320. A 170 pixel wide panel is mounted so that its first
//! column sits 35 pixels into controller memory, which is why every window address sent to the
//! controller carries a frame origin offset (see `display::frame`).

use crate::interface::DisplayInterface;

pub mod consts {
    //! Panel geometry, timing and orientation constants.

    /// Width in pixels of the panel's short side.
    pub const PANEL_SHORT_SIDE: u16 = 170;
    /// Length in pixels of the panel's long side.
    pub const PANEL_LONG_SIDE: u16 = 320;
    /// Offset of the panel's short side into controller memory. (Note 1)
    pub const PANEL_OFFSET: u16 = 35;

    /// Capacity of the reusable transfer buffer used to stream solid fills.
    pub const TRANSFER_BUF_LEN: usize = 256;
    /// Capacity of the glyph expansion buffer: one 16x8 pass at 2 bytes per pixel.
    pub const GLYPH_BUF_LEN: usize = 256;
    /// Capacity of the glyph expansion buffer for 8 pixel wide cells: one 8x8 pass.
    pub const GLYPH8_BUF_LEN: usize = 128;

    /// Delay between transitions of the hardware reset line.
    pub const RESET_EDGE_MS: u32 = 1;
    /// Delay after software reset before the controller accepts `SleepOut`. The datasheet asks
    /// for 120ms.
    pub const SOFTWARE_RESET_MS: u32 = 150;
    /// Delay after `SleepOut` before the next command. The datasheet asks for 5ms.
    pub const SLEEP_OUT_MS: u32 = 10;

    /// Number of orientation modes.
    pub const NUM_MODES: u8 = 8;
    /// Memory access control (MADCTL) value for each orientation mode. Modes 0-3 are landscape,
    /// 4-7 are portrait.
    pub const MODE_MADCTL: [u8; NUM_MODES as usize] = [
        0x00, 0x40, 0xC0, 0x80, // landscape
        0x60, 0xE0, 0xA0, 0x20, // portrait
    ];

    /// Interface pixel format value for 16 bits per pixel, 65K colors.
    pub const COLMOD_RGB565: u8 = 0x55;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Reset the controller registers to their default values. The controller needs
    /// `consts::SOFTWARE_RESET_MS` before it will accept `SleepOut`.
    SoftwareReset,
    /// Enter sleep mode: DC/DC converter, oscillator and panel scanning are stopped.
    SleepIn,
    /// Leave sleep mode.
    SleepOut,
    /// Leave partial mode and display the whole frame memory.
    NormalDisplayOn,
    /// Disable color inversion.
    InversionOff,
    /// Enable color inversion. IPS panels need this to show colors the right way round.
    InversionOn,
    /// Blank the panel. Frame memory is kept.
    DisplayOff,
    /// Show frame memory on the panel.
    DisplayOn,
    /// Set the inclusive column address range for subsequent memory writes.
    ColumnAddressSet(u16, u16),
    /// Set the inclusive row address range for subsequent memory writes.
    RowAddressSet(u16, u16),
    /// Start a memory write into the current column/row window. Pixel data follows as data bytes.
    MemoryWrite,
    /// Define the vertical scrolling area as top fixed lines, scrolling lines and bottom fixed
    /// lines. The three values must add up to 320.
    VerticalScrollDefine(u16, u16, u16),
    /// Set the memory access control register, which selects scan direction and row/column
    /// exchange. See `consts::MODE_MADCTL`.
    MemoryAccessControl(u8),
    /// Set the frame memory line shown at the top of the vertical scrolling area.
    VerticalScrollAddress(u16),
    /// Set the interface pixel format. See `consts::COLMOD_RGB565`.
    PixelFormat(u8),
}

pub enum BufCommand<'buf> {
    /// Write pixel data into the current window, 2 bytes per pixel in RGB565 wire order.
    MemoryWrite(&'buf [u8]),
}

/// Encode each argument big-endian into `$buf`, back to back, and pair the filled prefix with
/// the opcode. `u8` arguments take one byte, `u16` arguments two.
macro_rules! ok_command {
    ($buf:ident, $cmd:expr,[$($arg:expr),*]) => {{
        #[allow(unused_mut)]
        let mut len = 0;
        $(
            let bytes = $arg.to_be_bytes();
            $buf[len..len + bytes.len()].copy_from_slice(&bytes);
            len += bytes.len();
        )*
        ($cmd, &$buf[..len])
    }};
}

impl Command {
    /// The opcode byte sent with the D/C line low.
    pub fn opcode(&self) -> u8 {
        match self {
            Command::SoftwareReset => 0x01,
            Command::SleepIn => 0x10,
            Command::SleepOut => 0x11,
            Command::NormalDisplayOn => 0x13,
            Command::InversionOff => 0x20,
            Command::InversionOn => 0x21,
            Command::DisplayOff => 0x28,
            Command::DisplayOn => 0x29,
            Command::ColumnAddressSet(..) => 0x2A,
            Command::RowAddressSet(..) => 0x2B,
            Command::MemoryWrite => 0x2C,
            Command::VerticalScrollDefine(..) => 0x33,
            Command::MemoryAccessControl(_) => 0x36,
            Command::VerticalScrollAddress(_) => 0x37,
            Command::PixelFormat(_) => 0x3A,
        }
    }

    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        // 16-bit arguments go out big-endian.
        let mut arg_buf = [0u8; 6];
        let op = self.opcode();
        let (cmd, data) = match self {
            Command::ColumnAddressSet(start, end) | Command::RowAddressSet(start, end) => {
                ok_command!(arg_buf, op, [start, end])
            }
            Command::VerticalScrollDefine(top, scroll, bottom) => {
                ok_command!(arg_buf, op, [top, scroll, bottom])
            }
            Command::VerticalScrollAddress(line) => ok_command!(arg_buf, op, [line]),
            Command::MemoryAccessControl(value) | Command::PixelFormat(value) => {
                ok_command!(arg_buf, op, [value])
            }
            _ => ok_command!(arg_buf, op, []),
        };
        if data.is_empty() {
            iface.send_command(cmd)
        } else {
            iface.send_command_with_data(cmd, data)
        }
    }
}

impl<'a> BufCommand<'a> {
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DI::Error>
    where
        DI: DisplayInterface,
    {
        let (cmd, data) = match self {
            BufCommand::MemoryWrite(buf) => (Command::MemoryWrite.opcode(), buf),
        };
        iface.send_command(cmd)?;
        if data.is_empty() {
            Ok(())
        } else {
            iface.send_data(data)
        }
    }
}
