/// The transport the driver talks to the controller through. Commands are sent with the D/C line
/// low and data with it high; each call is one transfer bracketed by chip-select.
pub trait DisplayInterface {
    type Error;

    /// Send a single command byte.
    fn send_command(&mut self, cmd: u8) -> Result<(), Self::Error>;

    /// Send a run of data bytes. Consecutive calls after `MemoryWrite` continue filling the
    /// current window.
    fn send_data(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Send a command byte followed by its argument bytes.
    fn send_command_with_data(&mut self, cmd: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.send_command(cmd)?;
        self.send_data(data)
    }

    /// Drive the active-low reset line. `true` asserts reset (line low).
    fn set_reset(&mut self, asserted: bool) -> Result<(), Self::Error>;

    /// Switch the panel backlight.
    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error>;
}

pub mod spi {
    //! The 4-wire SPI interface: 8-bit words on the bus, a D/C GPIO selecting command or data, and
    //! a chip-select GPIO driven by the driver so every transfer is individually framed. Reset and
    //! backlight are plain GPIO outputs.

    use core::fmt;

    use embedded_hal::digital::{self, OutputPin};
    use embedded_hal::spi::{self, SpiBus};

    use super::DisplayInterface;

    /// Failure of the underlying bus or one of the control lines.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum TransportError {
        Spi(spi::ErrorKind),
        Pin(digital::ErrorKind),
    }

    impl fmt::Display for TransportError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                TransportError::Spi(kind) => write!(f, "SPI transfer failed: {}", kind),
                TransportError::Pin(kind) => write!(f, "control line failed: {}", kind),
            }
        }
    }

    #[cfg(feature = "std")]
    impl std::error::Error for TransportError {}

    fn pin_err<E: digital::Error>(e: E) -> TransportError {
        TransportError::Pin(e.kind())
    }

    fn spi_err<E: spi::Error>(e: E) -> TransportError {
        TransportError::Spi(e.kind())
    }

    pub struct SpiInterface<SPI, CS, DC, RST, BL> {
        /// The SPI bus connected to the ST7789. Chip-select is not managed by the bus.
        spi: SPI,
        /// Active-low chip-select output.
        cs: CS,
        /// D/C (data/command) output, low for command bytes.
        dc: DC,
        /// Active-low reset output.
        rst: RST,
        /// Backlight enable output, high for on.
        bl: BL,
    }

    impl<SPI, CS, DC, RST, BL> SpiInterface<SPI, CS, DC, RST, BL>
    where
        SPI: SpiBus<u8>,
        CS: OutputPin,
        DC: OutputPin,
        RST: OutputPin,
        BL: OutputPin,
    {
        /// Create a new SPI interface from the bus and the four control lines.
        pub fn new(spi: SPI, cs: CS, dc: DC, rst: RST, bl: BL) -> Self {
            Self {
                spi,
                cs,
                dc,
                rst,
                bl,
            }
        }

        /// Give back the bus and pins.
        pub fn release(self) -> (SPI, CS, DC, RST, BL) {
            (self.spi, self.cs, self.dc, self.rst, self.bl)
        }

        fn transfer(&mut self, data: bool, buf: &[u8]) -> Result<(), TransportError> {
            if data {
                self.dc.set_high().map_err(pin_err)?;
            } else {
                self.dc.set_low().map_err(pin_err)?;
            }
            self.cs.set_low().map_err(pin_err)?;
            // Chip-select is released even when the bus fails so the next transfer starts framed.
            let written = self
                .spi
                .write(buf)
                .and_then(|_| self.spi.flush())
                .map_err(spi_err);
            self.cs.set_high().map_err(pin_err)?;
            written
        }
    }

    impl<SPI, CS, DC, RST, BL> DisplayInterface for SpiInterface<SPI, CS, DC, RST, BL>
    where
        SPI: SpiBus<u8>,
        CS: OutputPin,
        DC: OutputPin,
        RST: OutputPin,
        BL: OutputPin,
    {
        type Error = TransportError;

        fn send_command(&mut self, cmd: u8) -> Result<(), TransportError> {
            self.transfer(false, &[cmd])
        }

        fn send_data(&mut self, buf: &[u8]) -> Result<(), TransportError> {
            self.transfer(true, buf)
        }

        fn set_reset(&mut self, asserted: bool) -> Result<(), TransportError> {
            if asserted {
                self.rst.set_low().map_err(pin_err)
            } else {
                self.rst.set_high().map_err(pin_err)
            }
        }

        fn set_backlight(&mut self, on: bool) -> Result<(), TransportError> {
            if on {
                self.bl.set_high().map_err(pin_err)
            } else {
                self.bl.set_low().map_err(pin_err)
            }
        }
    }

}
