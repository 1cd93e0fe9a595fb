//! Settings applied once when the panel is brought up.

use crate::color::Color;

/// A configuration for the panel. Builder methods override the defaults, which suit the common
/// 1.9" 170x320 IPS module: inversion on, backlight on, cleared to black.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) mode: u8,
    pub(crate) inversion: bool,
    pub(crate) backlight: bool,
    pub(crate) clear_color: Color,
}

impl Config {
    /// Create a new configuration starting in orientation `mode` (0-3 landscape, 4-7 portrait).
    /// The mode is validated when the display is initialized.
    pub fn new(mode: u8) -> Self {
        Config {
            mode,
            inversion: true,
            backlight: true,
            clear_color: Color::BLACK,
        }
    }

    /// Choose between `InversionOn` and `InversionOff` during initialization. IPS panels show
    /// inverted colors unless inversion is on.
    ///
    /// The default is on. Bring-up sequences for this panel are often written down with
    /// inversion off, but the sequence that gives correct colors on the IPS module sends
    /// `InversionOn`. Pass `false` to send `InversionOff` instead.
    pub fn inversion(self, inversion: bool) -> Self {
        Self { inversion, ..self }
    }

    /// Whether the backlight is switched on before initialization.
    pub fn backlight(self, backlight: bool) -> Self {
        Self { backlight, ..self }
    }

    /// The color the frame is cleared to at the end of initialization.
    pub fn clear_color(self, clear_color: Color) -> Self {
        Self {
            clear_color,
            ..self
        }
    }
}

impl Default for Config {
    /// Portrait mode 4.
    fn default() -> Self {
        Config::new(4)
    }
}
