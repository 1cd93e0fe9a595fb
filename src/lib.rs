//! Driver library for the Sitronix ST7789 TFT LCD controller driving a 170x320 IPS panel over
//! 4-wire SPI.
//!
//! The controller is reached through a [`DisplayInterface`]; [`SpiInterface`] implements it on
//! top of an `embedded-hal` SPI bus and four output pins. [`Display`] owns the interface and
//! offers orientation changes, window-addressed writes, outline shapes and bitmap text.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod color;
pub mod command;
pub mod config;
pub mod display;
pub mod glyph;
pub mod interface;
pub mod raster;

// Re-exports for primary API.
pub use color::Color;
pub use command::consts;
pub use config::Config;
pub use display::frame::{FrameWindow, Mode};
pub use display::{Display, Error};
pub use glyph::Font;
pub use interface::spi::{SpiInterface, TransportError};
pub use interface::DisplayInterface;
