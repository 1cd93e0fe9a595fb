//! Full example code for driving a 1.9" 170x320 ST7789 IPS module from an ESP32-S3.
//!
//! Wiring: SPI2 with SCK on GPIO4 and MOSI on GPIO3 at 40 MHz, C/S on GPIO0, D/C on GPIO1,
//! /RESET on GPIO2 and the backlight enable on GPIO5.
//!
//! Cycles through solid colors, outlines, circles, rounded boxes, text and an RGB565 image in
//! each orientation.

#![no_std]
#![no_main]

esp_bootloader_esp_idf::esp_app_desc!();

use esp_backtrace as _;
use esp_hal::{
    delay::Delay,
    gpio::{Level, Output, OutputConfig},
    main,
    spi::master::{Config as SpiConfig, Spi},
    spi::Mode,
    time::Rate,
};
use log::info;

use embedded_hal::delay::DelayNs;
use st7789::{Color, Config, Display, Font, SpiInterface};

/// Digits 0-9 of an 8x8 font, one byte per row.
#[rustfmt::skip]
static DIGITS_8X8: [u8; 80] = [
    0x3C, 0x66, 0x6E, 0x76, 0x66, 0x66, 0x3C, 0x00,
    0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00,
    0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00,
    0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00,
    0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00,
    0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00,
    0x3C, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x3C, 0x00,
    0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00,
    0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00,
    0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00,
];
static DIGITS: Font = Font::new('0' as u32, ':' as u32, 8, 8, &DIGITS_8X8);

/// Room for one full-frame headerless RGB565 image.
static mut IMAGE: [u8; 170 * 320 * 2] = [0; 170 * 320 * 2];

/// Fill `buf` as a `w` by `h` image with a red/blue gradient, the way a `.raw` file exported
/// from an image editor would lay it out: rows top to bottom, two bytes per pixel, big endian.
fn gradient(buf: &mut [u8], w: usize, h: usize) {
    for (i, px) in buf.chunks_exact_mut(2).take(w * h).enumerate() {
        let (x, y) = (i % w, i / w);
        let c = Color::rgb((x * 255 / w) as u8, 0, (y * 255 / h) as u8);
        px.copy_from_slice(&c.to_bytes());
    }
}

#[main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let p = esp_hal::init(esp_hal::Config::default());
    let mut delay = Delay::new();

    let spi_cfg = SpiConfig::default()
        .with_frequency(Rate::from_hz(40_000_000))
        .with_mode(Mode::_0);
    let spi = Spi::new(p.SPI2, spi_cfg)
        .unwrap()
        .with_sck(p.GPIO4)
        .with_mosi(p.GPIO3);

    let cs = Output::new(p.GPIO0, Level::High, OutputConfig::default());
    let dc = Output::new(p.GPIO1, Level::Low, OutputConfig::default());
    let rst = Output::new(p.GPIO2, Level::High, OutputConfig::default());
    let bl = Output::new(p.GPIO5, Level::Low, OutputConfig::default());

    let iface = SpiInterface::new(spi, cs, dc, rst, bl);
    let mut disp = Display::new(iface, Delay::new());
    disp.init(Config::new(2)).unwrap();
    info!("panel up, {}x{}", disp.width(), disp.height());

    #[allow(static_mut_refs)]
    let image = unsafe { &mut IMAGE };

    loop {
        for &c in [
            Color::RED,
            Color::GREEN,
            Color::CYAN,
            Color::MAGENTA,
            Color::YELLOW,
            Color::ORANGE,
            Color::WHITE,
            Color::BLUE,
            Color::BLACK,
        ]
        .iter()
        {
            disp.clear(c).unwrap();
            delay.delay_ms(1000);
        }

        for mode in [2u8, 4].iter().cloned() {
            disp.set_mode(mode).unwrap();
            let (w, h) = (disp.width(), disp.height());

            disp.clear(Color::BLACK).unwrap();
            disp.rect(20, 20, w - 40, h - 40, Color::WHITE).unwrap();
            disp.rect(40, 40, w - 80, h - 80, Color::YELLOW).unwrap();
            disp.fill_rect(60, 60, 10, h - 120, Color::RED).unwrap();
            delay.delay_ms(2000);

            disp.clear(Color::BLUE).unwrap();
            let (xc, yc) = (i32::from(w / 2), i32::from(h / 2));
            for r in [2, 10, 20, 30, 40].iter().cloned() {
                disp.circle(xc, yc, r, Color::YELLOW).unwrap();
                delay.delay_ms(500);
            }
            disp.arc(xc, yc, 60, 0.0, 90.0, Color::GREEN).unwrap();
            disp.arc(xc, yc, 60, -180.0, -90.0, Color::RED).unwrap();
            delay.delay_ms(2000);

            disp.clear(Color::BLACK).unwrap();
            disp.round_box(10, 10, w - 20, h - 20, 15, Color::CYAN).unwrap();
            disp.line(10, 10, i32::from(w) - 11, i32::from(h) - 11, Color::MAGENTA)
                .unwrap();
            let mut x = 30;
            for n in 0..10u8 {
                let s = [b'0' + n];
                let s = core::str::from_utf8(&s).unwrap_or("0");
                x = disp.text(&DIGITS, s, x, 30, Color::WHITE, Color::BLACK).unwrap();
            }
            delay.delay_ms(3000);

            let (w, h) = (usize::from(w), usize::from(h));
            gradient(image, w, h);
            disp.blit(&image[..w * h * 2], 0, 0, w as u16, h as u16)
                .unwrap();
            delay.delay_ms(4000);
        }
    }
}
