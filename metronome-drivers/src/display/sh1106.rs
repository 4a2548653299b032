//! SH1106 OLED display driver
//!
//! Driver for 128x64 SH1106-based OLED displays via I2C. Drawing goes to
//! a local page-organised frame buffer through `embedded-graphics`;
//! [`Sh1106::flush`] pushes it to the panel.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal_async::i2c::I2c;

use super::DisplayError;

/// SH1106 I2C address (typically 0x3C or 0x3D)
const SH1106_ADDR: u8 = 0x3C;

/// Display dimensions
pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// The 132-column SH1106 RAM is centred on a 128-pixel panel
const COLUMN_OFFSET: u8 = 2;

/// SH1106 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Sh1106<I2C> {
    /// Create a new SH1106 driver with a blank frame buffer
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Blank the frame buffer
    pub fn clear_buffer(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Check if a pixel is lit in the frame buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buffer[y / 8][x] & (1 << (y % 8)) != 0
    }

    fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let byte = &mut self.buffer[y / 8][x];
        let mask = 1 << (y % 8);
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }
}

impl<I2C: I2c> Sh1106<I2C> {
    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,                  // Enable charge pump
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(SH1106_ADDR, &[0x00, cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Flush the frame buffer to the display
    pub async fn flush(&mut self) -> Result<(), DisplayError> {
        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN | (COLUMN_OFFSET & 0x0F)).await?;
            self.command(cmd::SET_HIGH_COLUMN | (COLUMN_OFFSET >> 4)).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c
                .write(SH1106_ADDR, &data)
                .await
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }
}

impl<I2C> OriginDimensions for Sh1106<I2C> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl<I2C> DrawTarget for Sh1106<I2C> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Clipped silently, including negative coordinates
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn test_fill_rectangle() {
        let mut display = Sh1106::new(());
        Rectangle::new(Point::new(10, 6), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        assert!(display.pixel(10, 6));
        assert!(display.pixel(13, 9));
        assert!(!display.pixel(14, 9));
        assert!(!display.pixel(10, 10));
        // Rows 6..10 straddle pages 0 and 1
        assert_eq!(display.buffer[0][10], 0b1100_0000);
        assert_eq!(display.buffer[1][10], 0b0000_0011);
    }

    #[test]
    fn test_clipping() {
        let mut display = Sh1106::new(());
        Rectangle::new(Point::new(-4, 60), Size::new(8, 8))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();

        assert!(display.pixel(0, 63));
        assert!(display.pixel(3, 60));
        assert!(!display.pixel(4, 60));
    }

    #[test]
    fn test_clear() {
        let mut display = Sh1106::new(());
        display.clear(BinaryColor::On).unwrap();
        assert!(display.pixel(127, 63));

        display.clear_buffer();
        assert!(!display.pixel(127, 63));
        assert_eq!(display.size(), Size::new(128, 64));
    }
}
