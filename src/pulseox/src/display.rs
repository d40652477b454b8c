use std::fmt;

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use ssd1306::{I2CDisplayInterface, Ssd1306, mode::BufferedGraphicsMode, prelude::*};

use crate::DisplayError;

/// Buffered text output: draw calls land in a frame that `present` pushes
/// to the device.
pub trait TextDisplay {
    fn clear(&mut self) -> Result<(), DisplayError>;
    /// `x`/`y` are the top-left corner of the text in pixels.
    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError>;
    fn present(&mut self) -> Result<(), DisplayError>;

    fn power_off(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

/// No panel attached; readings only go to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Headless;

impl TextDisplay for Headless {
    fn clear(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str) -> Result<(), DisplayError> {
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

type Oled<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// 128x64 SSD1306 OLED over I2C.
pub struct OledDisplay<I2C> {
    display: Oled<I2C>,
    style: MonoTextStyle<'static, BinaryColor>,
}

impl<I2C: I2c> OledDisplay<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(interface_error)?;
        display.clear_buffer();
        display.flush().map_err(interface_error)?;
        info!("SSD1306 ready at 0x{address:02X}");

        Ok(Self {
            display,
            style: MonoTextStyle::new(&FONT_6X10, BinaryColor::On),
        })
    }
}

impl<I2C: I2c> TextDisplay for OledDisplay<I2C> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.display.clear_buffer();
        Ok(())
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        Text::with_baseline(text, Point::new(x, y), self.style, Baseline::Top)
            .draw(&mut self.display)
            .map_err(interface_error)?;
        Ok(())
    }

    fn present(&mut self) -> Result<(), DisplayError> {
        self.display.flush().map_err(interface_error)
    }

    fn power_off(&mut self) -> Result<(), DisplayError> {
        self.display.set_display_on(false).map_err(interface_error)
    }
}

fn interface_error(e: impl fmt::Debug) -> DisplayError {
    DisplayError::Interface(format!("{e:?}"))
}
