//! SSD1306 OLED display wrapper.
//!
//! The panel is monochrome, so color tags become text styles: success is
//! drawn inverted, everything else as plain lit text.

use defmt::warn;
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::drivers::Display;
use crate::error::{DisplayError, Error};
use crate::feedback::ColorTag;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Panel<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

pub struct OledDisplay<I2C> {
    panel: Panel<I2C>,
    scale: u8,
    color: ColorTag,
    cursor: Point,
    healthy: bool,
}

impl<I2C> OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Initialise the SSD1306 and clear the screen.
    ///
    /// A panel that fails to initialise is kept anyway; the game still
    /// runs on LEDs and buzzer, and every failed flush is retried.
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        let mut display = Self {
            panel,
            scale: 1,
            color: ColorTag::Neutral,
            cursor: Point::zero(),
            healthy: true,
        };
        if let Err(e) = display.try_init() {
            warn!("Display: {}", e);
            display.healthy = false;
        }
        display
    }

    fn try_init(&mut self) -> Result<(), Error> {
        self.panel.init().map_err(|_| DisplayError::Init)?;
        self.panel.clear_buffer();
        self.try_flush()
    }

    fn try_flush(&mut self) -> Result<(), Error> {
        self.panel.flush().map_err(|_| DisplayError::Flush)?;
        Ok(())
    }

    fn font(&self) -> &'static MonoFont<'static> {
        if self.scale >= 2 {
            &FONT_9X15
        } else {
            &FONT_5X8
        }
    }

    fn text_style(&self) -> MonoTextStyle<'static, BinaryColor> {
        let builder = MonoTextStyleBuilder::new().font(self.font());
        match self.color {
            ColorTag::Success => builder
                .text_color(BinaryColor::Off)
                .background_color(BinaryColor::On)
                .build(),
            ColorTag::Neutral | ColorTag::TryHigher | ColorTag::TryLower => {
                builder.text_color(BinaryColor::On).build()
            }
        }
    }
}

impl<I2C> Display for OledDisplay<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        self.panel.clear_buffer();
        self.cursor = Point::zero();
    }

    fn set_text_size(&mut self, scale: u8) {
        self.scale = scale.max(1);
    }

    fn set_color(&mut self, color: ColorTag) {
        self.color = color;
    }

    fn move_cursor(&mut self, col: u8, row: u8) {
        let font = self.font();
        let cell_w = font.character_size.width + font.character_spacing;
        let cell_h = font.character_size.height;
        self.cursor = Point::new(
            (u32::from(col) * cell_w) as i32,
            (u32::from(row) * cell_h) as i32,
        );
    }

    fn write_text(&mut self, text: &str) {
        // Drawing only touches the RAM buffer; errors surface on flush.
        if let Ok(next) =
            Text::with_baseline(text, self.cursor, self.text_style(), Baseline::Top)
                .draw(&mut self.panel)
        {
            self.cursor = next;
        }
    }

    fn flush(&mut self) {
        match self.try_flush() {
            Ok(()) if !self.healthy => {
                defmt::info!("Display: recovered");
                self.healthy = true;
            }
            Ok(()) => {}
            Err(e) if self.healthy => {
                warn!("Display: {}", e);
                self.healthy = false;
            }
            Err(_) => {}
        }
    }
}
