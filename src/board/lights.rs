//! The four DK LEDs as one indicator bar.

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};

use crate::config::LIGHT_COUNT;
use crate::drivers::Lights;

/// LEDs wired active-low: driving the pin low lights the LED.
pub struct LedBar {
    leds: [Output<'static>; LIGHT_COUNT as usize],
}

impl LedBar {
    /// Take the LED pins in bit order and switch them all off.
    pub fn new(pins: [AnyPin; LIGHT_COUNT as usize]) -> Self {
        Self {
            leds: pins.map(|pin| Output::new(pin, Level::High, OutputDrive::Standard)),
        }
    }
}

impl Lights for LedBar {
    fn set_pattern(&mut self, mask: u8) {
        for (bit, led) in self.leds.iter_mut().enumerate() {
            if mask & (1 << bit) != 0 {
                led.set_low();
            } else {
                led.set_high();
            }
        }
    }
}
