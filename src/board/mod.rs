//! nRF52840-DK board support - concrete drivers for the game.
//!
//! Built only with the `embedded` feature.  Each submodule implements one
//! of the traits in [`crate::drivers`]:
//!
//! - **display**: SSD1306 128×64 OLED via I²C
//! - **input**: five-way nav switch and four buttons (active-low, pull-up)
//! - **lights**: the four DK LEDs (active-low)
//! - **buzzer**: piezo on a PWM channel
//! - **entropy**: boot-time seed for the target generator

pub mod buzzer;
pub mod display;
pub mod entropy;
pub mod input;
pub mod lights;

pub use buzzer::PwmBuzzer;
pub use display::OledDisplay;
pub use input::{GpioButtons, GpioNav};
pub use lights::LedBar;
