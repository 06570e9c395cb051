//! Contracts the game needs from the board.
//!
//! The game core is generic over these traits so it runs unchanged on the
//! nRF52840 board (`board` module, `embedded` feature) and against
//! in-memory fakes on the host.  Driver failures are the driver's business:
//! none of these methods report errors to the core.

use crate::feedback::ColorTag;

/// Character display with a text cursor.
pub trait Display {
    fn clear(&mut self);
    /// Integer text magnification; 1 is the smallest font.
    fn set_text_size(&mut self, scale: u8);
    fn set_color(&mut self, color: ColorTag);
    /// Move the cursor to a character cell at the current text size.
    fn move_cursor(&mut self, col: u8, row: u8);
    fn write_text(&mut self, text: &str);
    /// Push a buffered frame to the panel.  No-op for unbuffered displays.
    fn flush(&mut self) {}
}

/// Five-way navigation switch; only up, down and center are used.
///
/// Each method reports `true` once per press, on the activation edge.
pub trait NavSwitch {
    fn polled_up(&mut self) -> bool;
    fn polled_down(&mut self) -> bool;
    fn polled_center(&mut self) -> bool;
}

/// The four discrete game buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Reset,
    Hint,
    Harder,
    Easier,
}

impl ButtonId {
    /// Evaluation order when several buttons are held in one poll.
    pub const PRIORITY: [ButtonId; 4] = [
        ButtonId::Reset,
        ButtonId::Hint,
        ButtonId::Harder,
        ButtonId::Easier,
    ];
}

/// Level-sampled buttons: `true` for as long as the button is held.
pub trait Buttons {
    fn is_pressed(&mut self, id: ButtonId) -> bool;
}

/// A fixed row of indicator LEDs, bit `n` driving LED `n`.
pub trait Lights {
    fn set_pattern(&mut self, mask: u8);
}

/// Tone generator.  `play` blocks for the whole `duration_ms`, then silences.
pub trait Buzzer {
    fn play(&mut self, frequency_hz: u32, duty_percent: u8, duration_ms: u32);
}
