//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and game constants
//! live here so they can be tuned in one place.

// Game

/// Lowest value the guess dial can show.
pub const GUESS_MIN: u8 = 1;

/// Highest value of the guess dial under the fixed-dial policy.
pub const GUESS_MAX: u8 = 10;

/// Target ranges selected by the difficulty buttons.
pub const RANGE_EASY: u8 = 5;
pub const RANGE_NORMAL: u8 = 10;
pub const RANGE_HARD: u8 = 15;

/// Widen the guess dial to the active target range.
///
/// `false` keeps the dial at `[1, GUESS_MAX]` whatever the difficulty,
/// which leaves targets 11-15 unreachable on the hard range.
pub const DIAL_FOLLOWS_RANGE: bool = false;

// Indicator lights

/// Number of indicator LEDs driven by the light pattern.
pub const LIGHT_COUNT: u8 = 4;

/// Pattern with every indicator LED lit.
pub const ALL_LIGHTS: u8 = (1 << LIGHT_COUNT) - 1;

// Tones

/// Success chime: 500 Hz, 50 % duty, 200 ms.
pub const SUCCESS_TONE_HZ: u32 = 500;
pub const SUCCESS_TONE_MS: u32 = 200;

/// Wrong-guess buzz: 250 Hz, 50 % duty, 100 ms.
pub const BUZZ_TONE_HZ: u32 = 250;
pub const BUZZ_TONE_MS: u32 = 100;

/// Duty cycle shared by both tone patterns (percent).
pub const TONE_DUTY_PERCENT: u8 = 50;

// Timing (milliseconds)

/// Idle wait between two input polls.
pub const POLL_TICK_MS: u32 = 10;

/// Hold after a dial move (nav up / down).
pub const DIAL_DEBOUNCE_MS: u32 = 200;

/// Hold after a submission (nav center).
pub const SUBMIT_DEBOUNCE_MS: u32 = 500;

/// Hold after the reset button.
pub const RESET_DEBOUNCE_MS: u32 = 500;

/// How long the success lights stay on before the game resets.
pub const CELEBRATION_MS: u32 = 2_000;

/// How long hint and range banners stay on screen.
pub const BANNER_MS: u32 = 1_000;

// GPIO pin assignments (nRF52840-DK)
//
// These are logical names; the concrete `embassy_nrf::peripherals::*`
// are picked in `main.rs`.  Adjust for a custom board.
//
//   Nav UP         → P0.03
//   Nav DOWN       → P0.04
//   Nav CENTER     → P0.28
//   Button RESET   → P0.11  (DK button 1)
//   Button HINT    → P0.12  (DK button 2)
//   Button HARDER  → P0.24  (DK button 3)
//   Button EASIER  → P0.25  (DK button 4)
//   LED 1..4       → P0.13 .. P0.16 (active-low)
//   Buzzer (PWM0)  → P1.08
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
