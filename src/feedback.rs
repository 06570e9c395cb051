//! Game state → observable output.
//!
//! Nothing in here touches hardware.  Every function returns a
//! [`RenderPlan`] describing what the display, the indicator lights and
//! the buzzer should do; the dispatcher hands the plan to the drivers.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::config::{
    ALL_LIGHTS, BUZZ_TONE_HZ, BUZZ_TONE_MS, LIGHT_COUNT, SUCCESS_TONE_HZ, SUCCESS_TONE_MS,
    TONE_DUTY_PERCENT,
};
use crate::game::{Difficulty, GameState, Outcome};

/// Longest text line a plan can carry (bytes).
pub const LINE_CAPACITY: usize = 24;

/// Most lines a single screen uses.
pub const MAX_LINES: usize = 4;

/// Semantic text color.  Drivers pick the concrete rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorTag {
    #[default]
    Neutral,
    /// Guess is below the target (blue on a color panel).
    TryHigher,
    /// Guess is above the target (red on a color panel).
    TryLower,
    /// Guess matches the target (green on a color panel).
    Success,
}

/// A buzzer request: square wave at `frequency_hz` for `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tone {
    pub frequency_hz: u32,
    pub duty_percent: u8,
    pub duration_ms: u32,
}

impl Tone {
    pub const SUCCESS: Tone = Tone {
        frequency_hz: SUCCESS_TONE_HZ,
        duty_percent: TONE_DUTY_PERCENT,
        duration_ms: SUCCESS_TONE_MS,
    };

    pub const BUZZ: Tone = Tone {
        frequency_hz: BUZZ_TONE_HZ,
        duty_percent: TONE_DUTY_PERCENT,
        duration_ms: BUZZ_TONE_MS,
    };
}

/// One positioned run of text.
///
/// `col`/`row` are character cells at the line's own `scale`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    pub col: u8,
    pub row: u8,
    pub scale: u8,
    pub color: ColorTag,
    pub text: String<LINE_CAPACITY>,
}

/// Everything one render produces.
///
/// `lights` of `None` leaves the indicator LEDs as they are.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderPlan {
    pub lines: Vec<TextLine, MAX_LINES>,
    pub color: ColorTag,
    pub lights: Option<u8>,
    pub tone: Option<Tone>,
}

impl RenderPlan {
    fn push(&mut self, col: u8, row: u8, scale: u8, color: ColorTag, text: &str) {
        let mut line = String::new();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        // MAX_LINES covers every screen built in this module.
        let _ = self.lines.push(TextLine {
            col,
            row,
            scale,
            color,
            text: line,
        });
    }

    /// Same screen, without tone or light changes.
    pub fn quiet(mut self) -> Self {
        self.tone = None;
        self.lights = None;
        self
    }

    /// The text of every line, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }
}

/// "Guess: N" followed by the directional verdict for the current guess.
pub fn render_guess_feedback(state: &GameState) -> RenderPlan {
    let mut plan = RenderPlan::default();

    let mut header: String<LINE_CAPACITY> = String::new();
    let _ = write!(header, "Guess: {}", state.guess());
    plan.push(1, 0, 2, ColorTag::Neutral, &header);

    match state.outcome() {
        Outcome::Lower => {
            plan.color = ColorTag::TryHigher;
            plan.push(1, 2, 2, ColorTag::TryHigher, "Try Higher!");
        }
        Outcome::Higher => {
            plan.color = ColorTag::TryLower;
            plan.push(1, 2, 2, ColorTag::TryLower, "Try Lower!");
        }
        Outcome::Correct => {
            plan.color = ColorTag::Success;
            plan.push(1, 2, 2, ColorTag::Success, "Correct!");

            let mut tally: String<LINE_CAPACITY> = String::new();
            let _ = write!(tally, "Attempts: {}", state.attempts());
            plan.push(0, 3, 2, ColorTag::Success, &tally);

            plan.lights = Some(ALL_LIGHTS);
            plan.tone = Some(Tone::SUCCESS);
        }
    }

    plan
}

/// Feedback for a submission that produced `outcome`.
///
/// A miss adds the buzz and lights a single LED that walks one place per
/// attempt.
pub fn render_submission(state: &GameState, outcome: Outcome) -> RenderPlan {
    let mut plan = render_guess_feedback(state);
    if outcome != Outcome::Correct {
        plan.tone = Some(Tone::BUZZ);
        plan.lights = Some(progress_light(state.attempts()));
    }
    plan
}

/// Single-LED pattern for the `attempts`-th miss.
pub fn progress_light(attempts: u16) -> u8 {
    let index = attempts.saturating_sub(1) % u16::from(LIGHT_COUNT);
    1 << index
}

pub fn render_start_screen() -> RenderPlan {
    let mut plan = RenderPlan::default();
    plan.push(1, 1, 2, ColorTag::Neutral, "Number");
    plan.push(1, 2, 2, ColorTag::Neutral, "Match!");
    plan.push(0, 7, 1, ColorTag::Neutral, "Use Nav to Guess");
    plan.lights = Some(0);
    plan
}

/// A one-line banner, shown for a fixed interval by the dispatcher.
pub fn render_transient_message(text: &str) -> RenderPlan {
    let mut plan = RenderPlan::default();
    if !text.is_empty() {
        plan.push(1, 1, 1, ColorTag::Neutral, text);
    }
    plan
}

/// Higher/lower hint.  Never shows a number; blank when already correct.
pub fn render_hint(state: &GameState) -> RenderPlan {
    let text = match state.outcome() {
        Outcome::Lower => "Hint: Higher",
        Outcome::Higher => "Hint: Lower",
        Outcome::Correct => "",
    };
    render_transient_message(text)
}

pub fn render_range_banner(difficulty: Difficulty) -> RenderPlan {
    let mut text: String<LINE_CAPACITY> = String::new();
    let _ = write!(text, "Range: 1-{}", difficulty.range_max());
    render_transient_message(&text)
}
