//! Game model and its transitions.
//!
//! [`GameState`] is the only mutable model in the firmware.  It is owned
//! by the dispatcher and every transition is a total function: nothing
//! here can fail, and the randomness needed to draw a new target is
//! passed in by the caller.

use crate::config::{GUESS_MAX, GUESS_MIN, RANGE_EASY, RANGE_HARD, RANGE_NORMAL};
use crate::rng::RandomRangeSource;

/// Where the submitted guess sits relative to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Guess is above the target; the player should try lower.
    Higher,
    /// Guess is below the target; the player should try higher.
    Lower,
    Correct,
}

impl Outcome {
    pub fn classify(guess: u8, target: u8) -> Self {
        match guess.cmp(&target) {
            core::cmp::Ordering::Less => Outcome::Lower,
            core::cmp::Ordering::Greater => Outcome::Higher,
            core::cmp::Ordering::Equal => Outcome::Correct,
        }
    }
}

/// Target range selected by the difficulty buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    /// Targets in `[1, 5]`.
    Easy,
    /// Targets in `[1, 10]`.
    #[default]
    Normal,
    /// Targets in `[1, 15]`.
    Hard,
}

impl Difficulty {
    pub const fn range_max(self) -> u8 {
        match self {
            Difficulty::Easy => RANGE_EASY,
            Difficulty::Normal => RANGE_NORMAL,
            Difficulty::Hard => RANGE_HARD,
        }
    }
}

/// How far the guess dial reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DialPolicy {
    /// Dial always spans `[1, GUESS_MAX]`, whatever the target range.
    #[default]
    Fixed,
    /// Dial spans `[1, range_max]` of the active difficulty.
    FollowRange,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameState {
    target: u8,
    guess: u8,
    attempts: u16,
    difficulty: Difficulty,
    dial: DialPolicy,
}

impl GameState {
    /// Start a game on the normal range with a freshly drawn target.
    pub fn new<R: RandomRangeSource>(dial: DialPolicy, rng: &mut R) -> Self {
        let difficulty = Difficulty::default();
        Self {
            target: rng.generate(difficulty.range_max()),
            guess: GUESS_MIN,
            attempts: 0,
            difficulty,
            dial,
        }
    }

    pub fn target(&self) -> u8 {
        self.target
    }

    pub fn guess(&self) -> u8 {
        self.guess
    }

    pub fn attempts(&self) -> u16 {
        self.attempts
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn range_max(&self) -> u8 {
        self.difficulty.range_max()
    }

    pub fn dial_policy(&self) -> DialPolicy {
        self.dial
    }

    /// Upper end of the guess dial.
    pub fn dial_max(&self) -> u8 {
        match self.dial {
            DialPolicy::Fixed => GUESS_MAX,
            DialPolicy::FollowRange => self.range_max(),
        }
    }

    /// Classify the current guess without counting an attempt.
    pub fn outcome(&self) -> Outcome {
        Outcome::classify(self.guess, self.target)
    }

    /// Step the dial up, wrapping from the top back to 1.
    pub fn increment_guess(&mut self) {
        self.guess = if self.guess < self.dial_max() {
            self.guess + 1
        } else {
            GUESS_MIN
        };
    }

    /// Step the dial down, wrapping from 1 to the top.
    pub fn decrement_guess(&mut self) {
        self.guess = if self.guess > GUESS_MIN {
            self.guess - 1
        } else {
            self.dial_max()
        };
    }

    /// Count an attempt and classify the guess.
    ///
    /// A `Correct` outcome does not reset the game; the caller does that
    /// once the success feedback has been shown.
    pub fn submit_guess(&mut self) -> Outcome {
        self.attempts = self.attempts.saturating_add(1);
        self.outcome()
    }

    /// Draw a new target on the current range and rewind guess and attempts.
    pub fn reset<R: RandomRangeSource>(&mut self, rng: &mut R) {
        self.target = rng.generate(self.range_max());
        self.guess = GUESS_MIN;
        self.attempts = 0;
    }

    /// Switch range and draw a new target from it.
    ///
    /// Guess and attempts carry over.  With a range-following dial, a guess
    /// beyond the narrowed dial is pulled down to its new top.
    pub fn set_difficulty<R: RandomRangeSource>(&mut self, difficulty: Difficulty, rng: &mut R) {
        self.difficulty = difficulty;
        self.target = rng.generate(self.range_max());
        self.guess = self.guess.min(self.dial_max());
    }
}
