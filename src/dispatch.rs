//! Input polling loop.
//!
//! One [`Dispatcher::poll_once`] call is one tick of the game: sample the
//! navigation switch and the buttons, apply at most one navigation action
//! and at most one button action, render, and sit out the fixed hold that
//! action calls for.  Every hold is a blocking `DelayNs` wait; nothing else
//! runs while it elapses.
//!
//! The dispatcher owns the board, the delay provider, the random source
//! and the [`GameState`], so there is no shared mutable state anywhere.

use embedded_hal::delay::DelayNs;

use crate::config::{
    BANNER_MS, CELEBRATION_MS, DIAL_DEBOUNCE_MS, POLL_TICK_MS, RESET_DEBOUNCE_MS,
    SUBMIT_DEBOUNCE_MS,
};
use crate::drivers::{ButtonId, Buttons, Buzzer, Display, Lights, NavSwitch};
use crate::feedback::{self, RenderPlan};
use crate::game::{DialPolicy, Difficulty, GameState, Outcome};
use crate::rng::RandomRangeSource;

/// The set of drivers a game runs on.
pub struct Board<D, N, B, L, Z> {
    pub display: D,
    pub nav: N,
    pub buttons: B,
    pub lights: L,
    pub buzzer: Z,
}

/// Navigation action taken during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavAction {
    Up,
    Down,
    Submit(Outcome),
}

/// Button action taken during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonAction {
    Reset,
    Hint,
    Difficulty(Difficulty),
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cycle {
    pub nav: Option<NavAction>,
    pub button: Option<ButtonAction>,
}

impl Cycle {
    pub fn is_idle(&self) -> bool {
        self.nav.is_none() && self.button.is_none()
    }
}

pub struct Dispatcher<D, N, B, L, Z, W, R> {
    board: Board<D, N, B, L, Z>,
    delay: W,
    rng: R,
    game: GameState,
}

impl<D, N, B, L, Z, W, R> Dispatcher<D, N, B, L, Z, W, R>
where
    D: Display,
    N: NavSwitch,
    B: Buttons,
    L: Lights,
    Z: Buzzer,
    W: DelayNs,
    R: RandomRangeSource,
{
    /// Draw the first target.  Nothing is rendered until [`Self::start`].
    pub fn new(board: Board<D, N, B, L, Z>, delay: W, mut rng: R, dial: DialPolicy) -> Self {
        let game = GameState::new(dial, &mut rng);
        Self {
            board,
            delay,
            rng,
            game,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn board(&self) -> &Board<D, N, B, L, Z> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board<D, N, B, L, Z> {
        &mut self.board
    }

    pub fn delay(&self) -> &W {
        &self.delay
    }

    /// Show the greeting with all lights off.
    pub fn start(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("game start, range 1-{}", self.game.range_max());
        self.show(&feedback::render_start_screen());
    }

    /// Start, then poll forever.
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.poll_once();
            self.delay.delay_ms(POLL_TICK_MS);
        }
    }

    /// Run one tick: navigation class first, then the button class.
    pub fn poll_once(&mut self) -> Cycle {
        let cycle = Cycle {
            nav: self.poll_nav(),
            button: self.poll_buttons(),
        };
        #[cfg(feature = "defmt")]
        {
            if !cycle.is_idle() {
                defmt::debug!("tick: {}", cycle);
            }
        }
        cycle
    }

    fn poll_nav(&mut self) -> Option<NavAction> {
        if self.board.nav.polled_up() {
            self.game.increment_guess();
            self.show_guess();
            self.delay.delay_ms(DIAL_DEBOUNCE_MS);
            Some(NavAction::Up)
        } else if self.board.nav.polled_down() {
            self.game.decrement_guess();
            self.show_guess();
            self.delay.delay_ms(DIAL_DEBOUNCE_MS);
            Some(NavAction::Down)
        } else if self.board.nav.polled_center() {
            let outcome = self.submit();
            self.delay.delay_ms(SUBMIT_DEBOUNCE_MS);
            Some(NavAction::Submit(outcome))
        } else {
            None
        }
    }

    fn poll_buttons(&mut self) -> Option<ButtonAction> {
        let pressed = ButtonId::PRIORITY
            .into_iter()
            .find(|&id| self.board.buttons.is_pressed(id))?;

        let action = match pressed {
            ButtonId::Reset => {
                self.restart();
                self.delay.delay_ms(RESET_DEBOUNCE_MS);
                ButtonAction::Reset
            }
            ButtonId::Hint => {
                let hint = feedback::render_hint(&self.game);
                self.show_banner(&hint);
                ButtonAction::Hint
            }
            ButtonId::Harder => self.change_difficulty(Difficulty::Hard),
            ButtonId::Easier => self.change_difficulty(Difficulty::Easy),
        };
        Some(action)
    }

    fn submit(&mut self) -> Outcome {
        let outcome = self.game.submit_guess();
        #[cfg(feature = "defmt")]
        defmt::info!(
            "submit #{}: guess {} -> {}",
            self.game.attempts(),
            self.game.guess(),
            outcome
        );

        self.show(&feedback::render_submission(&self.game, outcome));

        if outcome == Outcome::Correct {
            self.delay.delay_ms(CELEBRATION_MS);
            self.restart();
        }
        outcome
    }

    /// New target, guess back to 1, greeting screen, lights off.
    fn restart(&mut self) {
        self.game.reset(&mut self.rng);
        #[cfg(feature = "defmt")]
        defmt::info!("new round, range 1-{}", self.game.range_max());
        self.show(&feedback::render_start_screen());
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) -> ButtonAction {
        self.game.set_difficulty(difficulty, &mut self.rng);
        #[cfg(feature = "defmt")]
        defmt::info!("difficulty {} (1-{})", difficulty, self.game.range_max());
        self.show_banner(&feedback::render_range_banner(difficulty));
        ButtonAction::Difficulty(difficulty)
    }

    /// Banner for the fixed interval, then back to the guess screen.
    fn show_banner(&mut self, banner: &RenderPlan) {
        self.show(banner);
        self.delay.delay_ms(BANNER_MS);
        self.show_guess();
    }

    /// Guess screen without tone or light changes.
    fn show_guess(&mut self) {
        let plan = feedback::render_guess_feedback(&self.game).quiet();
        self.show(&plan);
    }

    /// Realise a plan: draw the screen, sound the tone, then set the lights.
    fn show(&mut self, plan: &RenderPlan) {
        let display = &mut self.board.display;
        display.clear();
        for line in &plan.lines {
            display.set_text_size(line.scale);
            display.set_color(line.color);
            display.move_cursor(line.col, line.row);
            display.write_text(&line.text);
        }
        display.flush();

        if let Some(tone) = plan.tone {
            self.board
                .buzzer
                .play(tone.frequency_hz, tone.duty_percent, tone.duration_ms);
        }
        if let Some(mask) = plan.lights {
            self.board.lights.set_pattern(mask);
        }
    }
}
