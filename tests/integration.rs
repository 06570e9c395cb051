//! Integration tests for the game running against in-memory drivers.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use numbermatch::drivers::{ButtonId, Buttons, Buzzer, Display, Lights, NavSwitch};
use numbermatch::feedback::{self, ColorTag};
use numbermatch::rng::{SequenceSource, SmallRngSource};
use numbermatch::{Board, DialPolicy, Difficulty, Dispatcher, GameState, Outcome};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Size(u8),
    Color(ColorTag),
    Cursor(u8, u8),
    Text(String),
    Flush,
}

#[derive(Default)]
struct FakeDisplay {
    ops: Vec<Op>,
}

impl FakeDisplay {
    /// Text of the most recently flushed frame.
    fn screen(&self) -> Vec<String> {
        let end = self.ops.iter().rposition(|op| *op == Op::Flush).unwrap_or(0);
        let start = self.ops[..end]
            .iter()
            .rposition(|op| *op == Op::Clear)
            .unwrap_or(0);
        self.ops[start..end]
            .iter()
            .filter_map(|op| match op {
                Op::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Display for FakeDisplay {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_text_size(&mut self, scale: u8) {
        self.ops.push(Op::Size(scale));
    }
    fn set_color(&mut self, color: ColorTag) {
        self.ops.push(Op::Color(color));
    }
    fn move_cursor(&mut self, col: u8, row: u8) {
        self.ops.push(Op::Cursor(col, row));
    }
    fn write_text(&mut self, text: &str) {
        self.ops.push(Op::Text(text.to_owned()));
    }
    fn flush(&mut self) {
        self.ops.push(Op::Flush);
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Press {
    Up,
    Down,
    Center,
}

#[derive(Default)]
struct FakeNav {
    pending: VecDeque<Press>,
}

impl FakeNav {
    fn take(&mut self, press: Press) -> bool {
        if self.pending.front() == Some(&press) {
            self.pending.pop_front();
            true
        } else {
            false
        }
    }
}

impl NavSwitch for FakeNav {
    fn polled_up(&mut self) -> bool {
        self.take(Press::Up)
    }
    fn polled_down(&mut self) -> bool {
        self.take(Press::Down)
    }
    fn polled_center(&mut self) -> bool {
        self.take(Press::Center)
    }
}

/// Buttons that stay pressed for exactly one poll.
#[derive(Default)]
struct FakeButtons {
    tapped: Vec<ButtonId>,
}

impl Buttons for FakeButtons {
    fn is_pressed(&mut self, id: ButtonId) -> bool {
        if let Some(i) = self.tapped.iter().position(|&b| b == id) {
            self.tapped.remove(i);
            true
        } else {
            false
        }
    }
}

#[derive(Default)]
struct FakeLights {
    current: u8,
    writes: usize,
}

impl Lights for FakeLights {
    fn set_pattern(&mut self, mask: u8) {
        self.current = mask;
        self.writes += 1;
    }
}

#[derive(Default)]
struct FakeBuzzer {
    played: Vec<(u32, u8, u32)>,
}

impl Buzzer for FakeBuzzer {
    fn play(&mut self, frequency_hz: u32, duty_percent: u8, duration_ms: u32) {
        self.played.push((frequency_hz, duty_percent, duration_ms));
    }
}

#[derive(Default)]
struct FakeDelay {
    total_ms: u64,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ms += u64::from(ns) / 1_000_000;
    }
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
    }
}

type Game<R> =
    Dispatcher<FakeDisplay, FakeNav, FakeButtons, FakeLights, FakeBuzzer, FakeDelay, R>;

fn game<R: numbermatch::rng::RandomRangeSource>(rng: R, dial: DialPolicy) -> Game<R> {
    let board = Board {
        display: FakeDisplay::default(),
        nav: FakeNav::default(),
        buttons: FakeButtons::default(),
        lights: FakeLights::default(),
        buzzer: FakeBuzzer::default(),
    };
    let mut game = Dispatcher::new(board, FakeDelay::default(), rng, dial);
    game.start();
    game
}

fn nav<R: numbermatch::rng::RandomRangeSource>(game: &mut Game<R>, presses: &[Press]) {
    for &press in presses {
        game.board_mut().nav.pending.push_back(press);
        game.poll_once();
    }
}

fn tap<R: numbermatch::rng::RandomRangeSource>(game: &mut Game<R>, id: ButtonId) {
    game.board_mut().buttons.tapped.push(id);
    game.poll_once();
}

#[test]
fn start_screen_uses_large_title_and_small_prompt() {
    let game = game(SequenceSource::new([5]), DialPolicy::Fixed);
    let ops = &game.board().display.ops;
    assert_eq!(
        game.board().display.screen(),
        ["Number", "Match!", "Use Nav to Guess"]
    );
    assert!(ops.contains(&Op::Size(2)));
    assert!(ops.contains(&Op::Size(1)));
    assert!(ops.contains(&Op::Cursor(0, 7)));
    assert_eq!(game.board().lights.current, 0);
}

#[test]
fn guessing_seven_takes_two_attempts() {
    let mut game = game(SequenceSource::new([7, 3]), DialPolicy::Fixed);

    nav(&mut game, &[Press::Center]);
    assert_eq!(game.game().attempts(), 1);
    assert_eq!(game.board().display.screen(), ["Guess: 1", "Try Higher!"]);
    assert_eq!(game.board().buzzer.played, [(250, 50, 100)]);
    assert_eq!(game.board().lights.current, 0b0001);

    nav(&mut game, &[Press::Up; 6]);
    assert_eq!(game.game().guess(), 7);
    assert_eq!(
        game.board().display.screen(),
        ["Guess: 7", "Correct!", "Attempts: 1"]
    );
    assert_eq!(game.board().buzzer.played.len(), 1);

    game.board_mut().nav.pending.push_back(Press::Center);
    let cycle = game.poll_once();
    assert_eq!(
        cycle.nav,
        Some(numbermatch::dispatch::NavAction::Submit(Outcome::Correct))
    );

    // Success chime after the buzz from the first miss.
    assert_eq!(game.board().buzzer.played[1], (500, 50, 200));
    // Lights were full on before the celebration cleared them.
    assert_eq!(game.board().lights.current, 0);
    assert_eq!(
        game.board().display.screen(),
        ["Number", "Match!", "Use Nav to Guess"]
    );

    assert_eq!(game.game().guess(), 1);
    assert_eq!(game.game().attempts(), 0);
    assert_eq!(game.game().target(), 3);
}

#[test]
fn success_lights_all_leds_before_reset() {
    let mut game = game(SequenceSource::new([1, 9]), DialPolicy::Fixed);
    let writes_before = game.board().lights.writes;

    nav(&mut game, &[Press::Center]);

    // Full bar, then off with the start screen.
    assert_eq!(game.board().lights.writes - writes_before, 2);
    assert_eq!(game.board().lights.current, 0);
    assert!(game
        .board()
        .display
        .ops
        .contains(&Op::Text("Attempts: 1".into())));
    assert!(game
        .board()
        .display
        .ops
        .contains(&Op::Color(ColorTag::Success)));
}

#[test]
fn harder_keeps_the_fixed_dial() {
    let mut game = game(SequenceSource::new([4, 12]), DialPolicy::Fixed);
    nav(&mut game, &[Press::Up, Press::Center]);

    tap(&mut game, ButtonId::Harder);
    assert_eq!(game.game().range_max(), 15);
    assert_eq!(game.game().target(), 12);
    assert_eq!(game.game().guess(), 2);
    assert_eq!(game.game().attempts(), 1);
    assert_eq!(game.board().display.screen(), ["Guess: 2", "Try Higher!"]);

    nav(&mut game, &[Press::Down, Press::Down]);
    assert_eq!(game.game().guess(), 10);
}

#[test]
fn harder_with_range_following_dial_can_win_high_targets() {
    let mut game = game(SequenceSource::new([4, 12, 2]), DialPolicy::FollowRange);
    tap(&mut game, ButtonId::Harder);

    nav(&mut game, &[Press::Down, Press::Down, Press::Down, Press::Down]);
    assert_eq!(game.game().guess(), 12);
    nav(&mut game, &[Press::Center]);
    assert_eq!(game.game().attempts(), 0);
    assert_eq!(game.game().target(), 2);
    assert_eq!(game.game().range_max(), 15);
}

#[test]
fn easier_then_reset_stays_on_easy_range() {
    let mut game = game(SmallRngSource::from_seed(2024), DialPolicy::Fixed);
    tap(&mut game, ButtonId::Easier);
    for _ in 0..50 {
        tap(&mut game, ButtonId::Reset);
        assert_eq!(game.game().range_max(), 5);
        assert!((1..=5).contains(&game.game().target()));
        assert_eq!(game.game().guess(), 1);
        assert_eq!(game.game().attempts(), 0);
    }
}

#[test]
fn hint_reveals_direction_only() {
    let mut game = game(SequenceSource::new([6]), DialPolicy::Fixed);
    nav(&mut game, &[Press::Up; 8]);
    game.board_mut().display.ops.clear();
    tap(&mut game, ButtonId::Hint);

    let texts: Vec<_> = game
        .board()
        .display
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Text(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, ["Hint: Lower", "Guess: 9", "Try Lower!"]);
    assert!(!texts[0].chars().any(|c| c.is_ascii_digit()));
    assert_eq!(game.board().display.screen(), ["Guess: 9", "Try Lower!"]);
}

#[test]
fn waits_add_up_to_the_configured_holds() {
    let mut game = game(SequenceSource::new([3, 3]), DialPolicy::Fixed);
    nav(&mut game, &[Press::Up]); // 200
    nav(&mut game, &[Press::Center]); // 500
    nav(&mut game, &[Press::Up, Press::Center]); // 200 + 2000 + 500
    tap(&mut game, ButtonId::Hint); // 1000
    tap(&mut game, ButtonId::Reset); // 500
    assert_eq!(game.delay().total_ms, 4_900);
}

#[test]
fn presenter_output_is_stable_for_unchanged_state() {
    let mut rng = SequenceSource::new([8]);
    let mut state = GameState::new(DialPolicy::Fixed, &mut rng);
    state.set_difficulty(Difficulty::Hard, &mut rng);
    let first = feedback::render_guess_feedback(&state);
    let second = feedback::render_guess_feedback(&state);
    assert_eq!(first, second);
}
