//! Number Match! - a single-board number-guessing game.
//!
//! The game core (state, feedback rendering, input dispatch) is plain
//! `no_std` Rust generic over the driver traits in [`drivers`], so it runs
//! on the host for testing.
//!
//! Usage: `cargo test` for the host tests, and
//! `cargo run --release --features embedded --target thumbv7em-none-eabihf`
//! to flash the nRF52840-DK through probe-rs.
//!
//! Note: The firmware entry point is main.rs (`#![no_std]`, `#![no_main]`),
//! which pulls in the [`board`] drivers behind the `embedded` feature.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod dispatch;
pub mod drivers;
pub mod error;
pub mod feedback;
pub mod game;
pub mod rng;

#[cfg(feature = "embedded")]
pub mod board;

pub use dispatch::{Board, Dispatcher};
pub use game::{DialPolicy, Difficulty, GameState, Outcome};

/// Dial policy selected by [`config::DIAL_FOLLOWS_RANGE`].
pub const fn configured_dial() -> DialPolicy {
    if config::DIAL_FOLLOWS_RANGE {
        DialPolicy::FollowRange
    } else {
        DialPolicy::Fixed
    }
}
