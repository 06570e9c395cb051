//! Target number generation.
//!
//! The game only ever asks for "a number in `[1, N]`", so the seam is a
//! single-method trait.  Firmware uses [`SmallRngSource`]; tests inject a
//! [`SequenceSource`] to pin the target.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Produces targets uniformly distributed over `[1, range_max]`.
pub trait RandomRangeSource {
    /// Draw a value in `[1, range_max]`.  A `range_max` of 0 is treated as 1.
    fn generate(&mut self, range_max: u8) -> u8;
}

impl<R: RandomRangeSource + ?Sized> RandomRangeSource for &mut R {
    fn generate(&mut self, range_max: u8) -> u8 {
        (**self).generate(range_max)
    }
}

/// `SmallRng`-backed source, seeded once per boot.
pub struct SmallRngSource {
    rng: SmallRng,
}

impl SmallRngSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Replace the generator state with one derived from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }
}

impl RandomRangeSource for SmallRngSource {
    fn generate(&mut self, range_max: u8) -> u8 {
        self.rng.gen_range(1..=range_max.max(1))
    }
}

/// Deterministic source cycling through a fixed list of values.
///
/// Each value is clamped into `[1, range_max]` when drawn.
#[derive(Clone, Debug)]
pub struct SequenceSource<const N: usize> {
    values: [u8; N],
    next: usize,
}

impl<const N: usize> SequenceSource<N> {
    pub const fn new(values: [u8; N]) -> Self {
        Self { values, next: 0 }
    }
}

impl<const N: usize> RandomRangeSource for SequenceSource<N> {
    fn generate(&mut self, range_max: u8) -> u8 {
        let max = range_max.max(1);
        if N == 0 {
            return 1;
        }
        let value = self.values[self.next % N];
        self.next = (self.next + 1) % N;
        value.clamp(1, max)
    }
}

/// Fold hardware entropy and a free-running tick count into one seed.
///
/// Either input alone is enough to make consecutive boots differ.
pub fn mix_seed(entropy: [u8; 8], ticks: u64) -> u64 {
    let mut seed = u64::from_le_bytes(entropy) ^ 0x9E37_79B9_7F4A_7C15;
    seed ^= ticks.rotate_left(29);
    // splitmix64 finaliser
    seed = (seed ^ (seed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    seed = (seed ^ (seed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    seed ^ (seed >> 31)
}
