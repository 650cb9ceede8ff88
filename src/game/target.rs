//! Target number selection.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of the hidden number for a round.
///
/// Implementations must return a value in `[min, max]`.
pub trait TargetPicker {
    fn pick(&mut self, min: i64, max: i64) -> i64;
}

/// Uniform draw from a random number generator.
#[derive(Clone, Debug)]
pub struct RandomPicker<R = ChaCha8Rng> {
    rng: R,
}

impl RandomPicker<ChaCha8Rng> {
    /// Picker seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Reproducible picker: the same seed yields the same targets.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetPicker for RandomPicker<R> {
    fn pick(&mut self, min: i64, max: i64) -> i64 {
        self.rng.gen_range(min..=max)
    }
}

/// Always picks the same number, clamped into the requested range.
///
/// ```rust
/// use magic_number::game::{FixedPicker, TargetPicker};
///
/// let mut picker = FixedPicker::new(7);
/// assert_eq!(picker.pick(1, 10), 7);
/// assert_eq!(picker.pick(1, 5), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedPicker {
    value: i64,
}

impl FixedPicker {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl TargetPicker for FixedPicker {
    fn pick(&mut self, min: i64, max: i64) -> i64 {
        self.value.clamp(min, max)
    }
}
