use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses which letter of a fresh secret word starts out visible.
pub trait RevealPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> RevealPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniformly random picks.
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same starting board.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RevealPicker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always reveals the same position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl RevealPicker for FixedPicker {
    fn pick(&mut self, _len: usize) -> usize {
        self.0
    }
}
