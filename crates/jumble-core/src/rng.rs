//! Randomness plumbing.
//!
//! Every draw the generator makes goes through [`RandomSource`], so tests can
//! substitute a seeded stream. The default [`SimpleRng`] is a small PCG-style
//! generator seeded from the operating system.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, OnceLock};

/// Uniform source of randomness used during puzzle construction.
pub trait RandomSource {
    /// Next integer uniform in `[0, bound)`.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Next filler letter, uniform in `a..=z`.
    fn next_letter(&mut self) -> char {
        (b'a' + self.next_below(26) as u8) as char
    }
}

/// Small self-contained PRNG so the core crate stays off a full rand stack.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator seeded from the operating system.
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        if getrandom::getrandom(&mut seed_bytes).is_err() {
            // Fallback stream when no OS entropy source is available
            static FALLBACK: AtomicU64 = AtomicU64::new(0x9e37_79b9_7f4a_7c15);
            let counter = FALLBACK.fetch_add(0x2545_f491_4f6c_dd1d, Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        }
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator with a fixed seed for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like step
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        u64::from(xorshifted.rotate_right(rot))
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

// Process-wide stream backing the convenience constructor: seeded once, then
// shared by every construction in the process.
pub(crate) fn with_process_rng<T>(f: impl FnOnce(&mut SimpleRng) -> T) -> T {
    static PROCESS_RNG: OnceLock<Mutex<SimpleRng>> = OnceLock::new();
    let mut guard = PROCESS_RNG
        .get_or_init(|| Mutex::new(SimpleRng::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = SimpleRng::with_seed(42);
        let mut b = SimpleRng::with_seed(42);

        for _ in 0..100 {
            assert_eq!(a.next_below(1000), b.next_below(1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimpleRng::with_seed(1);
        let mut b = SimpleRng::with_seed(2);

        let a_draws: Vec<usize> = (0..20).map(|_| a.next_below(u32::MAX as usize)).collect();
        let b_draws: Vec<usize> = (0..20).map(|_| b.next_below(u32::MAX as usize)).collect();
        assert_ne!(a_draws, b_draws);
    }

    #[test]
    fn next_below_respects_the_bound() {
        let mut rng = SimpleRng::with_seed(7);
        for bound in 1..50 {
            for _ in 0..100 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn next_letter_is_lowercase_ascii() {
        let mut rng = SimpleRng::with_seed(11);
        for _ in 0..500 {
            let letter = rng.next_letter();
            assert!(letter.is_ascii_lowercase());
        }
    }
}
