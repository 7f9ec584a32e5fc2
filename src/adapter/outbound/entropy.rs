//! Random sources for the outcome selector.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::port::Entropy;

/// Draws are taken on a grid of 10^-9, which keeps them exact as decimals.
const UNIT_SCALE: u32 = 9;
const UNIT_STEPS: i64 = 1_000_000_000;

fn draw(rng: &mut impl Rng) -> Decimal {
    Decimal::new(rng.gen_range(0..UNIT_STEPS), UNIT_SCALE)
}

/// Production random source.
///
/// Uses the thread-local generator, so concurrent decisions on different
/// worker threads never share a sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn unit(&self) -> Decimal {
        draw(&mut rand::thread_rng())
    }
}

/// Reproducible random source seeded from configuration.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Entropy for SeededEntropy {
    fn unit(&self) -> Decimal {
        draw(&mut *self.rng.lock())
    }
}
