//! Scripted random source.

use std::sync::atomic::{AtomicUsize, Ordering};

use rust_decimal::Decimal;

use crate::port::Entropy;

/// Replays a fixed list of draws, cycling when it runs out.
#[derive(Debug)]
pub struct ScriptedEntropy {
    draws: Vec<Decimal>,
    next: AtomicUsize,
}

impl ScriptedEntropy {
    /// # Panics
    ///
    /// Panics if `draws` is empty or a draw lies outside `[0, 1)`.
    pub fn new(draws: Vec<Decimal>) -> Self {
        assert!(!draws.is_empty(), "scripted entropy needs at least one draw");
        assert!(
            draws.iter().all(|d| *d >= Decimal::ZERO && *d < Decimal::ONE),
            "draws must lie in [0, 1)"
        );
        Self {
            draws,
            next: AtomicUsize::new(0),
        }
    }

    /// Number of draws handed out so far.
    pub fn consumed(&self) -> usize {
        self.next.load(Ordering::SeqCst)
    }
}

impl Entropy for ScriptedEntropy {
    fn unit(&self) -> Decimal {
        let i = self.next.fetch_add(1, Ordering::SeqCst);
        self.draws[i % self.draws.len()]
    }
}
