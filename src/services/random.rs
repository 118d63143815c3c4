use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fmt::Debug;
use std::sync::Mutex;

/// Supplies each service call with its own random generator.
///
/// A call draws every value it needs from the generator it was handed, so
/// two calls in flight never share generator state.
pub trait RandomSource: Send + Sync + Debug {
    fn fork(&self) -> StdRng;
}

/// Seeds every call from operating-system entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropySource;

impl RandomSource for EntropySource {
    fn fork(&self) -> StdRng {
        StdRng::from_entropy()
    }
}

/// Derives per-call generators from a seeded root, giving a reproducible
/// sequence of results for a given seed.
#[derive(Debug)]
pub struct SeededSource {
    seed: u64,
    root: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            root: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededSource {
    fn fork(&self) -> StdRng {
        let mut root = self.root.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        StdRng::seed_from_u64(root.next_u64())
    }
}
