//! Randomness used by the quiz flow: the per-run question order and the
//! per-render option order. Kept behind a trait so callers can inject a
//! deterministic source.

use std::sync::{Arc, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub trait Shuffle: Send + Sync {
    /// Returns a permutation of `0..len`.
    fn permutation(&self, len: usize) -> Vec<usize>;
}

pub type SharedShuffle = Arc<dyn Shuffle>;

impl<T: Shuffle + ?Sized> Shuffle for Arc<T> {
    fn permutation(&self, len: usize) -> Vec<usize> {
        (**self).permutation(len)
    }
}

/// Reorders `items` according to one permutation drawn from `shuffle`.
pub fn shuffled<T: Clone, S: Shuffle + ?Sized>(shuffle: &S, items: &[T]) -> Vec<T> {
    shuffle
        .permutation(items.len())
        .into_iter()
        .filter_map(|i| items.get(i).cloned())
        .collect()
}

/// Non-cryptographic shuffle backed by the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngShuffle;

impl Shuffle for ThreadRngShuffle {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..len).collect();
        idx.shuffle(&mut rand::thread_rng());
        idx
    }
}

/// Reproducible shuffle: every permutation is drawn from one seeded stream.
pub struct SeededShuffle {
    rng: Mutex<StdRng>,
}

impl SeededShuffle {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Shuffle for SeededShuffle {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..len).collect();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        idx.shuffle(&mut *rng);
        idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(p: &[usize], len: usize) -> bool {
        let mut sorted = p.to_vec();
        sorted.sort_unstable();
        sorted == (0..len).collect::<Vec<_>>()
    }

    #[test]
    fn thread_rng_yields_permutations() {
        for len in [0, 1, 4, 25] {
            assert!(is_permutation(&ThreadRngShuffle.permutation(len), len));
        }
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let a = SeededShuffle::new(7);
        let b = SeededShuffle::new(7);
        for _ in 0..3 {
            let pa = a.permutation(10);
            assert!(is_permutation(&pa, 10));
            assert_eq!(pa, b.permutation(10));
        }
    }

    #[test]
    fn shuffled_keeps_every_item() {
        let shuffle: SharedShuffle = Arc::new(SeededShuffle::new(42));
        let items = vec!["a", "b", "c", "d"];
        let mut out = shuffled(&shuffle, &items);
        assert_eq!(out.len(), 4);
        out.sort_unstable();
        assert_eq!(out, items);
    }
}
