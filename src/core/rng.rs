//! Deterministic random number generation for maze carving.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same maze
//! - **Forkable**: Each replay draws from an independent, reproducible branch
//! - **Serializable**: O(1) state capture and restore
//! - **Pluggable**: The generator only needs a [`RandomSource`], so tests can
//!   script the draws
//!
//! ```
//! use maze_latch::core::{MazeRng, RandomSource};
//!
//! let mut rng = MazeRng::new(42);
//! let mut replay = rng.fork();
//!
//! let mut again = MazeRng::new(42);
//! let mut replay_again = again.fork();
//! assert_eq!(replay.index(1000), replay_again.index(1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform indices.
///
/// This is the only randomness the generator consumes: one draw per start
/// coordinate and one per Fisher-Yates swap.
pub trait RandomSource {
    /// Uniform index in `[0, bound)`. `bound` is always at least 1.
    fn index(&mut self, bound: usize) -> usize;

    /// Fisher-Yates shuffle: walk from the last slot down to 1, swapping
    /// with a uniformly chosen earlier-or-equal slot.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, bound: usize) -> usize {
        (**self).index(bound)
    }
}

/// Seeded RNG used by sessions.
///
/// Uses ChaCha8 for speed; the word position makes checkpoints O(1).
#[derive(Clone, Debug)]
pub struct MazeRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl MazeRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy, for non-reproducible play.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. Sessions
    /// fork once per replay.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MazeRngState {
        MazeRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MazeRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for MazeRng {
    fn index(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, clamped into range.
    struct Scripted(Vec<usize>);

    impl RandomSource for Scripted {
        fn index(&mut self, bound: usize) -> usize {
            self.0.remove(0) % bound
        }
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = MazeRng::new(42);
        let mut rng2 = MazeRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index(1000), rng2.index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = MazeRng::new(1);
        let mut rng2 = MazeRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_in_bounds() {
        let mut rng = MazeRng::new(7);
        for bound in 1..50 {
            assert!(rng.index(bound) < bound);
        }
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = MazeRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = MazeRng::new(42);
        let mut rng2 = MazeRng::new(42);

        let first1 = rng1.fork();
        let first2 = rng2.fork();
        assert_eq!(first1.seed, first2.seed);

        let second1 = rng1.fork();
        assert_ne!(first1.seed, second1.seed);
    }

    #[test]
    fn test_shuffle_order_follows_draws() {
        // i=3 -> j=0, i=2 -> j=2, i=1 -> j=1
        let mut source = Scripted(vec![0, 2, 1]);
        let mut data = vec!['a', 'b', 'c', 'd'];
        source.shuffle(&mut data);
        assert_eq!(data, vec!['d', 'b', 'c', 'a']);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = MazeRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();

        rng.shuffle(&mut data);
        assert_ne!(data, (1..=10).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_short_slices_draw_nothing() {
        let mut source = Scripted(Vec::new());
        let mut one = [1];
        source.shuffle(&mut one);
        source.shuffle(&mut [] as &mut [u8]);
        assert_eq!(one, [1]);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = MazeRng::new(42);
        for _ in 0..100 {
            rng.index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.index(1000)).collect();

        let mut restored = MazeRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = MazeRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MazeRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_state_preserves_fork_counter() {
        let mut rng = MazeRng::new(42);
        let _ = rng.fork();
        let _ = rng.fork();
        let _ = rng.fork();

        let restored = MazeRng::from_state(&rng.state());
        assert_eq!(restored.fork_counter, 3);
    }
}
