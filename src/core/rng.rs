//! Deterministic random number generation for match setup.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffle and deal
//! - **Context streams**: Independent sequences for different purposes
//!
//! ```
//! use kompromat::core::GameRng;
//!
//! let mut a = GameRng::new(7).for_context("deck");
//! let mut b = GameRng::new(7).for_context("deck");
//!
//! let mut left: Vec<u32> = (0..20).collect();
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Seedable RNG used when building a match.
///
/// ChaCha8 keeps shuffles reproducible across platforms, which lets tests
/// and callers replay a deal from nothing but the seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates permutation).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
