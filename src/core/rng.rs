//! Deterministic random number generation for damage rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same battle
//! - **Forkable**: Session reset derives an independent stream
//! - **Injected**: Every damage roll consumes randomness from the session's
//!   own RNG, never from a hidden global source
//!
//! ## Usage
//!
//! ```
//! use text_battle::core::{BattleRng, DamageRange};
//!
//! let mut rng = BattleRng::new(42);
//!
//! // Boosted roll: multiplied first, truncated toward zero after.
//! let damage = rng.roll_damage(DamageRange::new(8, 15), 1.5);
//! assert!((12..=22).contains(&damage));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::action::DamageRange;

/// Seedable RNG backing all damage rolls.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// For collaborators that don't care about reproducibility.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence. Used when
    /// a session resets: the fresh battle continues from a derived stream,
    /// so a seed still reproduces the whole session history.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Roll damage in the inclusive `range`, scaled by `multiplier`.
    ///
    /// The draw is uniform over `[min, max]`; the multiplier is applied to
    /// the drawn value and the product truncated toward zero, so the result
    /// always lies in `[floor(min * multiplier), floor(max * multiplier)]`.
    pub fn roll_damage(&mut self, range: DamageRange, multiplier: f64) -> u32 {
        debug_assert!(range.min <= range.max, "damage range inverted");
        let base = self.inner.gen_range(range.min..=range.max);
        (f64::from(base) * multiplier) as u32
    }
}
