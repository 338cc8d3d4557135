//! Random alias generation

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of a generated alias token
pub const ALIAS_LEN: usize = 8;

/// Alphabet the aliases are drawn from
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Generator for random opaque name-fragment aliases
///
/// Produces 8-character tokens drawn uniformly from ASCII letters. No
/// uniqueness is enforced; collisions across calls are possible and callers
/// must not assume aliases are distinct.
pub struct AliasGenerator {
    /// Random number generator (StdRng is Send + Sync)
    rng: StdRng,
}

impl AliasGenerator {
    /// Create a new generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one alias token
    pub fn generate(&mut self) -> String {
        (0..ALIAS_LEN)
            .map(|_| {
                let idx = self.rng.gen_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self::new()
    }
}
