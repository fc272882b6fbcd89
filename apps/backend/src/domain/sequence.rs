//! Random color sequence generation.
//!
//! [`generate_with`] is the pure building block: any `rand::Rng` in, a
//! sequence out. [`SequenceGenerator`] owns a seedable RNG so the service can
//! be driven deterministically from tests or the `SIMON_RNG_SEED` setting.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::color::Color;

/// Draw `length` colors independently and uniformly, with replacement.
pub fn generate_with<R: Rng>(rng: &mut R, length: u32) -> Vec<Color> {
    (0..length)
        .map(|_| Color::ALL[rng.random_range(0..Color::ALL.len())])
        .collect()
}

/// Thread-safe owner of the sequence RNG.
pub struct SequenceGenerator {
    rng: Mutex<StdRng>,
    seed: Option<u64>,
}

impl SequenceGenerator {
    /// `Some(seed)` gives a reproducible stream; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
            seed,
        }
    }

    pub fn generate(&self, length: u32) -> Vec<Color> {
        self.with_rng(|rng| generate_with(rng, length))
    }

    /// Run `f` with exclusive access to the underlying RNG.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut *rng)
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for SequenceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceGenerator")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
