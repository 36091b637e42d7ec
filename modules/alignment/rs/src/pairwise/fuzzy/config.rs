use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use fuzzydiff_core_rs::num::Float;

#[derive(Clone, Copy, PartialEq, Debug, Getters, Dissolve)]
pub struct Config<S: Float> {
    /// A pair of symbols can be matched only if its similarity is strictly above this threshold.
    min_similarity: S,
}

impl<S: Float> Config<S> {
    pub fn new(min_similarity: S) -> Result<Self> {
        ensure!(
            min_similarity >= S::zero() && min_similarity < S::one(),
            "Minimum similarity must be in the [0, 1) range, got {:?}",
            min_similarity
        );
        Ok(Self { min_similarity })
    }
}

impl<S: Float> Default for Config<S> {
    fn default() -> Self {
        Config {
            min_similarity: S::zero(),
        }
    }
}
