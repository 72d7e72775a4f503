use super::Mutator;
use crate::engine::{corrupt, DestroyOptions};
use crate::random::RngSource;
use anyhow::Result;

/// Overwrites bytes of a copy of the input with random non-zero values.
pub struct Destroy {
    pub options: DestroyOptions,
    /// Optional seed for deterministic mutations. Uses OS entropy if None.
    pub seed: Option<u64>,
}

impl Mutator for Destroy {
    fn mutate(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut corrupted = data.to_vec();
        let mut rng = RngSource::seeded(self.seed);
        corrupt(&mut corrupted, &self.options, &mut rng)?;
        Ok(corrupted)
    }
}
