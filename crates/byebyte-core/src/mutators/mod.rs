pub mod destroy;

pub use destroy::Destroy;

use anyhow::Result;

pub trait Mutator {
    fn mutate(&self, data: &[u8]) -> Result<Vec<u8>>;
}
