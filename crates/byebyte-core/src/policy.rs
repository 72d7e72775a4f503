use crate::error::{BendError, Result};
use serde::Serialize;

/// How the cursor moves between writes. Chosen once, before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Traversal {
    /// Re-seed the cursor anywhere in the range after every write.
    Random,
    /// With probability `chance`, step to the next byte; otherwise re-seed.
    Continuous { chance: f64 },
    /// Start at the range start and step by `floor(range_len / times)`.
    Discrete,
}

impl Traversal {
    pub fn from_flags(continuous: bool, chance: f64, discrete: bool) -> Result<Self> {
        match (continuous, discrete) {
            (true, true) => Err(BendError::ConflictingMode),
            (false, true) => Ok(Self::Discrete),
            (true, false) => {
                if !(0.0..=1.0).contains(&chance) {
                    return Err(BendError::InvalidChance(chance));
                }
                Ok(Self::Continuous { chance })
            }
            (false, false) => Ok(Self::Random),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Continuous { .. } => "continuous",
            Self::Discrete => "discrete",
        }
    }
}
