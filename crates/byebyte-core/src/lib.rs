//! Controlled byte corruption ("data bending") for opaque file buffers.
//!
//! ```
//! use byebyte_core::{corrupt, DestroyOptions, RngSource};
//!
//! let mut buf = vec![0u8; 64];
//! let report = corrupt(&mut buf, &DestroyOptions::default(), &mut RngSource::seeded(Some(1)))?;
//! assert_eq!(report.written + report.skipped, 50);
//! # Ok::<(), byebyte_core::BendError>(())
//! ```

pub mod engine;
pub mod error;
pub mod mutators;
pub mod policy;
pub mod random;
pub mod range;
pub mod report;

pub use engine::{corrupt, plan, DestroyOptions, Plan, Walk};
pub use error::BendError;
pub use mutators::{Destroy, Mutator};
pub use policy::Traversal;
pub use random::{FixedSource, RandomSource, RngSource, SequenceSource};
pub use range::{ByteRange, RangeSpec};
pub use report::Report;
