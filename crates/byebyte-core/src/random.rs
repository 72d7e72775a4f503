//! Random sources used to pick offsets and byte values.
//!
//! The engine never touches `rand` directly; it draws through [`RandomSource`]
//! so a run can be replayed from a seed or scripted in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// A zero-width range (`min == max`) yields `min`. Callers never pass
    /// `min > max`.
    fn int_inclusive(&mut self, min: usize, max: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

/// Adapter over any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic when `seed` is set, seeded from OS entropy otherwise.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn int_inclusive(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    fn unit(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Always answers with the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource {
    pub value: usize,
    pub unit: f64,
}

impl FixedSource {
    pub fn new(value: usize, unit: f64) -> Self {
        Self { value, unit }
    }
}

impl RandomSource for FixedSource {
    fn int_inclusive(&mut self, min: usize, max: usize) -> usize {
        self.value.clamp(min, max.max(min))
    }

    fn unit(&mut self) -> f64 {
        self.unit
    }
}

/// Replays scripted integers and floats in order, wrapping around at the end.
///
/// Integers are clamped into the requested range, so the same script can
/// drive both offset picks and byte values.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    ints: Vec<usize>,
    units: Vec<f64>,
    next_int: usize,
    next_unit: usize,
}

impl SequenceSource {
    pub fn new(ints: Vec<usize>, units: Vec<f64>) -> Self {
        Self {
            ints,
            units,
            next_int: 0,
            next_unit: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn int_inclusive(&mut self, min: usize, max: usize) -> usize {
        if self.ints.is_empty() {
            return min;
        }
        let v = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        v.clamp(min, max.max(min))
    }

    fn unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.0;
        }
        let v = self.units[self.next_unit % self.units.len()];
        self.next_unit += 1;
        v
    }
}
