//! The corruption loop.
//!
//! A run is split in two: [`plan`] validates every input and freezes the
//! traversal, then [`Plan::apply`] performs the writes. Nothing touches the
//! buffer until planning has succeeded, so a rejected run leaves it intact.

use crate::error::Result;
use crate::policy::Traversal;
use crate::random::RandomSource;
use crate::range::{check_general_length, ByteRange, RangeSpec};
use crate::report::Report;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMES: usize = 50;
pub const DEFAULT_CONTINUOUS_CHANCE: f64 = 0.6;

/// Written bytes are drawn from this range; 0 is never written.
pub const BYTE_MIN: usize = 1;
pub const BYTE_MAX: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestroyOptions {
    /// Number of write operations.
    pub times: usize,
    pub range: RangeSpec,
    pub continuous: bool,
    /// Probability of stepping to the adjacent byte in continuous mode.
    pub continuous_chance: f64,
    pub discrete: bool,
}

impl Default for DestroyOptions {
    fn default() -> Self {
        Self {
            times: DEFAULT_TIMES,
            range: RangeSpec::default(),
            continuous: false,
            continuous_chance: DEFAULT_CONTINUOUS_CHANCE,
            discrete: false,
        }
    }
}

/// A validated run, ready to be applied to a buffer of `file_len` bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub file_len: usize,
    pub range: ByteRange,
    pub traversal: Traversal,
    pub times: usize,
}

pub fn plan(options: &DestroyOptions, file_len: usize) -> Result<Plan> {
    check_general_length(file_len)?;
    let traversal = Traversal::from_flags(
        options.continuous,
        options.continuous_chance,
        options.discrete,
    )?;
    let range = options.range.resolve(file_len)?;
    tracing::debug!(
        file_len,
        start = range.start,
        stop = range.stop,
        mode = traversal.name(),
        times = options.times,
        "planned corruption run"
    );
    Ok(Plan {
        file_len,
        range,
        traversal,
        times: options.times,
    })
}

/// Validates `options` against `buf` and corrupts it in place.
pub fn corrupt<R>(buf: &mut [u8], options: &DestroyOptions, rng: &mut R) -> Result<Report>
where
    R: RandomSource + ?Sized,
{
    let plan = plan(options, buf.len())?;
    Ok(plan.apply(buf, rng))
}

impl Plan {
    /// Runs exactly `times` iterations over `buf`.
    ///
    /// An offset at or past the end of `buf` is counted as skipped rather than
    /// written. That only happens when the range ends at the buffer length,
    /// since random picks include `stop`.
    pub fn apply<R>(&self, buf: &mut [u8], rng: &mut R) -> Report
    where
        R: RandomSource + ?Sized,
    {
        let mut report = Report::new(self);
        let mut touched = Touched::new(buf.len());
        let mut walk = Walk::start(self.range, self.traversal, self.times, buf.len(), rng);

        for _ in 0..self.times {
            let offset = walk.cursor();
            let value = rng.int_inclusive(BYTE_MIN, BYTE_MAX) as u8;
            match buf.get_mut(offset) {
                Some(byte) => {
                    *byte = value;
                    touched.mark(offset);
                    report.written += 1;
                }
                None => report.skipped += 1,
            }
            tracing::trace!(offset, value, "wrote byte");
            walk.advance(rng);
        }

        report.distinct = touched.count();
        tracing::info!(
            written = report.written,
            skipped = report.skipped,
            distinct = report.distinct,
            "corruption finished"
        );
        report
    }
}

/// Cursor state across iterations.
///
/// In discrete mode the cursor is advanced without any bounds check and is
/// never clamped to `stop`. The step is floored, so `start + times * step`
/// lands on `stop` at most, and that position is only reached after the last
/// write.
#[derive(Debug, Clone)]
pub struct Walk {
    range: ByteRange,
    traversal: Traversal,
    file_len: usize,
    step: usize,
    cursor: usize,
}

impl Walk {
    pub fn start<R>(
        range: ByteRange,
        traversal: Traversal,
        times: usize,
        file_len: usize,
        rng: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let (cursor, step) = match traversal {
            Traversal::Discrete => (range.start, range.len().checked_div(times).unwrap_or(0)),
            _ => (rng.int_inclusive(range.start, range.stop), 0),
        };
        Self {
            range,
            traversal,
            file_len,
            step,
            cursor,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn advance<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        match self.traversal {
            Traversal::Discrete => self.cursor += self.step,
            Traversal::Continuous { chance } => {
                let next = self.cursor + 1;
                // The chance is only rolled while the next byte exists.
                if next <= self.file_len && chance > rng.unit() && next <= self.range.stop {
                    self.cursor = next;
                } else {
                    self.reseed(rng);
                }
            }
            Traversal::Random => self.reseed(rng),
        }
    }

    fn reseed<R>(&mut self, rng: &mut R)
    where
        R: RandomSource + ?Sized,
    {
        self.cursor = rng.int_inclusive(self.range.start, self.range.stop);
    }
}

/// One bit per buffer position.
struct Touched {
    words: Vec<u64>,
}

impl Touched {
    fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    fn mark(&mut self, offset: usize) {
        self.words[offset / 64] |= 1 << (offset % 64);
    }

    fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
