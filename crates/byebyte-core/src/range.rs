//! Turns user-facing range parameters into absolute byte offsets.

use crate::error::{BendError, Result};
use serde::{Deserialize, Serialize};

/// A resolved window `[start, stop]` inside a buffer of known length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ByteRange {
    pub start: usize,
    pub stop: usize,
}

impl ByteRange {
    pub fn new(start: usize, stop: usize) -> Result<Self> {
        Self::checked(start, stop, ("start", "stop"))
    }

    fn checked(start: usize, stop: usize, terms: (&'static str, &'static str)) -> Result<Self> {
        if start > stop {
            return Err(BendError::InvalidRange {
                lower: terms.0,
                upper: terms.1,
                start,
                stop,
            });
        }
        Ok(Self { start, stop })
    }

    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// Inclusive of `stop`: random picks may land on it.
    pub fn contains(&self, offset: usize) -> bool {
        (self.start..=self.stop).contains(&offset)
    }
}

/// Range as supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeSpec {
    /// Absolute offsets. Missing bounds default to the whole buffer.
    Offsets {
        start: Option<usize>,
        stop: Option<usize>,
    },
    /// Fractions of the buffer length, each in `[0, 1]`.
    Fractions { min: f64, max: f64 },
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self::Offsets {
            start: None,
            stop: None,
        }
    }
}

impl RangeSpec {
    pub fn resolve(&self, len: usize) -> Result<ByteRange> {
        match *self {
            Self::Offsets { start, stop } => {
                let start = start.unwrap_or(0);
                let stop = stop.unwrap_or(len);
                check_bound("start", start, len)?;
                check_bound("stop", stop, len)?;
                ByteRange::checked(start, stop, ("start", "stop"))
            }
            Self::Fractions { min, max } => {
                let start = fraction_to_offset("min", min, len)?;
                let stop = fraction_to_offset("max", max, len)?;
                ByteRange::checked(start, stop, ("min", "max"))
            }
        }
    }
}

/// Rejects buffers there is nothing to corrupt in.
pub fn check_general_length(len: usize) -> Result<()> {
    if len == 0 {
        return Err(BendError::EmptyBuffer);
    }
    Ok(())
}

fn check_bound(name: &'static str, value: usize, len: usize) -> Result<()> {
    if value > len {
        return Err(BendError::OutOfBounds { name, value, len });
    }
    Ok(())
}

fn fraction_to_offset(name: &'static str, value: f64, len: usize) -> Result<usize> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(BendError::InvalidFraction { name, value });
    }
    Ok(((value * len as f64).floor() as usize).min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_whole_buffer() {
        let r = RangeSpec::default().resolve(128).unwrap();
        assert_eq!(r, ByteRange { start: 0, stop: 128 });
        assert_eq!(r.len(), 128);
    }

    #[test]
    fn fractions_floor_to_offsets() {
        let r = RangeSpec::Fractions { min: 0.3, max: 0.8 }
            .resolve(1000)
            .unwrap();
        assert_eq!(r, ByteRange { start: 300, stop: 800 });

        let r = RangeSpec::Fractions { min: 0.5, max: 0.5 }
            .resolve(7)
            .unwrap();
        assert_eq!(r, ByteRange { start: 3, stop: 3 });
        assert!(r.is_empty());
    }

    #[test]
    fn inverted_offsets_name_start_and_stop() {
        let err = RangeSpec::Offsets {
            start: Some(10),
            stop: Some(2),
        }
        .resolve(100)
        .unwrap_err();
        assert_eq!(err.to_string(), "start must be smaller than stop (got 10 > 2)");
    }

    #[test]
    fn inverted_fractions_name_min_and_max() {
        let err = RangeSpec::Fractions { min: 0.9, max: 0.1 }
            .resolve(100)
            .unwrap_err();
        assert!(matches!(
            err,
            BendError::InvalidRange {
                lower: "min",
                upper: "max",
                ..
            }
        ));
    }

    #[test]
    fn offsets_past_end_are_rejected() {
        let err = RangeSpec::Offsets {
            start: None,
            stop: Some(11),
        }
        .resolve(10)
        .unwrap_err();
        assert_eq!(
            err,
            BendError::OutOfBounds {
                name: "stop",
                value: 11,
                len: 10
            }
        );
    }

    #[test]
    fn fractions_outside_unit_interval_are_rejected() {
        for bad in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            let err = RangeSpec::Fractions { min: bad, max: 1.0 }
                .resolve(10)
                .unwrap_err();
            assert!(matches!(err, BendError::InvalidFraction { name: "min", .. }));
        }
    }

    #[test]
    fn contains_is_inclusive_of_stop() {
        let r = ByteRange::new(4, 8).unwrap();
        assert!(r.contains(4));
        assert!(r.contains(8));
        assert!(!r.contains(3));
        assert!(!r.contains(9));
    }

    #[test]
    fn empty_buffer_fails_length_check() {
        assert_eq!(check_general_length(0), Err(BendError::EmptyBuffer));
        assert_eq!(check_general_length(1), Ok(()));
    }
}
