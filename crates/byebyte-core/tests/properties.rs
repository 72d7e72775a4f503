use byebyte_core::{corrupt, BendError, DestroyOptions, RangeSpec, RngSource};
use proptest::prelude::*;

fn mode() -> impl Strategy<Value = (bool, bool)> {
    prop_oneof![Just((false, false)), Just((true, false)), Just((false, true))]
}

/// Buffer length, then a `(start, stop)` window inside it.
fn window() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..512).prop_flat_map(|len| {
        (0..=len).prop_flat_map(move |start| (Just(len), Just(start), start..=len))
    })
}

proptest! {
    #[test]
    fn zero_times_is_identity(
        data in proptest::collection::vec(any::<u8>(), 1..256),
        (continuous, discrete) in mode(),
        seed in any::<u64>(),
    ) {
        let mut buf = data.clone();
        let options = DestroyOptions { times: 0, continuous, discrete, ..Default::default() };
        corrupt(&mut buf, &options, &mut RngSource::seeded(Some(seed))).unwrap();
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn writes_stay_in_window_and_are_non_zero(
        (len, start, stop) in window(),
        (continuous, discrete) in mode(),
        chance in 0.0f64..=1.0,
        times in 0usize..400,
        seed in any::<u64>(),
    ) {
        let mut buf = vec![0u8; len];
        let options = DestroyOptions {
            times,
            range: RangeSpec::Offsets { start: Some(start), stop: Some(stop) },
            continuous,
            continuous_chance: chance,
            discrete,
        };
        let report = corrupt(&mut buf, &options, &mut RngSource::seeded(Some(seed))).unwrap();

        prop_assert_eq!(report.written + report.skipped, times);
        let hit: Vec<usize> = buf.iter().enumerate().filter(|(_, b)| **b != 0).map(|(i, _)| i).collect();
        // Zero is never written, so every write shows up as a non-zero byte.
        prop_assert_eq!(hit.len(), report.distinct);
        for i in hit {
            prop_assert!(i >= start && i <= stop, "offset {} outside [{}, {}]", i, start, stop);
        }
    }

    #[test]
    fn conflicting_modes_never_mutate(
        data in proptest::collection::vec(any::<u8>(), 1..128),
        times in 0usize..64,
    ) {
        let mut buf = data.clone();
        let options = DestroyOptions { times, continuous: true, discrete: true, ..Default::default() };
        let err = corrupt(&mut buf, &options, &mut RngSource::seeded(Some(0))).unwrap_err();
        prop_assert_eq!(err, BendError::ConflictingMode);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn inverted_window_never_mutates(
        len in 2usize..256,
        seed in any::<u64>(),
    ) {
        let mut buf = vec![0u8; len];
        let options = DestroyOptions {
            range: RangeSpec::Offsets { start: Some(len), stop: Some(len - 1) },
            ..Default::default()
        };
        let err = corrupt(&mut buf, &options, &mut RngSource::seeded(Some(seed))).unwrap_err();
        let is_invalid_range = matches!(err, BendError::InvalidRange { .. });
        prop_assert!(is_invalid_range);
        prop_assert!(buf.iter().all(|&b| b == 0));
    }
}
