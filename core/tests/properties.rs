use std::collections::BTreeSet;

use chancore::{
    build_baseline, build_corrected, integrate_region, validate_anchor, AnchorSet, Point,
    RegionPair, RegionSelector, SelectorState, TimeSeries,
};
use proptest::prelude::*;
use proptest::sample::Index;

fn series_strategy(min_len: usize) -> impl Strategy<Value = TimeSeries> {
    prop::collection::vec((0.01f64..5.0, -1000.0f64..1000.0), min_len..60).prop_map(|samples| {
        let mut t = -3.0;
        let (times, values): (Vec<f64>, Vec<f64>) = samples
            .into_iter()
            .map(|(dt, value)| {
                t += dt;
                (t, value)
            })
            .unzip();
        TimeSeries::new(times, values).unwrap()
    })
}

fn anchors_from(series: &TimeSeries, picks: &[Index]) -> AnchorSet {
    let indices: BTreeSet<usize> = picks.iter().map(|pick| pick.index(series.len())).collect();
    let points = indices.into_iter().filter_map(|i| series.point(i));
    AnchorSet::from_points(series, points).unwrap()
}

proptest! {
    #[test]
    fn every_sample_is_a_valid_anchor(series in series_strategy(1), delta in 0.5f64..10.0) {
        for point in series.points() {
            prop_assert!(validate_anchor(&series, point).is_ok());
            let perturbed = Point::new(point.time, point.value + delta);
            prop_assert!(validate_anchor(&series, perturbed).is_err());
        }
    }

    #[test]
    fn baseline_equals_anchor_values_at_anchor_times(
        series in series_strategy(2),
        picks in prop::collection::vec(any::<Index>(), 2..8),
    ) {
        let anchors = anchors_from(&series, &picks);
        prop_assume!(anchors.len() >= 2);
        let baseline = build_baseline(&series, &anchors).unwrap();
        for anchor in anchors.iter() {
            let index = series.index_of(*anchor).unwrap();
            prop_assert_eq!(baseline.values[index], anchor.value);
        }
    }

    #[test]
    fn empty_anchor_set_leaves_signal_untouched(series in series_strategy(1)) {
        let baseline = build_baseline(&series, &AnchorSet::new()).unwrap();
        prop_assert!(baseline.values.iter().all(|&v| v == 0.0));
        let corrected = build_corrected(&series, &baseline);
        prop_assert_eq!(corrected.values(), series.values());
    }

    #[test]
    fn interpolated_baseline_stays_between_neighbouring_anchors(
        series in series_strategy(2),
        picks in prop::collection::vec(any::<Index>(), 2..8),
    ) {
        let anchors = anchors_from(&series, &picks);
        prop_assume!(anchors.len() >= 2);
        let baseline = build_baseline(&series, &anchors).unwrap();
        for segment in anchors.points().windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let (lo, hi) = (a.value.min(b.value), a.value.max(b.value));
            for index in series.indices_within(a.time, b.time) {
                let value = baseline.values[index];
                prop_assert!(lo <= value && value <= hi);
            }
        }
    }

    #[test]
    fn single_sample_region_integrates_to_zero(series in series_strategy(1), pick in any::<Index>()) {
        let corrected = build_corrected(&series, &build_baseline(&series, &AnchorSet::new()).unwrap());
        let point = series.point(pick.index(series.len())).unwrap();
        let pair = RegionPair::complete(point, point, "single");
        let result = integrate_region(&corrected, &pair, 1.0).unwrap();
        prop_assert_eq!(result.area, 0.0);
    }

    #[test]
    fn negative_signal_never_integrates_positive(
        steps in prop::collection::vec((0.01f64..5.0, -100.0f64..-0.001), 2..40),
        k in 0.5f64..1.0e5,
    ) {
        let mut t = 0.0;
        let series = TimeSeries::from_pairs(steps.into_iter().map(|(dt, v)| {
            t += dt;
            (t, v)
        }))
        .unwrap();
        let corrected = build_corrected(&series, &build_baseline(&series, &AnchorSet::new()).unwrap());
        let first = series.point(0).unwrap();
        let last = series.point(series.len() - 1).unwrap();
        let result = integrate_region(&corrected, &RegionPair::complete(first, last, "dip"), k).unwrap();
        prop_assert!(result.signal_area <= 0.0);
        prop_assert!(result.area <= 0.0);
    }

    #[test]
    fn clicks_produce_half_as_many_pairs(series in series_strategy(2), clicks in 0usize..25) {
        let mut selector = RegionSelector::bound_to(series.clone());
        for click in 0..clicks {
            let point = series.point(click % series.len()).unwrap();
            selector.select_point(point).unwrap();
        }
        prop_assert_eq!(selector.pairs().len(), (clicks + 1) / 2);
        let last_pending = selector.pairs().last().map(|p| !p.is_complete()).unwrap_or(false);
        prop_assert_eq!(last_pending, clicks % 2 == 1);
        let expected_state = if clicks % 2 == 1 {
            SelectorState::PendingStart
        } else {
            SelectorState::Empty
        };
        prop_assert_eq!(selector.state(), expected_state);
    }
}
