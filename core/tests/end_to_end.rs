use chancore::{
    build_baseline, build_corrected, integrate_region, process, AnchorSet, ChannelError,
    ChannelRecord, EditingSession, Point, RegionPair, TimeSeries,
};

fn peaks() -> TimeSeries {
    TimeSeries::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![0.0, 10.0, 0.0, 10.0, 0.0],
    )
    .unwrap()
}

#[test]
fn two_peak_channel_step_by_step() {
    let series = peaks();
    let anchors =
        AnchorSet::from_points(&series, [Point::new(0.0, 0.0), Point::new(4.0, 0.0)]).unwrap();

    let baseline = build_baseline(&series, &anchors).unwrap();
    assert_eq!(baseline.values, vec![0.0; 5]);

    let corrected = build_corrected(&series, &baseline);
    assert_eq!(corrected.values(), series.values());

    let pair = RegionPair::complete(Point::new(1.0, 10.0), Point::new(3.0, 10.0), "Sample 1");
    let result = integrate_region(&corrected, &pair, 2.0).unwrap();
    assert_eq!(result.signal_area, 10.0);
    assert_eq!(result.area, 5.0);
    assert_eq!((result.start, result.end), (1.0, 3.0));
}

#[test]
fn two_peak_channel_through_session() {
    let mut session = EditingSession::new("peaks", peaks(), 2.0).unwrap();
    session.toggle_anchor(Point::new(0.0, 0.0)).unwrap();
    session.toggle_anchor(Point::new(4.0, 0.0)).unwrap();
    session.select_point(Point::new(1.0, 10.0)).unwrap();
    session.select_point(Point::new(3.0, 10.0)).unwrap();
    session.select_point(Point::new(4.0, 0.0)).unwrap();

    let output = session.recompute().unwrap();
    assert_eq!(output.results.len(), 1);
    assert_eq!(output.results[0].area, 5.0);

    let record = session.to_record();
    let json = serde_json::to_string(&record).unwrap();
    let reloaded: ChannelRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.process().unwrap(), output);
}

#[test]
fn sloped_baseline_is_removed_before_integration() {
    // Linear drift 1 + t with a triangular peak of height 4 at t = 2.
    let series = TimeSeries::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        vec![1.0, 2.0, 7.0, 4.0, 5.0],
    )
    .unwrap();
    let anchors =
        AnchorSet::from_points(&series, [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).unwrap();
    let pairs = vec![RegionPair::complete(
        Point::new(3.0, 0.0),
        Point::new(1.0, 0.0),
        "drift",
    )];

    let output = process(&series, &anchors, &pairs, 1.0).unwrap();
    assert_eq!(output.baseline.values, vec![2.0, 2.0, 3.0, 4.0, 4.0]);
    assert_eq!(output.corrected.values(), &[-1.0, 0.0, 4.0, 0.0, 1.0]);
    assert_eq!(output.results[0].area, 4.0);
}

#[test]
fn degenerate_spans_surface_as_errors() {
    let series = peaks();
    let anchors = AnchorSet::unchecked([Point::new(1.0, 10.0), Point::new(1.0, 10.0)]);
    assert_eq!(
        process(&series, &anchors, &[], 1.0).unwrap_err(),
        ChannelError::DegenerateAnchorSpan { time: 1.0 }
    );
}
