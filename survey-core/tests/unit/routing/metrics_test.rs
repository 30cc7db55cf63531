use super::*;

#[test]
fn can_estimate_metrics() {
    let coordinates = vec![Coordinate::new(121., 25.), Coordinate::new(121., 25.01), Coordinate::new(121., 25.015)];
    let config = GroupingConfig::default();

    let metrics = RouteMetrics::new(coordinates.as_slice(), 3, &config);

    let first = haversine_distance(&coordinates[0], &coordinates[1]);
    let second = haversine_distance(&coordinates[1], &coordinates[2]);
    assert_eq!(metrics.total_distance, first + second);
    assert_eq!(metrics.avg_leg_distance, (first + second) / 2.);
    assert_eq!(metrics.max_leg_distance, first);

    // ~1668m at 5km/h is ~20 minutes plus 3 stops of 3 minutes
    assert_eq!(metrics.estimated_time, 29);
}

#[test]
fn can_estimate_metrics_for_single_stop() {
    let metrics = RouteMetrics::new(&[Coordinate::new(121., 25.)], 1, &GroupingConfig::default());

    assert_eq!(metrics, RouteMetrics { estimated_time: 3, ..RouteMetrics::default() });
}

#[test]
fn can_count_stops_without_coordinates() {
    let coordinates = vec![Coordinate::new(121., 25.), Coordinate::new(121., 25.)];
    let config = GroupingConfig { stop_duration_minutes: 5, ..GroupingConfig::default() };

    let metrics = RouteMetrics::new(coordinates.as_slice(), 4, &config);

    assert_eq!(metrics.total_distance, 0.);
    assert_eq!(metrics.estimated_time, 20);
}
