use super::*;
use crate::helpers::models::*;
use crate::models::{AddressCategory, GroupMember};
use crate::routing::RouteMetrics;

fn create_group<'a>(id: &str, addresses: &[&'a Address], distance: Float, time: usize) -> RouteGroup<'a> {
    RouteGroup {
        id: id.to_string(),
        members: addresses
            .iter()
            .enumerate()
            .map(|(idx, address)| GroupMember { visit_order: Some(idx), ..GroupMember::new(*address, AddressCategory::Area) })
            .collect(),
        target_size: 3,
        metrics: RouteMetrics { total_distance: distance, estimated_time: time, ..RouteMetrics::default() },
    }
}

fn create_result<'a>(groups: Vec<RouteGroup<'a>>, unmatched: Vec<&'a Address>, total: usize) -> GroupingResult<'a> {
    let config = GroupingConfig::default().with_sizes(3, 2, 4);
    let statistics = GroupingStatistics::new(groups.as_slice(), unmatched.len(), &config);

    GroupingResult {
        district: DEFAULT_DISTRICT.to_string(),
        village: DEFAULT_VILLAGE.to_string(),
        target_size: 3,
        total_addresses: total,
        groups,
        unmatched,
        statistics,
    }
}

#[test]
fn can_calculate_statistics() {
    let addresses = (1..=8).map(|id| create_address(id, 121. + id as Float * 0.001, 25.)).collect::<Vec<_>>();
    let a = addresses.iter().collect::<Vec<_>>();
    let groups = vec![
        create_group("g1", &a[0..1], 0., 3),
        create_group("g2", &a[1..4], 100., 10),
        create_group("g3", &a[4..8], 200., 20),
    ];
    let config = GroupingConfig::default().with_sizes(3, 2, 3);

    let statistics = GroupingStatistics::new(groups.as_slice(), 2, &config).with_rebalance_counts(1, 2);

    assert_eq!(statistics.group_count, 3);
    assert!((statistics.avg_size - 8. / 3.).abs() < 1E-9);
    assert_eq!((statistics.min_group_size, statistics.max_group_size), (1, 4));
    assert_eq!(statistics.total_deviation, 2 + 0 + 1);
    assert_eq!((statistics.below_min_count, statistics.above_max_count), (1, 1));
    assert!(!statistics.within_bounds);
    assert_eq!((statistics.merge_count, statistics.split_count), (1, 2));
    assert_eq!(statistics.total_distance, 300.);
    assert_eq!(statistics.total_time, 33);
    assert_eq!(statistics.unmatched_count, 2);
}

#[test]
fn can_calculate_statistics_for_empty_result() {
    let statistics = GroupingStatistics::new(&[], 0, &GroupingConfig::default());

    assert_eq!(statistics, GroupingStatistics { within_bounds: true, ..GroupingStatistics::default() });
}

#[test]
fn can_check_valid_partition() {
    let addresses = vec![create_address(1, 121., 25.), create_address(2, 121.001, 25.), create_unmatched_address(3)];
    let result = create_result(vec![create_group("g1", &[&addresses[0], &addresses[1]], 0., 0)], vec![&addresses[2]], 3);

    assert_eq!(result.grouped_count(), 2);
    assert_eq!(result.check_partition(&addresses), Ok(()));
}

#[test]
fn can_detect_lost_address() {
    let addresses = vec![create_address(1, 121., 25.), create_address(2, 121.001, 25.)];
    let result = create_result(vec![create_group("g1", &[&addresses[0]], 0., 0)], vec![], 2);

    assert!(matches!(result.check_partition(&addresses), Err(GroupingError::InvariantViolation(_))));
}

#[test]
fn can_detect_duplicated_address() {
    let addresses = vec![create_address(1, 121., 25.), create_address(2, 121.001, 25.)];
    let result = create_result(
        vec![create_group("g1", &[&addresses[0]], 0., 0), create_group("g2", &[&addresses[0]], 0., 0)],
        vec![],
        2,
    );

    assert_eq!(
        result.check_partition(&addresses),
        Err(GroupingError::InvariantViolation("address '1' is assigned more than once".to_string()))
    );
}

#[test]
fn can_detect_same_id_in_two_groups() {
    let input = vec![create_address(1, 121., 25.), create_address(2, 121.001, 25.)];
    let mut copy = input[1].clone();
    copy.id = 1;
    let result = create_result(
        vec![create_group("g1", &[&input[0]], 0., 0), create_group("g2", &[&copy], 0., 0)],
        vec![],
        2,
    );

    assert_eq!(
        result.check_partition(&input),
        Err(GroupingError::InvariantViolation("address id '1' appears in groups 'g1' and 'g2'".to_string()))
    );
}

#[test]
fn can_accept_duplicated_input_ids_in_different_groups() {
    let input = vec![create_address(1, 121., 25.), create_address(1, 121.001, 25.)];
    let result =
        create_result(vec![create_group("g1", &[&input[0]], 0., 0), create_group("g2", &[&input[1]], 0., 0)], vec![], 2);

    assert_eq!(result.check_partition(&input), Ok(()));
}

#[test]
fn can_detect_broken_visit_order() {
    let addresses = vec![create_address(1, 121., 25.), create_address(2, 121.001, 25.)];
    let mut group = create_group("g1", &[&addresses[0], &addresses[1]], 0., 0);
    group.members[1].visit_order = Some(0);
    let result = create_result(vec![group], vec![], 2);

    assert!(matches!(result.check_partition(&addresses), Err(GroupingError::InvariantViolation(_))));
}

#[test]
fn can_get_coverage() {
    let addresses = vec![create_address(1, 121., 25.), create_address(2, 121.002, 25.004)];
    let result = create_result(vec![create_group("g1", &[&addresses[0], &addresses[1]], 0., 0)], vec![], 2);

    let coverage = result.coverage().unwrap();

    assert_eq!(coverage.bounding_box.max_lat, 25.004);
    assert!((coverage.center.lng - 121.001).abs() < 1E-9);
    assert!((coverage.center.lat - 25.002).abs() < 1E-9);
    assert!(create_result(vec![], vec![], 0).coverage().is_none());
}
