use super::*;

#[test]
fn can_walk_square_along_perimeter() {
    let addresses = vec![
        create_address_at(1, 0., 0.),
        create_address_at(2, 80., 0.),
        create_address_at(3, 80., 80.),
        create_address_at(4, 0., 80.),
    ];
    let engine = GroupingEngine::new(GroupingConfig::default(), create_test_environment()).unwrap();

    let result = engine.create_groups(&addresses, DEFAULT_DISTRICT, DEFAULT_VILLAGE).unwrap();

    assert_eq!(result.groups.len(), 1);
    let group = &result.groups[0];
    let ids = group.route_ids();
    ids.windows(2).for_each(|leg| {
        let diff = leg[0].abs_diff(leg[1]);
        assert!(diff == 1 || diff == 3, "diagonal leg in {ids:?}");
    });

    let coordinate = |id: AddressId| addresses[id as usize - 1].coordinate().unwrap();
    let perimeter_legs = ids.windows(2).map(|leg| haversine_distance(&coordinate(leg[0]), &coordinate(leg[1]))).sum::<Float>();
    assert!((group.metrics.total_distance - perimeter_legs).abs() < 1E-6);
    assert!((group.metrics.total_distance - 240.).abs() < 1.);
    assert!((group.metrics.avg_leg_distance - 80.).abs() < 0.5);
}

#[test]
fn can_walk_line_without_backtracking() {
    let addresses = (1..=30).map(|id| create_address_at(id, ((id * 7) % 30) as Float * 15., 0.)).collect::<Vec<_>>();
    let engine = GroupingEngine::new(GroupingConfig::default(), create_test_environment()).unwrap();

    let result = engine.create_groups(&addresses, DEFAULT_DISTRICT, DEFAULT_VILLAGE).unwrap();

    // start is in the middle, so the best open walk covers one half twice
    let group = &result.groups[0];
    assert_eq!(group.size(), 30);
    assert!(group.metrics.total_distance < 15. * 29. * 1.5 + 1., "distance: {}", group.metrics.total_distance);
}
