use super::*;

fn create_hamlets() -> Vec<Address> {
    let hamlet = |start: AddressId, count: usize, x: Float| {
        (0..count).map(move |idx| create_address_at(start + idx as AddressId, x + (idx % 6) as Float * 20., (idx / 6) as Float * 20.))
    };

    hamlet(1, 36, 0.).chain(hamlet(101, 30, 4000.)).chain(hamlet(201, 40, 8000.)).collect()
}

parameterized_test! {can_partition_with_strategy, strategy, {
    can_partition_with_strategy_impl(strategy);
}}

can_partition_with_strategy! {
    case_01_centroid: ClusteringStrategy::Centroid,
    case_02_density: ClusteringStrategy::Density,
    case_03_sequential: ClusteringStrategy::Sequential,
    case_04_neighborhood: ClusteringStrategy::Neighborhood,
}

fn can_partition_with_strategy_impl(strategy: ClusteringStrategy) {
    let addresses = create_hamlets();
    let engine = GroupingEngine::new(GroupingConfig::default().with_strategy(strategy), create_test_environment()).unwrap();

    let result = engine.create_groups(&addresses, DEFAULT_DISTRICT, DEFAULT_VILLAGE).unwrap();

    assert_eq!(result.check_partition(&addresses), Ok(()));
    assert_eq!(result.grouped_count(), 106);
    assert!(result.groups.iter().all(|group| group.size() >= 25));
}

parameterized_test! {can_follow_hamlets_with_geographic_strategies, strategy, {
    can_follow_hamlets_with_geographic_strategies_impl(strategy);
}}

can_follow_hamlets_with_geographic_strategies! {
    case_01_centroid: ClusteringStrategy::Centroid,
    case_02_density: ClusteringStrategy::Density,
    case_03_neighborhood: ClusteringStrategy::Neighborhood,
}

fn can_follow_hamlets_with_geographic_strategies_impl(strategy: ClusteringStrategy) {
    let addresses = create_hamlets();
    let engine = GroupingEngine::new(GroupingConfig::default().with_strategy(strategy), create_test_environment()).unwrap();

    let result = engine.create_groups(&addresses, DEFAULT_DISTRICT, DEFAULT_VILLAGE).unwrap();

    let mut groups = result
        .groups
        .iter()
        .map(|group| {
            let mut ids = group.route_ids();
            ids.sort_unstable();
            ids
        })
        .collect::<Vec<_>>();
    groups.sort();

    assert_eq!(
        groups,
        vec![(1..=36).collect::<Vec<AddressId>>(), (101..=130).collect::<Vec<_>>(), (201..=240).collect::<Vec<_>>()]
    );
}
