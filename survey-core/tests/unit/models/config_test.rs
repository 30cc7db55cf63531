use super::*;

#[test]
fn can_create_default_config() {
    let config = GroupingConfig::default();

    assert_eq!((config.target_size, config.min_size, config.max_size), (35, 25, 45));
    assert_eq!(config.clustering_iteration_cap, 100);
    assert_eq!(config.route_local_improvement_cap, 100);
    assert_eq!(config.strategy, ClusteringStrategy::Centroid);
    assert!(config.validate().is_ok());
}

parameterized_test! {can_validate_sizes, (sizes, is_valid), {
    let (target, min, max) = sizes;
    let config = GroupingConfig::default().with_sizes(target, min, max);

    assert_eq!(config.validate().is_ok(), is_valid);
}}

can_validate_sizes! {
    case_01_default: ((35, 25, 45), true),
    case_02_all_equal: ((10, 10, 10), true),
    case_03_zero_target: ((0, 0, 10), false),
    case_04_zero_min: ((10, 0, 10), false),
    case_05_min_above_target: ((10, 11, 20), false),
    case_06_target_above_max: ((30, 25, 20), false),
}

#[test]
fn can_validate_other_fields() {
    let invalid = [
        GroupingConfig { clustering_iteration_cap: 0, ..GroupingConfig::default() },
        GroupingConfig { clustering_convergence_epsilon: -1., ..GroupingConfig::default() },
        GroupingConfig { clustering_convergence_epsilon: Float::NAN, ..GroupingConfig::default() },
        GroupingConfig { density_radius: 0., ..GroupingConfig::default() },
        GroupingConfig { walking_speed_kmh: 0., ..GroupingConfig::default() },
        GroupingConfig::default().with_target_groups(0),
    ];

    invalid.iter().for_each(|config| {
        assert!(matches!(config.validate(), Err(GroupingError::Configuration(_))), "{config:?}");
    });
}

#[test]
fn can_report_size_ordering_in_error() {
    let result = GroupingConfig::default().with_sizes(30, 25, 20).validate();

    assert_eq!(
        result,
        Err(GroupingError::Configuration("expected min size <= target size <= max size, got 25 <= 30 <= 20".to_string()))
    );
}

#[test]
fn can_parse_strategy() {
    assert_eq!("centroid".parse::<ClusteringStrategy>(), Ok(ClusteringStrategy::Centroid));
    assert_eq!("density".parse::<ClusteringStrategy>(), Ok(ClusteringStrategy::Density));
    assert_eq!("sequential".parse::<ClusteringStrategy>(), Ok(ClusteringStrategy::Sequential));
    assert_eq!("neighborhood".parse::<ClusteringStrategy>(), Ok(ClusteringStrategy::Neighborhood));
    assert!("random".parse::<ClusteringStrategy>().is_err());
}

#[test]
fn can_deserialize_partial_config() {
    let config: GroupingConfig = serde_json::from_str(r#"{"targetSize":20,"minSize":15,"strategy":"density"}"#).unwrap();

    assert_eq!((config.target_size, config.min_size, config.max_size), (20, 15, 45));
    assert_eq!(config.strategy, ClusteringStrategy::Density);
    assert_eq!(config.walking_speed_kmh, 5.);
}

#[test]
fn can_deserialize_target_groups() {
    let config: GroupingConfig = serde_json::from_str(r#"{"targetGroups":4,"strategy":"neighborhood"}"#).unwrap();

    assert_eq!(config.target_groups, Some(4));
    assert_eq!(config.strategy, ClusteringStrategy::Neighborhood);
    assert_eq!(GroupingConfig::default().target_groups, None);
}
