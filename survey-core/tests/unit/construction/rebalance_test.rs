use super::*;
use crate::construction::clustering::create_initial_clusters;
use crate::helpers::construction::*;
use crate::helpers::models::*;
use crate::models::Address;
use crate::utils::Float;

fn create_addresses(blobs: &[(usize, Float)]) -> Vec<Address> {
    blobs
        .iter()
        .enumerate()
        .flat_map(|(blob_idx, &(count, x))| create_blob(blob_idx as u64 * 1000, count, x, 0.))
        .collect()
}

fn create_ranges(sizes: &[usize]) -> Vec<Vec<usize>> {
    sizes
        .iter()
        .scan(0, |start, &size| {
            let range = (*start..*start + size).collect::<Vec<_>>();
            *start += size;
            Some(range)
        })
        .collect()
}

#[test]
fn can_merge_small_cluster_into_nearest() {
    let addresses = create_addresses(&[(30, 0.), (10, 200.), (30, 2000.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[30, 10, 30]), &GroupingConfig::default());

    assert_eq!(result.clusters, create_ranges(&[40, 30]));
    assert_eq!((result.merge_count, result.split_count), (1, 0));
}

#[test]
fn can_prefer_merge_which_keeps_max_size() {
    let addresses = create_addresses(&[(40, 0.), (10, 200.), (30, 450.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[40, 10, 30]), &GroupingConfig::default());

    assert_eq!(result.clusters, vec![(0..40).collect::<Vec<_>>(), (40..80).collect::<Vec<_>>()]);
    assert_eq!(result.merge_count, 1);
}

#[test]
fn can_merge_into_nearest_cluster_when_others_are_far() {
    let addresses = create_addresses(&[(40, 0.), (10, 200.), (30, 5000.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[40, 10, 30]), &GroupingConfig::default());

    assert_partition(result.clusters.as_slice(), 80);
    assert!(get_sizes(result.clusters.as_slice()).iter().all(|size| (25..=45).contains(size)));
    assert!(result.clusters.contains(&(50..80).collect::<Vec<_>>()));
    assert_eq!((result.merge_count, result.split_count), (1, 1));
}

#[test]
fn can_keep_single_small_cluster() {
    let addresses = create_addresses(&[(10, 0.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[10]), &GroupingConfig::default());

    assert_eq!(result.clusters, create_ranges(&[10]));
    assert_eq!((result.merge_count, result.split_count), (0, 0));
}

#[test]
fn can_split_large_cluster() {
    let addresses = create_addresses(&[(45, 0.), (45, 3000.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[90]), &GroupingConfig::default());

    assert_eq!(get_sizes(result.clusters.as_slice()), vec![45, 45]);
    assert_partition(result.clusters.as_slice(), 90);
    assert_eq!((result.merge_count, result.split_count), (0, 1));
}

#[test]
fn can_balance_halves_after_split() {
    let addresses = create_addresses(&[(40, 0.), (10, 3000.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[50]), &GroupingConfig::default());

    assert_eq!(get_sizes(result.clusters.as_slice()), vec![25, 25]);
    assert_partition(result.clusters.as_slice(), 50);
    let far_half = result.clusters.iter().find(|cluster| cluster.contains(&40)).unwrap();
    assert!((40..50).all(|idx| far_half.contains(&idx)));
}

#[test]
fn can_keep_oversized_cluster_when_split_increases_deviation() {
    let addresses = create_addresses(&[(47, 0.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[47]), &GroupingConfig::default());

    assert_eq!(result.clusters, create_ranges(&[47]));
    assert_eq!(result.split_count, 0);
}

#[test]
fn can_split_when_deviation_decreases() {
    let addresses = create_addresses(&[(17, 0.), (18, 3000.)]);
    let sites = create_test_sites(addresses.as_slice());
    let config = GroupingConfig::default().with_sizes(20, 20, 25);

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[35]), &config);

    let mut sizes = get_sizes(result.clusters.as_slice());
    sizes.sort();
    assert_eq!(sizes, vec![17, 18]);
    assert_eq!(result.split_count, 1);
}

#[test]
fn can_split_cluster_of_identical_locations() {
    let addresses = (0..60).map(|idx| create_address(idx, 121.5, 25.)).collect::<Vec<_>>();
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[60]), &GroupingConfig::default());

    assert_eq!(result.clusters, create_ranges(&[30, 30]));
    assert_eq!(result.split_count, 1);
}

#[test]
fn can_move_boundary_members_to_neighbor_with_capacity() {
    let addresses = create_addresses(&[(46, 0.), (30, 100.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[46, 30]), &GroupingConfig::default());

    assert_eq!(get_sizes(result.clusters.as_slice()), vec![45, 31]);
    assert_partition(result.clusters.as_slice(), 76);
    assert!((46..76).all(|idx| result.clusters[1].contains(&idx)));
    assert_eq!((result.split_count, result.move_count), (0, 1));
}

#[test]
fn can_regroup_oversized_cluster_with_full_neighbor() {
    let addresses = create_addresses(&[(46, 0.), (45, 100.)]);
    let sites = create_test_sites(addresses.as_slice());

    let result = rebalance_clusters(sites.as_slice(), create_ranges(&[46, 45]), &GroupingConfig::default());

    let mut sizes = get_sizes(result.clusters.as_slice());
    sizes.sort();
    assert_eq!(sizes, vec![30, 30, 31]);
    assert_partition(result.clusters.as_slice(), 91);
    assert_eq!((result.split_count, result.move_count), (1, 0));
}

#[test]
fn can_fit_bounds_when_oversized_cluster_cannot_be_bisected() {
    let addresses = create_grid_addresses(157, 10, 20.);
    let sites = create_test_sites(addresses.as_slice());
    let config = GroupingConfig::default();

    let clusters = create_initial_clusters(sites.as_slice(), &config);
    let result = rebalance_clusters(sites.as_slice(), clusters, &config);

    assert_partition(result.clusters.as_slice(), 157);
    let sizes = get_sizes(result.clusters.as_slice());
    assert!(sizes.iter().all(|size| (25..=45).contains(size)), "sizes: {sizes:?}");
}
