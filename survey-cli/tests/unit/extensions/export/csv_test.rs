use super::*;
use crate::helpers::*;
use std::io::BufWriter;
use survey_core::engine::create_groups;
use survey_core::models::GroupingResult;

fn write_to_records(results: &[GroupingResult]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut buffer = Vec::new();
    write_csv_results(BufWriter::new(&mut buffer), results).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let header = reader.headers().unwrap().iter().map(|field| field.to_string()).collect();
    let records = reader
        .records()
        .map(|record| record.unwrap().iter().map(|field| field.to_string()).collect::<Vec<_>>())
        .collect();

    (header, records)
}

#[test]
fn can_write_one_row_per_address() {
    let addresses = create_test_addresses(70, 1);
    let result = create_groups(&addresses, "North", "Riverside", 35, 25, 45).unwrap();
    let first_group_size = result.groups[0].size();

    let (header, records) = write_to_records(&[result]);

    assert_eq!(
        header,
        vec![
            "group_id",
            "group_size",
            "target_size",
            "estimated_distance",
            "estimated_time",
            "address_id",
            "full_address",
            "district",
            "village",
            "neighborhood",
            "lng",
            "lat",
            "visit_order"
        ]
    );
    assert_eq!(records.len(), 71);

    let first_group = &records[..first_group_size];
    assert!(first_group.iter().all(|record| record[0] == "NorthRiverside-01"));
    assert!(first_group.iter().all(|record| record[1] == first_group_size.to_string()));
    let visit_orders = first_group.iter().map(|record| record[12].parse::<usize>().unwrap()).collect::<Vec<_>>();
    assert_eq!(visit_orders, (1..=first_group_size).collect::<Vec<_>>());

    let unmatched = records.last().unwrap();
    assert_eq!(unmatched[0], UNMATCHED_GROUP_ID);
    assert_eq!(unmatched[5], "71");
    assert_eq!(unmatched[10], "");
    assert_eq!(unmatched[12], "");
}
