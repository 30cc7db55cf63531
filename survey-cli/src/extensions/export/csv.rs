//! Export grouping results to csv format: one row per address.

#[cfg(all(test, feature = "csv-format"))]
#[path = "../../../tests/unit/extensions/export/csv_test.rs"]
mod csv_test;

pub use self::actual::write_csv_results;

/// A group id used for addresses which are not grouped.
pub const UNMATCHED_GROUP_ID: &str = "unmatched";

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;

    use super::UNMATCHED_GROUP_ID;
    use serde::Serialize;
    use std::io::{BufWriter, Write};
    use survey_core::models::{Address, GroupingResult};
    use survey_core::utils::{Float, GenericError};

    #[derive(Serialize)]
    struct CsvMember<'a> {
        group_id: &'a str,
        group_size: Option<usize>,
        target_size: usize,
        estimated_distance: Option<Float>,
        estimated_time: Option<usize>,
        address_id: u64,
        full_address: &'a str,
        district: &'a str,
        village: &'a str,
        neighborhood: u32,
        lng: Option<Float>,
        lat: Option<Float>,
        visit_order: Option<usize>,
    }

    impl<'a> CsvMember<'a> {
        fn new(group_id: &'a str, target_size: usize, address: &'a Address) -> Self {
            Self {
                group_id,
                group_size: None,
                target_size,
                estimated_distance: None,
                estimated_time: None,
                address_id: address.id,
                full_address: address.full_address.as_str(),
                district: address.district.as_str(),
                village: address.village.as_str(),
                neighborhood: address.neighborhood,
                lng: address.lng,
                lat: address.lat,
                visit_order: None,
            }
        }
    }

    fn round(value: Float) -> Float {
        (value * 100.).round() / 100.
    }

    /// Writes grouping results as csv: grouped addresses in visiting order first, then unmatched ones.
    pub fn write_csv_results<W: Write>(writer: BufWriter<W>, results: &[GroupingResult]) -> Result<(), GenericError> {
        let mut writer = csv::Writer::from_writer(writer);

        let members = results.iter().flat_map(|result| {
            let grouped = result.groups.iter().flat_map(move |group| {
                group.members.iter().map(move |member| CsvMember {
                    group_size: Some(group.size()),
                    estimated_distance: Some(round(group.metrics.total_distance)),
                    estimated_time: Some(group.metrics.estimated_time),
                    visit_order: member.visit_order.map(|order| order + 1),
                    ..CsvMember::new(group.id.as_str(), group.target_size, member.address)
                })
            });

            let unmatched = result
                .unmatched
                .iter()
                .map(move |address| CsvMember::new(UNMATCHED_GROUP_ID, result.target_size, address));

            grouped.chain(unmatched)
        });

        for member in members {
            writer.serialize(member).map_err(|err| format!("cannot write csv: {err}"))?;
        }

        writer.flush().map_err(|err| format!("cannot write csv: {err}").into())
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use std::io::{BufWriter, Write};
    use survey_core::models::GroupingResult;
    use survey_core::utils::GenericError;

    /// A stub method for writing grouping results in csv format.
    pub fn write_csv_results<W: Write>(_writer: BufWriter<W>, _results: &[GroupingResult]) -> Result<(), GenericError> {
        unreachable!("csv-format feature is not included")
    }
}
