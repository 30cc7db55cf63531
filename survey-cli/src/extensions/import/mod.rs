//! Import command helpers.

#[cfg(all(test, feature = "csv-format"))]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

mod csv;
pub use self::csv::*;

use std::io::{BufReader, Read};
use survey_core::models::Address;
use survey_core::utils::GenericError;

/// Imports addresses from specific format.
pub fn import_addresses<R: Read>(input_format: &str, reader: BufReader<R>) -> Result<Vec<Address>, GenericError> {
    match input_format {
        "csv" => read_csv_addresses(reader).map_err(|err| err.with_context("cannot read csv")),
        "json" => serde_json::from_reader::<_, Vec<Address>>(reader)
            .map_err(|err| GenericError::from(format!("cannot read json: {err}")))
            .and_then(|addresses| {
                match addresses.iter().find(|address| address.neighborhood == 0).map(|address| address.id) {
                    Some(id) => Err(format!("address '{id}' has neighborhood number 0").into()),
                    None => Ok(addresses),
                }
            }),
        _ => Err(format!("unknown format: '{input_format}'").into()),
    }
}

/// Keeps addresses which belong to the given district and village, when they are specified.
pub fn filter_addresses(addresses: Vec<Address>, district: Option<&str>, village: Option<&str>) -> Vec<Address> {
    addresses
        .into_iter()
        .filter(|address| district.is_none_or(|district| address.district == district))
        .filter(|address| village.is_none_or(|village| address.village == village))
        .collect()
}

/// Splits addresses by (district, village) keeping order of first appearance.
pub fn split_by_village(addresses: Vec<Address>) -> Vec<(String, String, Vec<Address>)> {
    addresses.into_iter().fold(Vec::<(String, String, Vec<Address>)>::new(), |mut acc, address| {
        match acc
            .iter_mut()
            .find(|(district, village, _)| *district == address.district && *village == address.village)
        {
            Some((_, _, addresses)) => addresses.push(address),
            None => acc.push((address.district.clone(), address.village.clone(), vec![address])),
        }

        acc
    })
}
