//! Import addresses from a simple csv format.

#[cfg(all(test, feature = "csv-format"))]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

pub use self::actual::read_csv_addresses;

#[cfg(feature = "csv-format")]
mod actual {
    extern crate csv;
    extern crate serde;

    use serde::Deserialize;
    use std::io::{BufReader, Read};
    use survey_core::models::{Address, AddressBuilder};
    use survey_core::utils::{Float, GenericError};

    #[derive(Debug, Deserialize)]
    struct CsvAddress {
        id: u64,
        district: String,
        village: String,
        neighborhood: u32,
        street: Option<String>,
        area: Option<String>,
        lane: Option<String>,
        alley: Option<String>,
        number: Option<String>,
        full_address: String,
        lng: Option<Float>,
        lat: Option<Float>,
    }

    impl CsvAddress {
        fn into_address(self) -> Result<Address, GenericError> {
            let mut builder = AddressBuilder::default()
                .id(self.id)
                .locality(self.district.trim(), self.village.trim())
                .neighborhood(self.neighborhood)
                .full_address(self.full_address.as_str());

            if let Some(street) = non_blank(self.street) {
                builder = builder.street(street.as_str());
            }
            if let Some(area) = non_blank(self.area) {
                builder = builder.area(area.as_str());
            }
            if let Some(lane) = non_blank(self.lane) {
                builder = builder.lane(lane.as_str());
            }
            if let Some(alley) = non_blank(self.alley) {
                builder = builder.alley(alley.as_str());
            }
            if let Some(number) = non_blank(self.number) {
                builder = builder.number(number.as_str());
            }
            if let (Some(lng), Some(lat)) = (self.lng, self.lat) {
                builder = builder.coordinate(lng, lat);
            }

            builder.build()
        }
    }

    fn non_blank(value: Option<String>) -> Option<String> {
        value.filter(|value| !value.trim().is_empty())
    }

    /// Reads addresses from csv format. Empty optional cells are allowed, empty coordinates mean
    /// that the address is not matched on a map.
    pub fn read_csv_addresses<R: Read>(reader: BufReader<R>) -> Result<Vec<Address>, GenericError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

        reader
            .deserialize::<CsvAddress>()
            .enumerate()
            .map(|(idx, entry)| {
                // NOTE row numbers start from 1 after the header
                entry
                    .map_err(|err| GenericError::from(err.to_string()))
                    .and_then(CsvAddress::into_address)
                    .map_err(|err| err.with_context(format!("cannot read address at row {}", idx + 1).as_str()))
            })
            .collect()
    }
}

#[cfg(not(feature = "csv-format"))]
mod actual {
    use std::io::{BufReader, Read};
    use survey_core::models::Address;
    use survey_core::utils::GenericError;

    /// A stub method for reading addresses from csv format.
    pub fn read_csv_addresses<R: Read>(_reader: BufReader<R>) -> Result<Vec<Address>, GenericError> {
        unreachable!("csv-format feature is not included")
    }
}
