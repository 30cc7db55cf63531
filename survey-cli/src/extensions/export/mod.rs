//! Export command helpers.

mod csv;
pub use self::csv::*;

mod json;
pub use self::json::*;

use std::io::{BufWriter, Write};
use survey_core::models::GroupingResult;
use survey_core::utils::GenericError;

/// Exports grouping results into specific format.
pub fn export_results<W: Write>(
    output_format: &str,
    writer: BufWriter<W>,
    results: &[GroupingResult],
) -> Result<(), GenericError> {
    match output_format {
        "json" => write_json_results(writer, results),
        "csv" => write_csv_results(writer, results),
        _ => Err(format!("unknown format: '{output_format}'").into()),
    }
}
