//! Export grouping results to json format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/export/json_test.rs"]
mod json_test;

use serde::Serialize;
use std::io::{BufWriter, Write};
use survey_core::models::{Coverage, GroupingResult};
use survey_core::utils::GenericError;

#[derive(Serialize)]
struct JsonResult<'a> {
    #[serde(flatten)]
    result: &'a GroupingResult<'a>,
    coverage: Option<Coverage>,
}

/// Writes grouping results as a pretty printed json array, one entry per village.
pub fn write_json_results<W: Write>(writer: BufWriter<W>, results: &[GroupingResult]) -> Result<(), GenericError> {
    let results = results.iter().map(|result| JsonResult { result, coverage: result.coverage() }).collect::<Vec<_>>();

    serde_json::to_writer_pretty(writer, &results).map_err(|err| format!("cannot write json: {err}").into())
}
