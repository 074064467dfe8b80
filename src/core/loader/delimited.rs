//! Delimited text (CSV) reader

use std::io::Read;

use super::infer::{build_column, normalize_headers, RawCell};
use super::LoadOptions;
use crate::data::table::{Column, Table};
use crate::utils::error::LoadFailure;

const UTF8_BOM: char = '\u{feff}';

/// Read a delimited source into a table.
///
/// The first record is the header. Shorter records are padded with missing
/// cells, blank lines are skipped, and a record wider than the header is an
/// error.
pub fn read_delimited<R: Read>(source: R, options: &LoadOptions) -> Result<Table, LoadFailure> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(index, field)| {
            if index == 0 {
                field.trim_start_matches(UTF8_BOM).to_string()
            } else {
                field.to_string()
            }
        })
        .collect();

    if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
        return Err(LoadFailure::MissingHeader);
    }

    let width = headers.len();
    let mut cells: Vec<Vec<RawCell>> = vec![Vec::new(); width];

    for record in reader.records() {
        let record = record?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() > width {
            return Err(LoadFailure::TooManyFields {
                line: record.position().map_or(0, |pos| pos.line()),
                expected: width,
                found: record.len(),
            });
        }
        for (index, column) in cells.iter_mut().enumerate() {
            let cell = record
                .get(index)
                .map_or(RawCell::Empty, |field| RawCell::from_text(field, &options.na_values));
            column.push(cell);
        }
    }

    let columns: Vec<Column> = normalize_headers(headers)
        .into_iter()
        .zip(cells)
        .map(|(name, column)| build_column(name, column))
        .collect();

    Table::from_columns(columns).map_err(|err| LoadFailure::Malformed {
        message: err.to_string(),
    })
}
