//! Spreadsheet (xlsx / xls) reader built on calamine

use std::io::{Read, Seek};
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xls, Xlsx};
use chrono::NaiveDateTime;

use super::infer::{build_column, normalize_headers, number_to_text, RawCell};
use super::{LoadOptions, SheetSelector};
use crate::data::table::{Column, Table};
use crate::utils::error::LoadFailure;

/// Spreadsheet flavours the loader can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookKind {
    /// Excel 2007+ (.xlsx)
    Xlsx,
    /// Legacy Excel (.xls)
    Xls,
}

/// Read one worksheet of a workbook into a table
pub fn read_workbook(
    path: &Path,
    kind: WorkbookKind,
    options: &LoadOptions,
) -> Result<Table, LoadFailure> {
    let range = match kind {
        WorkbookKind::Xlsx => {
            let mut workbook: Xlsx<_> = open_workbook(path)?;
            worksheet(&mut workbook, &options.sheet)?
        }
        WorkbookKind::Xls => {
            let mut workbook: Xls<_> = open_workbook(path)?;
            worksheet(&mut workbook, &options.sheet)?
        }
    };
    range_to_table(&range, options)
}

fn worksheet<RS, R>(workbook: &mut R, sheet: &SheetSelector) -> Result<Range<Data>, LoadFailure>
where
    RS: Read + Seek,
    R: Reader<RS>,
    LoadFailure: From<R::Error>,
{
    let names = workbook.sheet_names();
    let name = match sheet {
        SheetSelector::Index(index) => names.get(*index).cloned().ok_or_else(|| {
            if names.is_empty() {
                LoadFailure::EmptyWorkbook
            } else {
                LoadFailure::SheetNotFound {
                    name: format!("#{}", index),
                }
            }
        })?,
        SheetSelector::Name(wanted) => names
            .iter()
            .find(|name| *name == wanted)
            .cloned()
            .ok_or_else(|| LoadFailure::SheetNotFound {
                name: wanted.clone(),
            })?,
    };
    Ok(workbook.worksheet_range(&name)?)
}

/// Convert a worksheet range: first row is the header, the rest is data
pub fn range_to_table(range: &Range<Data>, options: &LoadOptions) -> Result<Table, LoadFailure> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(LoadFailure::MissingHeader)?;
    let headers: Vec<String> = header.iter().map(header_text).collect();

    let mut cells: Vec<Vec<RawCell>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (column, value) in cells.iter_mut().zip(row.iter()) {
            column.push(raw_cell(value, &options.na_values));
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

fn raw_cell(value: &Data, na_values: &[String]) -> RawCell {
    match value {
        Data::Empty | Data::Error(_) => RawCell::Empty,
        Data::Int(value) => RawCell::Number(*value as f64),
        Data::Float(value) => RawCell::Number(*value),
        Data::String(text) => RawCell::from_text(text, na_values),
        Data::Bool(flag) => RawCell::Text(bool_text(*flag).to_string()),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => RawCell::Text(datetime_text(&datetime)),
            None => RawCell::Number(value.as_f64()),
        },
        Data::DateTimeIso(text) | Data::DurationIso(text) => RawCell::Text(text.clone()),
    }
}

fn header_text(value: &Data) -> String {
    match value {
        Data::Empty | Data::Error(_) => String::new(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => number_to_text(*value),
        Data::String(text) => text.clone(),
        Data::Bool(flag) => bool_text(*flag).to_string(),
        Data::DateTime(value) => value
            .as_datetime()
            .map_or_else(|| number_to_text(value.as_f64()), |dt| datetime_text(&dt)),
        Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
    }
}

fn bool_text(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

fn datetime_text(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}
