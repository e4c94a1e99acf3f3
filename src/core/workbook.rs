//! Spreadsheet decoding.
//!
//! Turns raw file bytes into the cell grid of the first sheet, and that grid
//! into row records keyed by the header row.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::Reader;
use unicode_normalization::UnicodeNormalization;

use super::cell::CellValue;
use super::error::ImportError;
use super::record::Record;

/// Header name given to columns whose header cell is blank.
const EMPTY_HEADER: &str = "__EMPTY";

/// Delimiters considered when reading plain text.
const DELIMITERS: &[u8] = b",;\t";

/// Cell grid of a single sheet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetGrid {
    /// Sheet name (`None` for delimited text, which has no sheets)
    pub name: Option<String>,
    /// Rows of cells, top to bottom
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// Widest row in the grid.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Decode file content and return the first sheet by position.
///
/// Anything calamine recognises (xlsx, xlsm, xlsb, xls, ods) is read as a
/// workbook. Content that is not a workbook but is valid UTF-8 is read as
/// delimited text.
pub fn decode_first_sheet(bytes: &[u8]) -> Result<SheetGrid, ImportError> {
    let mut workbook = match calamine::open_workbook_auto_from_rs(Cursor::new(bytes)) {
        Ok(workbook) => workbook,
        Err(error) => {
            return match std::str::from_utf8(bytes) {
                Ok(text) => {
                    tracing::debug!("content is not a workbook, reading as delimited text");
                    decode_delimited(text)
                }
                Err(_) => Err(ImportError::Workbook(error)),
            };
        }
    };

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheets)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::NoSheets)?
        .map_err(ImportError::Sheet)?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(CellValue::from).collect())
        .collect();

    Ok(SheetGrid {
        name: Some(name),
        rows,
    })
}

/// Read delimited text (CSV, semicolon or tab separated) into a grid.
pub fn decode_delimited(text: &str) -> Result<SheetGrid, ImportError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let delimiter = sniff_delimiter(text.lines().next().unwrap_or_default());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(CellValue::from_text_field).collect());
    }

    Ok(SheetGrid { name: None, rows })
}

/// Pick the delimiter that occurs most often in the first line.
///
/// Ties and lines without any candidate fall back to a comma.
fn sniff_delimiter(first_line: &str) -> u8 {
    let mut best = b',';
    let mut best_count = 0;
    for &candidate in DELIMITERS {
        let count = first_line.bytes().filter(|&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

/// Convert a grid into records, using the first row as field names.
///
/// Rows with no non-empty cell are skipped. Rows keep their source order.
pub fn grid_to_records(grid: &SheetGrid) -> Vec<Record> {
    let Some((header_row, data_rows)) = grid.rows.split_first() else {
        return Vec::new();
    };
    let headers = header_names(header_row, grid.width());

    data_rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .map(|row| {
            let mut record = Record::new();
            for (name, cell) in headers.iter().zip(row) {
                record.insert(name.clone(), cell.clone());
            }
            record
        })
        .collect()
}

/// Build unique, NFC-normalized column names for a header row.
///
/// Blank header cells become `__EMPTY`. Repeated names get `_1`, `_2`, ...
/// suffixes, skipping any suffixed name already taken.
fn header_names(header_row: &[CellValue], width: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(width);

    for column in 0..width {
        let base = match header_row.get(column) {
            Some(cell) if !cell.is_empty() => cell.to_string().nfc().collect::<String>(),
            _ => EMPTY_HEADER.to_string(),
        };

        let name = match seen.get(&base).copied() {
            None => base.clone(),
            Some(mut counter) => {
                let mut candidate = format!("{}_{}", base, counter);
                while seen.contains_key(&candidate) {
                    counter += 1;
                    candidate = format!("{}_{}", base, counter);
                }
                seen.insert(base.clone(), counter + 1);
                candidate
            }
        };

        seen.entry(base).or_insert(1);
        seen.insert(name.clone(), 1);
        names.push(name);
    }

    names
}
