//! Spreadsheet → `Table` loader.
//!
//! Reads the first worksheet (or a named one) of an xlsx/xls/ods workbook via
//! calamine, or a CSV file, and normalizes the header row: trimmed and
//! lowercased. An uploaded file always wins over the local path.

use crate::errors::{AppError, AppResult};
use crate::models::cell::CellValue;
use crate::models::table::Table;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

/// Default timetable file looked up in the working directory.
pub const LOCAL_FILENAME: &str = "timetableNov25.xlsx";

/// Bytes handed in by the user in place of the local file.
#[derive(Debug, Clone)]
pub struct Upload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::new(path.to_string_lossy(), bytes))
    }

    /// Read an upload from a stream (stdin); the format is sniffed later.
    pub fn from_reader<R: Read>(mut reader: R) -> AppResult<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(Self::new("<stdin>", bytes))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Source {
    pub path: Option<PathBuf>,
    pub upload: Option<Upload>,
    /// Worksheet name; first sheet when `None`.
    pub sheet: Option<String>,
}

impl Source {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn from_upload(upload: Upload) -> Self {
        Self {
            upload: Some(upload),
            ..Default::default()
        }
    }

    /// Human-readable name of the source, for messages.
    pub fn describe(&self) -> String {
        if let Some(up) = &self.upload {
            return up.name.clone();
        }
        self.path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| LOCAL_FILENAME.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Workbook,
    Csv,
}

/// Load the timetable.
///
/// Returns `Ok(None)` when there is nothing to read (no upload and the path
/// is missing); callers must treat that as "cannot proceed". Loading has no
/// side effects, so repeating it with the same input gives the same table.
pub fn load(source: &Source) -> AppResult<Option<Table>> {
    let sheet = source.sheet.as_deref();

    if let Some(up) = &source.upload {
        return parse(&up.name, &up.bytes, sheet).map(Some);
    }

    match &source.path {
        Some(path) if path.is_file() => {
            let bytes = fs::read(path)?;
            parse(&path.to_string_lossy(), &bytes, sheet).map(Some)
        }
        _ => Ok(None),
    }
}

fn parse(name: &str, bytes: &[u8], sheet: Option<&str>) -> AppResult<Table> {
    let grid = match detect_format(name, bytes) {
        Format::Workbook => read_workbook(bytes, sheet)?,
        Format::Csv => read_csv(bytes)?,
    };
    Ok(build_table(grid))
}

fn detect_format(name: &str, bytes: &[u8]) -> Format {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("csv") | Some("txt") => Format::Csv,
        Some("xlsx") | Some("xlsm") | Some("xlsb") | Some("xls") | Some("ods") => Format::Workbook,
        _ => {
            // ZIP container (xlsx/ods) or OLE2 compound file (xls)
            if bytes.starts_with(b"PK\x03\x04") || bytes.starts_with(&[0xD0, 0xCF, 0x11, 0xE0]) {
                Format::Workbook
            } else {
                Format::Csv
            }
        }
    }
}

fn read_workbook(bytes: &[u8], sheet: Option<&str>) -> AppResult<Vec<Vec<CellValue>>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;

    let range = match sheet {
        Some(name) => {
            if !workbook.sheet_names().iter().any(|s| s == name) {
                return Err(AppError::SheetNotFound(name.to_string()));
            }
            workbook.worksheet_range(name)?
        }
        None => match workbook.worksheet_range_at(0) {
            Some(range) => range?,
            None => return Ok(Vec::new()),
        },
    };

    Ok(range
        .rows()
        .map(|row| row.iter().map(data_to_cell).collect())
        .collect())
}

fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from_text(s),
        Data::Float(f) => CellValue::Float(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        // Excel serial date
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // #N/A, #REF! … read as missing
        Data::Error(_) => CellValue::Empty,
    }
}

fn read_csv(bytes: &[u8]) -> AppResult<Vec<Vec<CellValue>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut grid = Vec::new();
    for record in rdr.records() {
        let record = record?;
        grid.push(record.iter().map(CellValue::from_text).collect());
    }
    Ok(grid)
}

/// First row becomes the header; fully blank data rows are dropped.
fn build_table(grid: Vec<Vec<CellValue>>) -> Table {
    let mut rows = grid.into_iter();

    let Some(header) = rows.next() else {
        return Table::default();
    };

    let columns: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(i, cell)| normalize_header(cell, i))
        .collect();

    let data = rows
        .filter(|r| r.iter().any(|c| !c.is_blank()))
        .collect();

    Table::new(columns, data)
}

/// Trim and lowercase a header cell; blank headers get a positional name.
pub fn normalize_header(cell: &CellValue, index: usize) -> String {
    match cell.as_label() {
        Some(label) => label.to_lowercase(),
        None => format!("unnamed: {index}"),
    }
}
