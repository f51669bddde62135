//! In-memory row/column table produced by the loader.

use super::cell::{CellValue, cmp_by_label};

static EMPTY: CellValue = CellValue::Empty;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// Borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a Table,
    cells: &'a [CellValue],
}

impl<'a> Row<'a> {
    /// Cell under `column`; an absent column reads as empty.
    pub fn get(&self, column: &str) -> &'a CellValue {
        self.table
            .column_index(column)
            .and_then(|i| self.cells.get(i))
            .unwrap_or(&EMPTY)
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }
}

impl Table {
    /// Build a table; short rows are padded with empty cells.
    pub fn new<S: Into<String>>(columns: Vec<S>, rows: Vec<Vec<CellValue>>) -> Self {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut r| {
                r.resize(width, CellValue::Empty);
                r
            })
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |cells| Row { table: self, cells })
    }

    /// Same columns, only the rows accepted by `keep`.
    pub fn filter<F>(&self, mut keep: F) -> Table
    where
        F: FnMut(&Row<'_>) -> bool,
    {
        let rows = self
            .rows()
            .filter(|r| keep(r))
            .map(|r| r.cells.to_vec())
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Stable sort on the string form of `column`, blanks last.
    /// Unknown columns leave the order untouched.
    pub fn sort_by_column(&mut self, column: &str) {
        if let Some(i) = self.column_index(column) {
            self.rows.sort_by(|a, b| cmp_by_label(&a[i], &b[i]));
        }
    }
}
