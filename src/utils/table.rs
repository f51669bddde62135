//! Table rendering utilities for CLI outputs.

use crate::models::table::Table;
use crate::utils::colors::{BLANK_MARK, colorize_cell};
use crate::utils::formatting::{bold, pad_right, pad_visible};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct TextTable {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Self {
        let columns = headers
            .iter()
            .map(|h| Column {
                header: h.as_ref().to_string(),
                width: UnicodeWidthStr::width(h.as_ref()),
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; widths grow to fit. Missing trailing cells render blank.
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            let w = if cell.trim().is_empty() {
                BLANK_MARK.len()
            } else {
                UnicodeWidthStr::width(cell.as_str())
            };
            col.width = col.width.max(w);
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            let padded = pad_right(&col.header, col.width);
            out.push_str(&bold(&padded));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = &row[i];
                let visible = if cell.trim().is_empty() {
                    BLANK_MARK
                } else {
                    cell.as_str()
                };
                out.push_str(&pad_visible(&colorize_cell(cell), visible, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

impl From<&Table> for TextTable {
    fn from(table: &Table) -> Self {
        let mut t = TextTable::new(table.columns());
        for row in table.rows() {
            t.add_row(row.cells().iter().map(|c| c.to_string()).collect());
        }
        t
    }
}
