//! Timetable loading, period detection and aggregation.

pub mod aggregate;
pub mod columns;
pub mod loader;

use crate::errors::{AppError, AppResult};
use crate::models::table::Table;
use columns::{TEACHER_COLUMN, detect_periods_with_default, validate_required};
use loader::Source;

/// A loaded and validated timetable with its period columns.
#[derive(Debug, Clone)]
pub struct Timetable {
    table: Table,
    periods: Vec<String>,
}

impl Timetable {
    /// Detect period columns and check that every required column exists.
    pub fn from_table(table: Table, default_period_count: usize) -> AppResult<Self> {
        let periods = detect_periods_with_default(&table, default_period_count);
        validate_required(&table, &periods)?;
        Ok(Self { table, periods })
    }

    /// Load from `source`; no readable source is `SourceUnavailable`.
    pub fn open(source: &Source, default_period_count: usize) -> AppResult<Self> {
        let table =
            loader::load(source)?.ok_or_else(|| AppError::SourceUnavailable(source.describe()))?;
        Self::from_table(table, default_period_count)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// Sorted, de-duplicated, non-blank teacher names.
    pub fn teacher_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .table
            .rows()
            .filter_map(|r| r.get(TEACHER_COLUMN).as_label())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Names equal to or containing `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<String> {
        let q = name_key(query);
        self.teacher_names()
            .into_iter()
            .filter(|n| name_key(n).contains(&q))
            .collect()
    }
}

/// Rows of `table` whose `tname` equals `name` after trimming, ignoring case.
pub fn rows_for(table: &Table, name: &str) -> Table {
    let key = name_key(name);
    table.filter(|r| {
        r.get(TEACHER_COLUMN)
            .as_label()
            .is_some_and(|t| name_key(&t) == key)
    })
}

/// Comparison key for teacher names.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
