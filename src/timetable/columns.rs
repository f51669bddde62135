//! Period-column detection and required-column validation.

use crate::errors::{AppError, AppResult};
use crate::models::table::Table;
use regex::Regex;
use std::sync::LazyLock;

pub const DAY_COLUMN: &str = "day";
pub const TEACHER_COLUMN: &str = "tname";
pub const DEFAULT_PERIOD_COUNT: usize = 9;

static EXACT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^p[0-9]+$").expect("valid regex"));
static LOOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p[_\-\s]?[0-9]+").expect("valid regex"));
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Detect period columns with the stock fallback of `p0..p8`.
pub fn detect_periods(table: &Table) -> Vec<String> {
    detect_periods_with_default(table, DEFAULT_PERIOD_COUNT)
}

/// Period columns of `table`, ascending by their numeric suffix.
///
/// Exact `p<digits>` names win; otherwise names like `p_1`, `p-2`, `p 3`;
/// otherwise the synthetic set `p0..p(default_count-1)`, which need not
/// exist in the table.
pub fn detect_periods_with_default(table: &Table, default_count: usize) -> Vec<String> {
    let pick = |re: &Regex| -> Vec<String> {
        table
            .columns()
            .iter()
            .filter(|c| re.is_match(c))
            .cloned()
            .collect()
    };

    let mut periods = pick(&*EXACT);
    if periods.is_empty() {
        periods = pick(&*LOOSE);
    }
    if periods.is_empty() {
        periods = (0..default_count).map(|i| format!("p{i}")).collect();
    }

    periods.sort_by(|a, b| period_index(a).cmp(&period_index(b)));
    periods
}

/// Sort key for the numeric suffix of a period column name.
///
/// Digits are compared without leading zeros, shorter first, so suffixes of
/// any length order numerically. Names without digits sort last.
pub fn period_index(name: &str) -> (bool, usize, &str) {
    match DIGITS.find(name) {
        Some(m) => {
            let digits = m.as_str().trim_start_matches('0');
            (false, digits.len(), digits)
        }
        None => (true, 0, ""),
    }
}

/// Required identifiers (`day`, `tname`, then the periods) absent from `table`.
pub fn missing_columns(table: &Table, periods: &[String]) -> Vec<String> {
    [DAY_COLUMN, TEACHER_COLUMN]
        .into_iter()
        .chain(periods.iter().map(String::as_str))
        .filter(|c| !table.has_column(c))
        .map(str::to_string)
        .collect()
}

pub fn validate_required(table: &Table, periods: &[String]) -> AppResult<()> {
    let missing = missing_columns(table, periods);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingColumns(missing))
    }
}
