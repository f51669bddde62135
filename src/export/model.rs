use crate::core::flow::ViewOutcome;
use crate::models::cell::CellValue;
use crate::models::day_summary::DayCount;
use serde::Serialize;

/// A delivered view in export form.
#[derive(Serialize, Clone, Debug)]
pub struct ViewExport {
    pub teacher: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub total: usize,
    pub per_day: Vec<DayCount>,
}

impl From<&ViewOutcome> for ViewExport {
    fn from(outcome: &ViewOutcome) -> Self {
        Self {
            teacher: outcome.teacher.clone(),
            columns: outcome.rows.columns().to_vec(),
            rows: outcome.rows.rows().map(|r| r.cells().to_vec()).collect(),
            total: outcome.summary.total,
            per_day: outcome.summary.per_day.clone(),
        }
    }
}

/// Rows as display strings (CSV / XLSX).
pub(crate) fn rows_as_strings(view: &ViewExport) -> Vec<Vec<String>> {
    view.rows
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect())
        .collect()
}
