//! One "view my timetable" request, start to finish.

use crate::core::gate::AttemptGate;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::PeriodSummary;
use crate::models::notice::Notice;
use crate::models::table::Table;
use crate::timetable::aggregate::aggregate;
use crate::timetable::columns::{DAY_COLUMN, TEACHER_COLUMN};
use crate::timetable::rows_for;

/// Placeholder entry shown before the user picks a name.
pub const PLACEHOLDER: &str = "-- Select your name (start typing) --";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Nothing,
    Name(String),
}

impl Selection {
    /// Blank input and the placeholder both mean "nothing selected".
    pub fn from_input(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            None | Some("") => Selection::Nothing,
            Some(s) if s == PLACEHOLDER => Selection::Nothing,
            Some(s) => Selection::Name(s.to_string()),
        }
    }
}

/// What a successful view delivers.
#[derive(Debug, Clone)]
pub struct ViewOutcome {
    pub teacher: String,
    pub rows: Table,
    pub summary: PeriodSummary,
    pub notice: Option<Notice>,
}

/// Run a view request against `gate` and hand back the updated gate.
///
/// `NoSelection` and `NameNotFound` leave the gate untouched;
/// `AttemptsExhausted` leaves it locked; a delivered view counts once.
pub fn handle_view_request(
    selection: &Selection,
    table: &Table,
    periods: &[String],
    mut gate: AttemptGate,
) -> (AttemptGate, AppResult<ViewOutcome>) {
    let name = match selection {
        Selection::Nothing => return (gate, Err(AppError::NoSelection)),
        Selection::Name(name) => name,
    };

    if !gate.can_view() {
        let err = gate.block();
        return (gate, Err(err));
    }

    let mut rows = rows_for(table, name);
    if rows.is_empty() {
        return (gate, Err(AppError::NameNotFound(name.clone())));
    }

    rows.sort_by_column(DAY_COLUMN);
    let summary = aggregate(&rows, periods);

    let teacher = rows
        .rows()
        .find_map(|r| r.get(TEACHER_COLUMN).as_label())
        .unwrap_or_else(|| name.clone());

    let notice = match gate.record_view() {
        Ok(notice) => notice,
        Err(e) => return (gate, Err(e)),
    };

    (
        gate,
        Ok(ViewOutcome {
            teacher,
            rows,
            summary,
            notice,
        }),
    )
}
