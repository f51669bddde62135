use crate::core::flow::{Selection, ViewOutcome, handle_view_request};
use crate::core::gate::AttemptGate;
use crate::errors::{AppError, AppResult};
use crate::timetable::{Timetable, name_key};

pub struct Core;

impl Core {
    /// Turn typed input into a selection using the timetable's name list.
    ///
    /// An exact (case-insensitive) name wins, then a single partial match.
    /// Several partial matches are ambiguous. Unknown names pass through
    /// unchanged so the view flow reports them.
    pub fn resolve_selection(timetable: &Timetable, input: Option<&str>) -> AppResult<Selection> {
        let query = match Selection::from_input(input) {
            Selection::Nothing => return Ok(Selection::Nothing),
            Selection::Name(q) => q,
        };

        let key = name_key(&query);
        let names = timetable.teacher_names();
        if let Some(exact) = names.iter().find(|n| name_key(n) == key) {
            return Ok(Selection::Name(exact.clone()));
        }

        let mut partial = timetable.search(&query);
        match partial.len() {
            0 => Ok(Selection::Name(query)),
            1 => Ok(Selection::Name(partial.remove(0))),
            _ => Err(AppError::AmbiguousName {
                query,
                candidates: partial,
            }),
        }
    }

    /// Teacher names, or `NoTeachers` when the column is empty.
    pub fn require_teachers(timetable: &Timetable) -> AppResult<Vec<String>> {
        let names = timetable.teacher_names();
        if names.is_empty() {
            Err(AppError::NoTeachers)
        } else {
            Ok(names)
        }
    }

    /// Resolve `input` and run the view flow.
    ///
    /// While the gate refuses views, the name is not looked up at all so the
    /// block takes priority over lookup errors.
    pub fn view(
        timetable: &Timetable,
        input: Option<&str>,
        gate: AttemptGate,
    ) -> (AttemptGate, AppResult<ViewOutcome>) {
        let selection = if gate.can_view() {
            match Self::resolve_selection(timetable, input) {
                Ok(s) => s,
                Err(e) => return (gate, Err(e)),
            }
        } else {
            Selection::from_input(input)
        };

        handle_view_request(&selection, timetable.table(), timetable.periods(), gate)
    }
}
