use crate::models::day_summary::{DayCount, PeriodSummary};
use crate::models::table::Table;
use crate::timetable::columns::DAY_COLUMN;
use std::collections::BTreeMap;

/// Count occupied period cells per day and in total.
///
/// Rows without a day label are not grouped. Days come out in string order
/// of their label, not calendar order.
pub fn aggregate(rows: &Table, periods: &[String]) -> PeriodSummary {
    let mut by_day: BTreeMap<String, usize> = BTreeMap::new();

    for row in rows.rows() {
        let Some(day) = row.get(DAY_COLUMN).as_label() else {
            continue;
        };
        let occupied = periods.iter().filter(|p| !row.get(p).is_blank()).count();
        *by_day.entry(day).or_insert(0) += occupied;
    }

    let total = by_day.values().sum();
    let per_day = by_day
        .into_iter()
        .map(|(day, periods_on_day)| DayCount {
            day,
            periods_on_day,
        })
        .collect();

    PeriodSummary { total, per_day }
}
