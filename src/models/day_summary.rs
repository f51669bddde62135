use serde::Serialize;

/// Occupied period cells on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: String,
    pub periods_on_day: usize,
}

/// Weekly aggregate for one teacher; `per_day` is ordered by day label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    pub total: usize,
    pub per_day: Vec<DayCount>,
}
