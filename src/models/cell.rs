use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A single spreadsheet cell after load.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Text markers that spreadsheet exports use for a missing value.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when `s` is empty after trimming or is a missing-value marker.
pub fn is_missing_text(s: &str) -> bool {
    let s = s.trim();
    s.is_empty() || MISSING_MARKERS.contains(&s)
}

impl CellValue {
    /// Cell for a raw text field; missing-value markers become `Empty`.
    pub fn from_text(s: &str) -> Self {
        if is_missing_text(s) {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    /// The one "is this cell empty" predicate used across the crate:
    /// missing, NaN, or text that is blank or a missing-value marker.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Float(f) => f.is_nan(),
            CellValue::Text(s) => is_missing_text(s),
            CellValue::Int(_) | CellValue::Bool(_) => false,
        }
    }

    /// Trimmed string form, `None` when blank.
    pub fn as_label(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.to_string().trim().to_string())
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Int(i) => write!(f, "{i}"),
            // whole numbers read from xlsx arrive as floats
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{v:.0}")
            }
            CellValue::Float(v) if v.is_nan() => Ok(()),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Order two cells by their string form, blanks last.
pub fn cmp_by_label(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.as_label(), b.as_label()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
