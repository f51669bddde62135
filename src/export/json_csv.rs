use crate::errors::{AppError, AppResult};
use crate::export::model::rows_as_strings;
use crate::export::{ViewExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed: rows, per-day counts and total.
pub(crate) fn export_json(view: &ViewExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(view)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: the matched rows under the timetable's own header.
pub(crate) fn export_csv(view: &ViewExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&view.columns)?;
    for row in rows_as_strings(view) {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
