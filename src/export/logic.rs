use crate::core::flow::ViewOutcome;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ViewExport};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write a delivered view to `path` in `format`.
    pub fn export(
        outcome: &ViewOutcome,
        format: &ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        let view = ViewExport::from(outcome);
        match format {
            ExportFormat::Csv => export_csv(&view, path),
            ExportFormat::Json => export_json(&view, path),
            ExportFormat::Xlsx => export_xlsx(&view, path),
        }
    }
}
