use crate::errors::{AppError, AppResult};
use crate::export::model::rows_as_strings;
use crate::export::{ViewExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: one sheet with the rows, one with the per-day counts.
pub(crate) fn export_xlsx(view: &ViewExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Timetable").map_err(to_export_error)?;
    write_grid(sheet, &view.columns, &rows_as_strings(view))?;

    let per_day: Vec<Vec<String>> = view
        .per_day
        .iter()
        .map(|d| vec![d.day.clone(), d.periods_on_day.to_string()])
        .chain(std::iter::once(vec![
            "Total".to_string(),
            view.total.to_string(),
        ]))
        .collect();

    let sheet = workbook.add_worksheet();
    sheet.set_name("Periods per day").map_err(to_export_error)?;
    write_grid(
        sheet,
        &["day".to_string(), "periods_on_day".to_string()],
        &per_day,
    )?;

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Styled header, banded rows, auto column widths.
fn write_grid(sheet: &mut Worksheet, headers: &[String], rows: &[Vec<String>]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }
    sheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate().take(headers.len()) {
            write_cell(sheet, row, col as u16, value, band)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(())
}

/// Numbers are written as numbers, everything else as text.
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = s.parse::<f64>() {
        sheet
            .write_with_format(row, col, num, &fmt.set_align(FormatAlign::Right))
            .map_err(to_export_error)?;
    } else {
        sheet
            .write_with_format(row, col, s, &fmt)
            .map_err(to_export_error)?;
    }
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
