#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use std::env;
use std::fs;
use std::path::PathBuf;
use ttviewer::models::cell::CellValue;
use ttviewer::models::table::Table;

/// Binary under test, with HOME pointed at a scratch dir so no user
/// configuration leaks in.
pub fn tv() -> Command {
    let mut home = env::temp_dir();
    home.push("ttviewer_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("ttviewer");
    cmd.env("HOME", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttviewer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path; any previous file is removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttviewer_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary fixture path, distinct from any `temp_out` path of the same name
pub fn fixture_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ttviewer_fixture.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Header row with mixed case and padding, period columns out of order.
pub const FIXTURE_HEADER: [&str; 5] = [" Day ", "TName", "P1", "P0", "P2"];

/// "A Sharma": Mon 1 period, Tue 2 periods. "B Verma": Mon 2 periods.
pub const FIXTURE_ROWS: [[&str; 5]; 3] = [
    ["Tue", "A Sharma", "", "Sci", "Eng"],
    ["Mon", "A Sharma", "Math", "", ""],
    ["Mon", "B Verma", "Hin", "Hin", ""],
];

pub fn write_csv_fixture(name: &str) -> String {
    let path = fixture_path(name, "csv");
    let mut content = FIXTURE_HEADER.join(",");
    content.push('\n');
    for row in FIXTURE_ROWS {
        content.push_str(&row.join(","));
        content.push('\n');
    }
    fs::write(&path, content).expect("write csv fixture");
    path
}

pub fn write_xlsx_fixture(name: &str) -> String {
    let path = fixture_path(name, "xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (c, h) in FIXTURE_HEADER.iter().enumerate() {
        sheet.write(0, c as u16, *h).expect("write header");
    }
    for (r, row) in FIXTURE_ROWS.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            if !v.is_empty() {
                sheet.write((r + 1) as u32, c as u16, *v).expect("write cell");
            }
        }
    }

    workbook.save(&path).expect("save xlsx fixture");
    path
}

/// Build a table from string literals; "" becomes an empty cell.
pub fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let rows = rows
        .iter()
        .map(|r| {
            r.iter()
                .map(|v| {
                    if v.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::from(*v)
                    }
                })
                .collect()
        })
        .collect();
    Table::new(columns.to_vec(), rows)
}

/// The fixture as an already-normalized table.
pub fn fixture_table() -> Table {
    let rows: Vec<&[&str]> = FIXTURE_ROWS.iter().map(|r| &r[..]).collect();
    table(&["day", "tname", "p1", "p0", "p2"], &rows)
}
