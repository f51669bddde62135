mod common;
use common::{temp_out, write_csv_fixture, write_xlsx_fixture};

use std::fs;
use std::path::PathBuf;
use rust_xlsxwriter::Workbook;
use ttviewer::errors::AppError;
use ttviewer::models::cell::CellValue;
use ttviewer::timetable::Timetable;
use ttviewer::timetable::aggregate::aggregate;
use ttviewer::timetable::loader::{Source, Upload, load};

#[test]
fn test_missing_path_and_no_upload_is_no_table() {
    let source = Source::from_path(PathBuf::from("/definitely/not/here/timetable.xlsx"));
    assert!(load(&source).expect("no error").is_none());
    assert!(load(&Source::default()).expect("no error").is_none());
}

#[test]
fn test_open_without_source_is_source_unavailable() {
    let source = Source::from_path("/definitely/not/here/timetableNov25.xlsx");
    match Timetable::open(&source, 9) {
        Err(AppError::SourceUnavailable(name)) => assert!(name.contains("timetableNov25.xlsx")),
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[test]
fn test_xlsx_headers_are_trimmed_and_lowercased() {
    let path = write_xlsx_fixture("loader_xlsx");
    let table = load(&Source::from_path(&path))
        .expect("load ok")
        .expect("table present");

    assert_eq!(table.columns(), ["day", "tname", "p1", "p0", "p2"]);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_csv_file_loads_like_xlsx() {
    let xlsx = write_xlsx_fixture("loader_cmp_xlsx");
    let csv = write_csv_fixture("loader_cmp_csv");

    let a = Timetable::open(&Source::from_path(&xlsx), 9).expect("xlsx timetable");
    let b = Timetable::open(&Source::from_path(&csv), 9).expect("csv timetable");

    assert_eq!(a.periods(), b.periods());
    assert_eq!(a.teacher_names(), b.teacher_names());
    assert_eq!(a.periods(), ["p0", "p1", "p2"]);
}

#[test]
fn test_upload_takes_precedence_over_path() {
    let csv = write_csv_fixture("loader_upload");
    let bytes = fs::read(&csv).expect("read fixture");

    let source = Source {
        path: Some(PathBuf::from("/definitely/not/here/timetableNov25.xlsx")),
        upload: Some(Upload::new("upload.csv", bytes)),
        sheet: None,
    };

    let tt = Timetable::open(&source, 9).expect("upload used");
    assert_eq!(tt.teacher_names(), vec!["A Sharma", "B Verma"]);
}

#[test]
fn test_upload_without_extension_is_sniffed() {
    let xlsx = write_xlsx_fixture("loader_sniff");
    let bytes = fs::read(&xlsx).expect("read fixture");

    let tt = Timetable::open(&Source::from_upload(Upload::new("<stdin>", bytes)), 9)
        .expect("sniffed workbook");
    assert_eq!(tt.table().len(), 3);
}

#[test]
fn test_missing_columns_after_load() {
    let path = temp_out("loader_missing", "csv");
    fs::write(&path, "Day,Teacher,P0\nMon,X,a\n").expect("write csv");

    match Timetable::open(&Source::from_path(&path), 9) {
        Err(AppError::MissingColumns(cols)) => assert_eq!(cols, vec!["tname"]),
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn test_blank_rows_skipped_and_blank_headers_named() {
    let path = temp_out("loader_blank", "csv");
    fs::write(&path, "day,tname,,p0\nMon,X,,a\n,,,\nTue,X,,\n").expect("write csv");

    let table = load(&Source::from_path(&path))
        .expect("load ok")
        .expect("table present");
    assert_eq!(table.columns()[2], "unnamed: 2");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_unknown_sheet_is_an_error() {
    let path = write_xlsx_fixture("loader_sheet");
    let source = Source {
        sheet: Some("Nope".into()),
        ..Source::from_path(&path)
    };
    assert!(matches!(load(&source), Err(AppError::SheetNotFound(s)) if s == "Nope"));
}

#[test]
fn test_repeated_loads_are_identical() {
    let path = write_xlsx_fixture("loader_repeat");
    let source = Source::from_path(&path);
    let a = load(&source).expect("first");
    let b = load(&source).expect("second");
    assert_eq!(a, b);
}

#[test]
fn test_csv_missing_markers_load_as_empty_and_are_not_counted() {
    let path = temp_out("loader_markers", "csv");
    fs::write(
        &path,
        "day,tname,p0,p1,p2,p3\nMon,X,NaN,NA,N/A,Math\nTue,X,nan,NULL,#N/A,None\n",
    )
    .expect("write csv");

    let tt = Timetable::open(&Source::from_path(&path), 9).expect("timetable");
    let first = tt.table().rows().next().expect("first row");
    assert_eq!(first.get("p0"), &CellValue::Empty);
    assert_eq!(first.get("p3"), &CellValue::from("Math"));

    let summary = aggregate(tt.table(), tt.periods());
    assert_eq!(summary.total, 1);
    assert_eq!(summary.per_day.len(), 2);
    assert_eq!(summary.per_day[1].periods_on_day, 0);
}

#[test]
fn test_xlsx_missing_markers_are_not_counted() {
    let path = temp_out("loader_markers", "xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let grid = [
        ["day", "tname", "p0", "p1", "p2"],
        ["Mon", "X", "NaN", "N/A", "Math"],
        ["Tue", "X", "NA", "Sci", "#N/A"],
    ];
    for (r, row) in grid.iter().enumerate() {
        for (c, v) in row.iter().enumerate() {
            sheet.write(r as u32, c as u16, *v).expect("write cell");
        }
    }
    workbook.save(&path).expect("save xlsx");

    let tt = Timetable::open(&Source::from_path(&path), 9).expect("timetable");
    let summary = aggregate(tt.table(), tt.periods());
    assert_eq!(summary.total, 2);
    assert_eq!(summary.per_day[0].periods_on_day, 1);
    assert_eq!(summary.per_day[1].periods_on_day, 1);
}
