//! Integration tests for workbook and table reading.

use std::path::Path;

use polars::prelude::DataType;
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::TempDir;

use ssyk_ingest::{IngestError, Workbook, read_table};
use ssyk_model::RawValue;

enum Cell {
    Text(&'static str),
    Num(f64),
    Blank,
}

fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = XlsxWorkbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (r, c) = (row_idx as u32, col_idx as u16);
                match cell {
                    Cell::Text(text) => {
                        sheet.write_string(r, c, *text).unwrap();
                    }
                    Cell::Num(value) => {
                        sheet.write_number(r, c, *value).unwrap();
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn reads_first_sheet_as_typed_frame() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("daioe_ssyk96.xlsx");
    write_workbook(
        &path,
        &[
            (
                "Data",
                vec![
                    vec![Cell::Text("year"), Cell::Text("ssyk96_1"), Cell::Text("ssyk96_2")],
                    vec![Cell::Num(2020.0), Cell::Num(1.0), Cell::Text("11 Lagstiftare")],
                    vec![Cell::Num(2021.0), Cell::Blank, Cell::Num(97.0)],
                ],
            ),
            ("Other", vec![vec![Cell::Text("ignored")]]),
        ],
    );

    let df = read_table(&path).unwrap();
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 3);
    assert_eq!(df.column("year").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("ssyk96_1").unwrap().null_count(), 1);
    let level_two = df.column("ssyk96_2").unwrap().str().unwrap();
    assert_eq!(level_two.get(0), Some("11 Lagstiftare"));
    assert_eq!(level_two.get(1), Some("97"));
}

#[test]
fn sheet_rows_use_absolute_positions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ssyk2012_en.xlsx");
    write_workbook(
        &path,
        &[(
            "1-digit",
            vec![
                vec![Cell::Blank],
                vec![Cell::Blank],
                vec![Cell::Blank, Cell::Text("note")],
                vec![Cell::Text("Code"), Cell::Text("Title")],
                vec![Cell::Num(1.0), Cell::Text("Managers")],
            ],
        )],
    );

    let mut workbook = Workbook::open(&path).unwrap();
    let rows = workbook.sheet_rows("1-digit").unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], vec![RawValue::Missing, RawValue::Missing]);
    assert_eq!(rows[4][0], RawValue::Number(1.0));
    assert_eq!(rows[4][1], RawValue::Text("Managers".to_string()));
}

#[test]
fn missing_sheet_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ssyk96_en.xlsx");
    write_workbook(&path, &[("Level_1", vec![vec![Cell::Text("Code")]])]);

    let mut workbook = Workbook::open(&path).unwrap();
    let err = workbook.sheet_rows("Level_2").unwrap_err();
    assert!(matches!(err, IngestError::SheetNotFound { ref sheet, .. } if sheet == "Level_2"));
}

#[test]
fn missing_input_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = read_table(&dir.path().join("absent.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}
