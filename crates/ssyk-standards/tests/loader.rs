//! Integration tests for translation table loading.

use std::path::Path;

use rust_xlsxwriter::Workbook as XlsxWorkbook;
use tempfile::TempDir;

use ssyk_model::{Level, RawValue, Taxonomy};
use ssyk_standards::{
    MemorySource, StandardsError, default_source_path, load, load_from_workbook,
};

fn memory_source(taxonomy: Taxonomy) -> MemorySource {
    let skip = taxonomy.section_skip_rows();
    let mut source = MemorySource::new(format!("{}-memory", taxonomy.key()));
    for level in Level::ALL {
        let section = taxonomy.level_spec(level).section;
        source = source.with_entries(section, skip, Vec::<(RawValue, RawValue)>::new());
    }
    source
}

#[test]
fn duplicate_codes_keep_the_last_label() {
    let mut source = memory_source(Taxonomy::Ssyk96).with_entries(
        "Level_1",
        0,
        vec![("5", "A"), ("5", "B")],
    );
    let table = load(Taxonomy::Ssyk96, &mut source).unwrap();
    assert_eq!(table.lookup(Level::One, "5"), Some("B"));
}

#[test]
fn codes_are_padded_to_level_width() {
    let mut source = memory_source(Taxonomy::Ssyk2012).with_entries(
        "3-digit",
        3,
        vec![(RawValue::Number(11.0), RawValue::from("Managing directors"))],
    );
    let table = load(Taxonomy::Ssyk2012, &mut source).unwrap();
    assert_eq!(table.lookup(Level::Three, "011"), Some("Managing directors"));
    assert_eq!(table.lookup(Level::Three, "11"), None);
}

#[test]
fn missing_section_is_fatal() {
    let mut source = MemorySource::new("partial").with_entries("Level_1", 0, vec![("1", "A")]);
    let err = load(Taxonomy::Ssyk96, &mut source).unwrap_err();
    match err {
        StandardsError::SectionNotFound { origin, section } => {
            assert_eq!(origin, "partial");
            assert_eq!(section, "Level_2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn single_column_section_is_fatal() {
    let mut source = memory_source(Taxonomy::Ssyk96).with_section(
        "Level_4",
        vec![vec![RawValue::from("Code")], vec![RawValue::from("1110")]],
    );
    let err = load(Taxonomy::Ssyk96, &mut source).unwrap_err();
    assert!(matches!(err, StandardsError::SectionShape { ref section, .. } if section == "Level_4"));
    assert!(err.to_string().contains("Level_4"));
}

fn write_sections(path: &Path, sections: &[(&str, Vec<(&str, &str)>)], skip: u32) {
    let mut workbook = XlsxWorkbook::new();
    for (name, entries) in sections {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();
        if skip > 0 {
            sheet.write_string(0, 0, "Standard för svensk yrkesklassificering").unwrap();
        }
        sheet.write_string(skip, 0, "Code").unwrap();
        sheet.write_string(skip, 1, "Occupation").unwrap();
        for (idx, (code, label)) in entries.iter().enumerate() {
            let row = skip + 1 + idx as u32;
            match code.parse::<f64>() {
                Ok(number) => sheet.write_number(row, 0, number).unwrap(),
                Err(_) => sheet.write_string(row, 0, *code).unwrap(),
            };
            sheet.write_string(row, 1, *label).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn loads_ssyk2012_workbook() {
    let dir = TempDir::new().unwrap();
    let path = default_source_path(dir.path(), Taxonomy::Ssyk2012);
    write_sections(
        &path,
        &[
            ("1-digit", vec![("1", "Managers"), ("0", "Armed forces occupations")]),
            ("2-digit", vec![("11", "Chief executives"), ("Total", "All")]),
            ("3-digit", vec![("111", "Legislators")]),
            ("4-digit", vec![("1110", "Legislators"), ("0210", "Soldiers")]),
        ],
        3,
    );

    let table = load_from_workbook(&path, Taxonomy::Ssyk2012).unwrap();
    assert_eq!(table.taxonomy, Taxonomy::Ssyk2012);
    assert_eq!(table.lookup(Level::One, "1"), Some("Managers"));
    assert_eq!(table.lookup(Level::One, "0"), Some("Armed forces occupations"));
    assert_eq!(table.level_len(Level::Two), 1);
    assert_eq!(table.lookup(Level::Four, "0210"), Some("Soldiers"));
}

#[test]
fn loads_ssyk96_workbook_from_first_row() {
    let dir = TempDir::new().unwrap();
    let path = default_source_path(dir.path(), Taxonomy::Ssyk96);
    write_sections(
        &path,
        &[
            ("Level_1", vec![("1", "Legislators, senior officials and managers")]),
            ("Level_2", vec![("11", "Legislators and senior government officials")]),
            ("Level_3", vec![("111", "Legislators")]),
            ("Level_4", vec![("1110", "Legislators")]),
        ],
        0,
    );

    let table = load_from_workbook(&path, Taxonomy::Ssyk96).unwrap();
    assert_eq!(
        table.lookup(Level::Two, "11"),
        Some("Legislators and senior government officials")
    );
    assert_eq!(table.level_len(Level::Four), 1);
}

#[test]
fn workbook_missing_a_level_sheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = default_source_path(dir.path(), Taxonomy::Ssyk96);
    write_sections(&path, &[("Level_1", vec![("1", "Managers")])], 0);

    let err = load_from_workbook(&path, Taxonomy::Ssyk96).unwrap_err();
    assert!(matches!(err, StandardsError::SectionNotFound { ref section, .. } if section == "Level_2"));
}

#[test]
fn missing_workbook_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = load_from_workbook(&dir.path().join("absent.xlsx"), Taxonomy::Ssyk2012).unwrap_err();
    assert!(matches!(err, StandardsError::Open { .. }));
    assert!(err.to_string().contains("absent.xlsx"));
}
