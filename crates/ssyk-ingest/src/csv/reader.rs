//! CSV file reading.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// Every column is read as `String` so cells reach the translator exactly as
/// written: `0110` keeps its leading zero and a text cell deep in an
/// otherwise numeric column does not fail the read. Empty fields are null.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table() {
        let file = create_temp_csv("id,ssyk2012_4\n1,2512\n2,9999 Okänd\n");
        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 2);
        assert_eq!(df.width(), 2);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["id", "ssyk2012_4"]);
    }

    #[test]
    fn test_read_csv_table_keeps_cells_as_written() {
        let mut content = String::from("ssyk2012_4,year\n");
        for _ in 0..150 {
            content.push_str("2512,2020\n");
        }
        content.push_str("9999 Okänd,2021\n0110,\n");
        let file = create_temp_csv(&content);

        let df = read_csv_table(file.path()).unwrap();

        assert_eq!(df.height(), 152);
        let codes = df.column("ssyk2012_4").unwrap();
        assert_eq!(codes.dtype(), &DataType::String);
        let codes = codes.str().unwrap();
        assert_eq!(codes.get(0), Some("2512"));
        assert_eq!(codes.get(150), Some("9999 Okänd"));
        assert_eq!(codes.get(151), Some("0110"));
        let year = df.column("year").unwrap().str().unwrap();
        assert_eq!(year.get(0), Some("2020"));
        assert_eq!(year.get(151), None);
    }

    #[test]
    fn test_read_csv_table_missing_file() {
        let result = read_csv_table(Path::new("/nonexistent/input.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
