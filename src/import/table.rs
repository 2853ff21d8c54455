//! CSV data table importer
//!
//! Reads the operator-populated table (the template written by
//! `export::template`) into data rows, one per CSV record.

use super::ImportError;
use crate::models::DataRow;
use std::io::Read;
use std::path::Path;

/// Read data rows from CSV content with a header row.
///
/// Records shorter than the header leave the trailing columns absent from the
/// row; extra cells without a header are ignored.
pub fn read_data_rows<R: Read>(reader: R) -> Result<Vec<DataRow>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ImportError::Table(format!("Failed to read header row: {}", e)))?
        .clone();

    reader
        .records()
        .enumerate()
        .map(|(index, record)| -> Result<DataRow, ImportError> {
            let record = record.map_err(|e| {
                ImportError::Table(format!("Failed to read data row {}: {}", index + 1, e))
            })?;
            Ok(headers.iter().zip(record.iter()).collect())
        })
        .collect()
}

/// Read data rows from a CSV file
pub fn read_data_rows_from_path(path: &Path) -> Result<Vec<DataRow>, ImportError> {
    let file = std::fs::File::open(path)
        .map_err(|e| ImportError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    read_data_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_rows_in_order() {
        let csv = "form-writer form id,Name,Age\nSample,1,Old\nB,Bob,Young\n";
        let rows = read_data_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("form-writer form id"), Some("Sample"));
        assert_eq!(rows[1].get("Name"), Some("Bob"));
    }

    #[test]
    fn test_short_record_leaves_columns_absent() {
        let csv = "id,Name,Age\n7,Ada\n";
        let rows = read_data_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].get("Name"), Some("Ada"));
        assert_eq!(rows[0].get("Age"), None);
    }

    #[test]
    fn test_quoted_cells() {
        let csv = "id,Address\n1,\"1 Main St, Springfield\"\n";
        let rows = read_data_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].get("Address"), Some("1 Main St, Springfield"));
    }
}
