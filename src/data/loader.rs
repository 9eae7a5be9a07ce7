use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a CSV file.  Header row gives the column
/// labels; every cell is type-guessed independently.
pub fn load_csv(path: &Path) -> Result<Table> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_table(reader).with_context(|| format!("reading {}", path.display()))
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let labels: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() != labels.len() {
            bail!(
                "CSV row {row_no}: expected {} fields, got {}",
                labels.len(),
                record.len()
            );
        }
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(Table::new(labels, rows))
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    CellValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from(text: &str) -> Table {
        let reader = csv::Reader::from_reader(text.as_bytes());
        read_table(reader).unwrap()
    }

    #[test]
    fn header_row_becomes_labels() {
        let t = table_from("Year,Area Harvested,Item\n2000,150.5,Cocoa\n");
        assert_eq!(t.labels, vec!["Year", "Area Harvested", "Item"]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn cells_are_type_guessed() {
        let t = table_from("a,b,c,d\n2000,150.5,Cocoa,\n");
        assert_eq!(t.rows[0][0], CellValue::Integer(2000));
        assert_eq!(t.rows[0][1], CellValue::Float(150.5));
        assert_eq!(t.rows[0][2], CellValue::String("Cocoa".into()));
        assert_eq!(t.rows[0][3], CellValue::Null);
    }

    #[test]
    fn ragged_row_is_an_error() {
        let reader = csv::Reader::from_reader("a,b\n1,2\n3\n".as_bytes());
        // csv reports the length mismatch itself; either way, loading fails.
        assert!(read_table(reader).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_csv(Path::new("no_such_file.csv")).is_err());
    }
}
