use super::model::{CellValue, Table, YearSeries};

// ---------------------------------------------------------------------------
// Cleaning: numeric coercion + dropping incomplete rows
// ---------------------------------------------------------------------------

/// Coerce the detected year and area columns to numeric, then drop every row
/// missing either value.  Year cells become integers, area cells floats;
/// unparseable cells turn into `Null` and take their row with them.  Columns
/// outside the two roles are left untouched.
///
/// Cleaning an already-clean table is a no-op.
pub fn clean(table: &Table, year_col: &str, area_col: &str) -> Table {
    let year_idx = table.column_index(year_col);
    let area_idx = table.column_index(area_col);

    let (Some(year_idx), Some(area_idx)) = (year_idx, area_idx) else {
        // Roles come from detect_roles on the same table, so this only
        // happens if a caller passes mismatched labels; nothing to keep.
        return Table::new(table.labels.clone(), Vec::new());
    };

    let rows = table
        .rows
        .iter()
        .filter_map(|row| {
            let year = row[year_idx].to_year()?;
            let area = row[area_idx].to_numeric()?;
            let mut row = row.clone();
            row[year_idx] = CellValue::Integer(year);
            row[area_idx] = CellValue::Float(area);
            Some(row)
        })
        .collect();

    Table::new(table.labels.clone(), rows)
}

/// Extract the (year, value) pairs of a cleaned table as a plottable series.
pub fn extract_series(table: &Table, year_col: &str, area_col: &str, name: &str) -> YearSeries {
    let points = match (table.column_index(year_col), table.column_index(area_col)) {
        (Some(yi), Some(ai)) => table
            .rows
            .iter()
            .filter_map(|row| Some((row[yi].to_year()?, row[ai].to_numeric()?)))
            .collect(),
        _ => Vec::new(),
    };
    YearSeries::new(name, points)
}
