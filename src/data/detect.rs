use super::model::Table;

// ---------------------------------------------------------------------------
// Keyword column detection
// ---------------------------------------------------------------------------

/// Fragments that mark a column as the year axis.
pub const YEAR_KEYWORDS: &[&str] = &["year"];

/// Fragments that mark a column as the area-harvested metric.
pub const AREA_KEYWORDS: &[&str] = &["area", "harvest", "harvested"];

/// The only fatal error in the pipeline: a required column could not be
/// resolved, so nothing downstream can run for that dataset.
#[derive(Debug)]
pub struct ColumnNotFound {
    pub role: &'static str,
    pub source: String,
    pub keywords: &'static [&'static str],
}

impl std::fmt::Display for ColumnNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not detect a {} column in {}: no header contains any of {:?}",
            self.role, self.source, self.keywords
        )
    }
}

impl std::error::Error for ColumnNotFound {}

/// The resolved column labels for one dataset.
#[derive(Debug, Clone)]
pub struct DetectedColumns {
    pub year: String,
    pub area: String,
}

/// Return the first label (in original column order) whose lowercased form
/// contains any of the keyword fragments.  Ties break on column order, never
/// on fragment order.
pub fn find_column<'a>(labels: &'a [String], keywords: &[&str]) -> Option<&'a str> {
    labels
        .iter()
        .find(|label| {
            let low = label.to_lowercase();
            keywords.iter().any(|k| low.contains(k))
        })
        .map(|label| label.as_str())
}

/// Resolve the year and area roles for a table, failing with the source name
/// in the message so the user knows which file to fix.
pub fn detect_roles(table: &Table, source: &str) -> Result<DetectedColumns, ColumnNotFound> {
    let year = find_column(&table.labels, YEAR_KEYWORDS).ok_or_else(|| ColumnNotFound {
        role: "year",
        source: source.to_string(),
        keywords: YEAR_KEYWORDS,
    })?;
    let area = find_column(&table.labels, AREA_KEYWORDS).ok_or_else(|| ColumnNotFound {
        role: "area-harvested",
        source: source.to_string(),
        keywords: AREA_KEYWORDS,
    })?;
    Ok(DetectedColumns {
        year: year.to_string(),
        area: area.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let cols = labels(&["Item", "YEAR", "Value"]);
        assert_eq!(find_column(&cols, YEAR_KEYWORDS), Some("YEAR"));

        let cols = labels(&["Item", "Area Harvested"]);
        assert_eq!(find_column(&cols, AREA_KEYWORDS), Some("Area Harvested"));
    }

    #[test]
    fn detection_ignores_column_position() {
        let cols = labels(&["Item", "Value", "Area Harvested", "Year"]);
        assert_eq!(find_column(&cols, YEAR_KEYWORDS), Some("Year"));
        assert_eq!(find_column(&cols, AREA_KEYWORDS), Some("Area Harvested"));
    }

    #[test]
    fn first_match_wins_by_column_order() {
        // "harvested" appears later as a column but "area" matches earlier;
        // column order decides, not fragment priority.
        let cols = labels(&["Total Harvested", "Area"]);
        assert_eq!(find_column(&cols, AREA_KEYWORDS), Some("Total Harvested"));
    }

    #[test]
    fn no_match_returns_none() {
        let cols = labels(&["Item", "Value"]);
        assert_eq!(find_column(&cols, YEAR_KEYWORDS), None);
    }

    #[test]
    fn missing_year_role_is_fatal() {
        let table = Table::new(labels(&["Item", "Area Harvested"]), Vec::new());
        let err = detect_roles(&table, "data_de_Ghana.csv").unwrap_err();
        assert_eq!(err.role, "year");
        assert!(err.to_string().contains("data_de_Ghana.csv"));
    }

    #[test]
    fn both_roles_resolve() {
        let table = Table::new(labels(&["Year", "Area Harvested"]), Vec::new());
        let roles = detect_roles(&table, "x.csv").unwrap();
        assert_eq!(roles.year, "Year");
        assert_eq!(roles.area, "Area Harvested");
    }
}
