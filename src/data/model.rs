use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell in a loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring what a CSV column can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Coerce the value to `f64`. Numeric-looking strings parse; anything
    /// else (including non-finite floats) is treated as missing.
    pub fn to_numeric(&self) -> Option<f64> {
        let v = match self {
            CellValue::Integer(i) => *i as f64,
            CellValue::Float(v) => *v,
            CellValue::String(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Null => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Coerce to an integer year (numeric coercion, then truncation).
    pub fn to_year(&self) -> Option<i64> {
        self.to_numeric().map(|v| v as i64)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Table – one loaded CSV file
// ---------------------------------------------------------------------------

/// An ordered set of named columns holding raw row data.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column labels in file order.
    pub labels: Vec<String>,
    /// Row-major cells; every row has `labels.len()` entries.
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(labels: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Table { labels, rows }
    }

    /// Index of a column by exact label.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// YearSeries – (year, value) observations from a cleaned table
// ---------------------------------------------------------------------------

/// Paired (year, area) observations for one dataset, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    /// Display name of the dataset (e.g. "Ghana").
    pub name: String,
    /// One `(year, value)` pair per surviving row, in row order.
    pub points: Vec<(i64, f64)>,
}

impl YearSeries {
    pub fn new(name: impl Into<String>, points: Vec<(i64, f64)>) -> Self {
        YearSeries {
            name: name.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
