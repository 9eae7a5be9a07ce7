use std::path::Path;

use anyhow::{Context, Result};

use super::align::{YearDomain, align, restrict};
use super::clean::{clean, extract_series};
use super::detect::detect_roles;
use super::loader::load_csv;
use super::model::YearSeries;

// ---------------------------------------------------------------------------
// Pipeline composition: two CSVs in, one aligned comparison out
// ---------------------------------------------------------------------------

/// Everything the four panels need for one side of the comparison.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    /// Filtered view: rows whose year lies in the shared domain.
    pub series: YearSeries,
    /// Resolved column labels, kept for the UI summary line.
    pub year_col: String,
    pub area_col: String,
}

/// The fully prepared comparison consumed by the renderer.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: PreparedDataset,
    pub right: PreparedDataset,
    pub domain: YearDomain,
}

/// Run the whole pipeline for both files: load, detect roles, clean, align,
/// filter.  A detection miss on either file aborts with `ColumnNotFound`
/// before any cleaning happens.
pub fn load_comparison(left_path: &Path, right_path: &Path) -> Result<Comparison> {
    let left = prepare_one(left_path, "Ghana")?;
    let right = prepare_one(right_path, "Ivory Coast")?;

    let domain = align(&left.series, &right.series);
    if domain.union_fallback {
        log::warn!(
            "no common years between the datasets; falling back to the union ({} years)",
            domain.years.len()
        );
    } else {
        log::info!("aligned on {} common years", domain.years.len());
    }

    Ok(Comparison {
        left: PreparedDataset {
            series: restrict(&left.series, &domain),
            ..left
        },
        right: PreparedDataset {
            series: restrict(&right.series, &domain),
            ..right
        },
        domain,
    })
}

fn prepare_one(path: &Path, name: &str) -> Result<PreparedDataset> {
    let source = path.display().to_string();
    let table = load_csv(path)?;
    log::info!("{source}: {} rows, columns {:?}", table.len(), table.labels);

    let roles = detect_roles(&table, &source)
        .with_context(|| format!("preparing {name} dataset"))?;
    log::info!(
        "{source}: year column {:?}, area column {:?}",
        roles.year,
        roles.area
    );

    let cleaned = clean(&table, &roles.year, &roles.area);
    if cleaned.len() < table.len() {
        log::info!(
            "{source}: dropped {} rows with missing year/area values",
            table.len() - cleaned.len()
        );
    }

    Ok(PreparedDataset {
        series: extract_series(&cleaned, &roles.year, &roles.area, name),
        year_col: roles.year,
        area_col: roles.area,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(text.as_bytes()).unwrap();
        path
    }

    #[test]
    fn end_to_end_alignment() {
        let dir = std::env::temp_dir().join("harvest_compare_prepare_test");
        std::fs::create_dir_all(&dir).unwrap();

        let left = write_csv(
            &dir,
            "left.csv",
            "Year,Area Harvested\n2000,10\n2001,20\n2002,bad\n",
        );
        let right = write_csv(&dir, "right.csv", "year,harvest\n2001,5\n2005,6\n");

        let cmp = load_comparison(&left, &right).unwrap();
        assert_eq!(cmp.domain.years, vec![2001]);
        assert!(!cmp.domain.union_fallback);
        assert_eq!(cmp.left.series.points, vec![(2001, 20.0)]);
        assert_eq!(cmp.right.series.points, vec![(2001, 5.0)]);
        assert_eq!(cmp.right.year_col, "year");
    }

    #[test]
    fn detection_miss_aborts_the_pipeline() {
        let dir = std::env::temp_dir().join("harvest_compare_prepare_test_miss");
        std::fs::create_dir_all(&dir).unwrap();

        let left = write_csv(&dir, "left.csv", "Item,Value\nCocoa,1\n");
        let right = write_csv(&dir, "right.csv", "Year,Area Harvested\n2000,1\n");

        let err = load_comparison(&left, &right).unwrap_err();
        assert!(format!("{err:#}").contains("could not detect a year column"));
    }
}
