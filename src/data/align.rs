use std::collections::BTreeSet;

use super::model::YearSeries;

// ---------------------------------------------------------------------------
// Year alignment: shared x-axis domain for both datasets
// ---------------------------------------------------------------------------

/// The common year domain of two datasets, sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct YearDomain {
    pub years: Vec<i64>,
    /// True when the intersection was empty and the union was used instead.
    /// Surfaced in the UI so the silent switch is visible to the user.
    pub union_fallback: bool,
}

impl YearDomain {
    pub fn contains(&self, year: i64) -> bool {
        self.years.binary_search(&year).is_ok()
    }
}

/// Intersect the distinct years of two cleaned series; fall back to the
/// union when no year is shared.  `BTreeSet` keeps the result sorted.
pub fn align(a: &YearSeries, b: &YearSeries) -> YearDomain {
    let years_a: BTreeSet<i64> = a.points.iter().map(|&(y, _)| y).collect();
    let years_b: BTreeSet<i64> = b.points.iter().map(|&(y, _)| y).collect();

    let common: Vec<i64> = years_a.intersection(&years_b).copied().collect();
    if !common.is_empty() {
        return YearDomain {
            years: common,
            union_fallback: false,
        };
    }

    YearDomain {
        years: years_a.union(&years_b).copied().collect(),
        union_fallback: true,
    }
}

/// Filter a series down to the rows whose year lies in the domain.
pub fn restrict(series: &YearSeries, domain: &YearDomain) -> YearSeries {
    let points = series
        .points
        .iter()
        .copied()
        .filter(|&(y, _)| domain.contains(y))
        .collect();
    YearSeries::new(series.name.clone(), points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, years: &[i64]) -> YearSeries {
        YearSeries::new(name, years.iter().map(|&y| (y, y as f64)).collect())
    }

    #[test]
    fn overlapping_years_intersect() {
        let a = series("A", &[2000, 2001, 2002]);
        let b = series("B", &[2001, 2002, 2003]);
        let domain = align(&a, &b);
        assert_eq!(domain.years, vec![2001, 2002]);
        assert!(!domain.union_fallback);
    }

    #[test]
    fn disjoint_years_fall_back_to_union() {
        let a = series("A", &[2001, 2000]);
        let b = series("B", &[2011, 2010]);
        let domain = align(&a, &b);
        assert_eq!(domain.years, vec![2000, 2001, 2010, 2011]);
        assert!(domain.union_fallback);
    }

    #[test]
    fn restrict_keeps_only_domain_years() {
        let a = series("A", &[2000, 2001, 2002]);
        let b = series("B", &[2001, 2002, 2003]);
        let domain = align(&a, &b);
        let filtered = restrict(&a, &domain);
        assert_eq!(filtered.points, vec![(2001, 2001.0), (2002, 2002.0)]);
    }

    #[test]
    fn duplicate_years_do_not_inflate_the_domain() {
        let a = series("A", &[2000, 2000, 2001]);
        let b = series("B", &[2000, 2001, 2001]);
        let domain = align(&a, &b);
        assert_eq!(domain.years, vec![2000, 2001]);
        // restrict keeps every matching row, duplicates included
        assert_eq!(restrict(&a, &domain).len(), 3);
    }

    #[test]
    fn empty_series_yield_empty_union_domain() {
        let a = series("A", &[]);
        let b = series("B", &[]);
        let domain = align(&a, &b);
        assert!(domain.years.is_empty());
        assert!(domain.union_fallback);
    }
}
