use super::model::{Record, Series};

// ---------------------------------------------------------------------------
// Range predicate on the x column
// ---------------------------------------------------------------------------

/// Closed interval `[min, max]`; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XRange {
    pub min: f64,
    pub max: f64,
}

impl XRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

/// Return indices of records whose x lies inside `range`, in series order.
pub fn filtered_indices(series: &Series, range: &XRange) -> Vec<usize> {
    series
        .iter()
        .enumerate()
        .filter(|(_, rec)| range.contains(rec.x))
        .map(|(i, _)| i)
        .collect()
}

/// Copy out the records inside `range`, preserving order.
pub fn select(series: &Series, range: &XRange) -> Vec<Record> {
    filtered_indices(series, range)
        .into_iter()
        .map(|i| series.records()[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(xs: &[f64]) -> Series {
        Series::from_records(xs.iter().map(|&x| Record::new(x, x / 10.0)).collect())
    }

    #[test]
    fn bounds_are_inclusive() {
        let range = XRange::new(200.0, 400.0);
        assert!(range.contains(200.0));
        assert!(range.contains(400.0));
        assert!(!range.contains(199.999));
        assert!(!range.contains(400.001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn keeps_matching_records_in_order() {
        let s = series(&[450.0, 200.0, 150.0, 400.0, 300.0]);
        let range = XRange::new(200.0, 400.0);
        assert_eq!(filtered_indices(&s, &range), vec![1, 3, 4]);

        let xs: Vec<f64> = select(&s, &range).iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![200.0, 400.0, 300.0]);
    }

    #[test]
    fn empty_series_selects_nothing() {
        let range = XRange::new(200.0, 400.0);
        assert!(select(&Series::default(), &range).is_empty());
    }
}
