//! Time-keyed tables built by joining series.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::error::SeriesError;
use crate::join::JoinKind;
use crate::series::TimeSeries;

/// A named column of join results.
///
/// `None` marks a cell that is absent under the chosen join kind. A present
/// cell whose underlying data is missing carries `Some(NaN)` instead, so the
/// two conditions stay distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Option<f64>>,
}

impl Column {
    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column cells.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// A table of named value columns keyed by a shared time column.
///
/// Invariant: rows are sorted ascending by time after every constructor and
/// every join.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedTable {
    times: Vec<NaiveDateTime>,
    columns: Vec<Column>,
}

impl CombinedTable {
    /// Creates a single-column table from a series, sorted ascending by time.
    pub fn from_series(series: &TimeSeries) -> Self {
        let mut sorted = series.clone();
        sorted.sort_by_time();
        Self {
            times: sorted.times().to_vec(),
            columns: vec![Column {
                name: sorted.name().to_string(),
                values: sorted.values().iter().map(|&v| Some(v)).collect(),
            }],
        }
    }

    /// Returns the time column.
    pub fn times(&self) -> &[NaiveDateTime] {
        &self.times
    }

    /// Returns all value columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the value column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Returns the column with the given name, if present.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if rows are in ascending (non-decreasing) time order.
    pub fn is_sorted_by_time(&self) -> bool {
        self.times.windows(2).all(|w| w[0] <= w[1])
    }

    /// Joins a series onto this table on the time key.
    ///
    /// Duplicate timestamps on either side fan out into one output row per
    /// matching pair. The result is sorted ascending by time; for equal
    /// timestamps the pre-sort emission order is preserved (stable sort).
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DuplicateColumn`] if the table already has a
    /// column named like the series.
    pub fn join_series(
        &self,
        other: &TimeSeries,
        kind: JoinKind,
    ) -> Result<CombinedTable, SeriesError> {
        if self.column(other.name()).is_some() {
            return Err(SeriesError::DuplicateColumn {
                name: other.name().to_string(),
            });
        }

        let mut other_index: HashMap<NaiveDateTime, Vec<usize>> = HashMap::new();
        for (j, &t) in other.times().iter().enumerate() {
            other_index.entry(t).or_default().push(j);
        }

        let n_cols = self.columns.len();
        // Each row: (time, existing column cells, joined cell).
        let mut rows: Vec<(NaiveDateTime, Vec<Option<f64>>, Option<f64>)> = Vec::new();

        match kind {
            JoinKind::Inner | JoinKind::Left | JoinKind::Outer => {
                for i in 0..self.times.len() {
                    let t = self.times[i];
                    match other_index.get(&t) {
                        Some(matches) => {
                            for &j in matches {
                                rows.push((t, self.row(i), Some(other.values()[j])));
                            }
                        }
                        None => {
                            if kind != JoinKind::Inner {
                                rows.push((t, self.row(i), None));
                            }
                        }
                    }
                }
                if kind == JoinKind::Outer {
                    let left_times: std::collections::HashSet<NaiveDateTime> =
                        self.times.iter().copied().collect();
                    for (j, &t) in other.times().iter().enumerate() {
                        if !left_times.contains(&t) {
                            rows.push((t, vec![None; n_cols], Some(other.values()[j])));
                        }
                    }
                }
            }
            JoinKind::Right => {
                let mut left_index: HashMap<NaiveDateTime, Vec<usize>> = HashMap::new();
                for (i, &t) in self.times.iter().enumerate() {
                    left_index.entry(t).or_default().push(i);
                }
                for (j, &t) in other.times().iter().enumerate() {
                    match left_index.get(&t) {
                        Some(matches) => {
                            for &i in matches {
                                rows.push((t, self.row(i), Some(other.values()[j])));
                            }
                        }
                        None => rows.push((t, vec![None; n_cols], Some(other.values()[j]))),
                    }
                }
            }
        }

        rows.sort_by_key(|&(t, _, _)| t);

        let times: Vec<NaiveDateTime> = rows.iter().map(|&(t, _, _)| t).collect();
        let mut columns: Vec<Column> = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, col)| Column {
                name: col.name.clone(),
                values: rows.iter().map(|(_, cells, _)| cells[c]).collect(),
            })
            .collect();
        columns.push(Column {
            name: other.name().to_string(),
            values: rows.iter().map(|&(_, _, v)| v).collect(),
        });

        Ok(CombinedTable { times, columns })
    }

    /// Returns the existing column cells at row `i`.
    fn row(&self, i: usize) -> Vec<Option<f64>> {
        self.columns.iter().map(|c| c.values[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn series(name: &str, days: &[u32], values: &[f64]) -> TimeSeries {
        TimeSeries::new(name, days.iter().map(|&d| dt(d)).collect(), values.to_vec()).unwrap()
    }

    #[test]
    fn from_series_sorts_ascending() {
        let t = CombinedTable::from_series(&series("a", &[3, 1, 2], &[3.0, 1.0, 2.0]));
        assert!(t.is_sorted_by_time());
        assert_eq!(t.times(), &[dt(1), dt(2), dt(3)]);
        assert_eq!(t.column("a").unwrap().values(), &[Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn left_join_keeps_all_left_rows() {
        let left = CombinedTable::from_series(&series("a", &[1, 2, 3], &[1.0, 2.0, 3.0]));
        let right = series("b", &[2, 3, 4], &[20.0, 30.0, 40.0]);
        let t = left.join_series(&right, JoinKind::Left).unwrap();

        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.column("a").unwrap().values(), &[Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(t.column("b").unwrap().values(), &[None, Some(20.0), Some(30.0)]);
    }

    #[test]
    fn inner_join_keeps_only_matches() {
        let left = CombinedTable::from_series(&series("a", &[1, 2, 3], &[1.0, 2.0, 3.0]));
        let right = series("b", &[2, 3, 4], &[20.0, 30.0, 40.0]);
        let t = left.join_series(&right, JoinKind::Inner).unwrap();

        assert_eq!(t.times(), &[dt(2), dt(3)]);
        assert_eq!(t.column("a").unwrap().values(), &[Some(2.0), Some(3.0)]);
        assert_eq!(t.column("b").unwrap().values(), &[Some(20.0), Some(30.0)]);
    }

    #[test]
    fn right_join_keeps_all_right_rows() {
        let left = CombinedTable::from_series(&series("a", &[1, 2], &[1.0, 2.0]));
        let right = series("b", &[2, 4], &[20.0, 40.0]);
        let t = left.join_series(&right, JoinKind::Right).unwrap();

        assert_eq!(t.times(), &[dt(2), dt(4)]);
        assert_eq!(t.column("a").unwrap().values(), &[Some(2.0), None]);
        assert_eq!(t.column("b").unwrap().values(), &[Some(20.0), Some(40.0)]);
    }

    #[test]
    fn outer_join_keeps_everything() {
        let left = CombinedTable::from_series(&series("a", &[1, 3], &[1.0, 3.0]));
        let right = series("b", &[2, 3], &[20.0, 30.0]);
        let t = left.join_series(&right, JoinKind::Outer).unwrap();

        assert_eq!(t.times(), &[dt(1), dt(2), dt(3)]);
        assert_eq!(t.column("a").unwrap().values(), &[Some(1.0), None, Some(3.0)]);
        assert_eq!(t.column("b").unwrap().values(), &[None, Some(20.0), Some(30.0)]);
    }

    #[test]
    fn duplicate_right_timestamps_fan_out() {
        let left = CombinedTable::from_series(&series("a", &[1, 2], &[1.0, 2.0]));
        let right = series("b", &[2, 2], &[20.0, 21.0]);
        let t = left.join_series(&right, JoinKind::Left).unwrap();

        // Row for day 1 plus two fan-out rows for day 2.
        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.times(), &[dt(1), dt(2), dt(2)]);
        assert_eq!(t.column("a").unwrap().values(), &[Some(1.0), Some(2.0), Some(2.0)]);
        assert_eq!(t.column("b").unwrap().values(), &[None, Some(20.0), Some(21.0)]);
    }

    #[test]
    fn duplicate_column_name_is_rejected() {
        let left = CombinedTable::from_series(&series("a", &[1], &[1.0]));
        let err = left.join_series(&series("a", &[1], &[2.0]), JoinKind::Left).unwrap_err();
        assert_eq!(err, SeriesError::DuplicateColumn { name: "a".to_string() });
    }

    #[test]
    fn join_output_is_sorted_even_from_unsorted_inputs() {
        let left = CombinedTable::from_series(&series("a", &[3, 1], &[3.0, 1.0]));
        let right = series("b", &[2, 1], &[20.0, 10.0]);
        let t = left.join_series(&right, JoinKind::Outer).unwrap();
        assert!(t.is_sorted_by_time());
        assert_eq!(t.times(), &[dt(1), dt(2), dt(3)]);
    }

    #[test]
    fn nan_values_stay_present_not_absent() {
        let left = CombinedTable::from_series(&series("a", &[1], &[1.0]));
        let right = series("b", &[1], &[f64::NAN]);
        let t = left.join_series(&right, JoinKind::Left).unwrap();
        let cell = t.column("b").unwrap().values()[0];
        assert!(cell.is_some());
        assert!(cell.unwrap().is_nan());
    }

    #[test]
    fn column_lookup_and_names() {
        let left = CombinedTable::from_series(&series("a", &[1], &[1.0]));
        let t = left.join_series(&series("b", &[1], &[2.0]), JoinKind::Left).unwrap();
        assert_eq!(t.column_names(), vec!["a", "b"]);
        assert!(t.column("missing").is_none());
    }

    #[test]
    fn join_onto_empty_left() {
        let left = CombinedTable::from_series(&series("a", &[], &[]));
        let right = series("b", &[1], &[10.0]);

        let l = left.join_series(&right, JoinKind::Left).unwrap();
        assert_eq!(l.num_rows(), 0);

        let o = left.join_series(&right, JoinKind::Outer).unwrap();
        assert_eq!(o.num_rows(), 1);
        assert_eq!(o.column("a").unwrap().values(), &[None]);
    }
}
