//! The 2-D elevation matrix and its CSV parser.
//!
//! The grid is row-major, rectangular and immutable once built.  Parsing is strict: a
//! ragged row or a non-numeric cell in a data row is a hard error, we never coerce to
//! 0 or NaN.
//!
//! Published datasets usually carry a textual header row and often an unnamed index
//! column (empty first header cell).  We accept that shape the way the usual dataframe
//! readers do: when the very first cell does not parse as a number, the first row is a
//! header and is skipped, and an empty first header cell marks the first column as the
//! row index, dropped from every data row.
//!

use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

/// Everything that can go wrong between the HTTP GET and a usable `Grid`.
///
/// The transport variants are raised by the `sources` crate, the shape/parse ones here.
///
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP Error: {0}")]
    HTTP(String),
    #[error("Bad HTTP status {0}")]
    Status(u16),
    #[error("Empty CSV body")]
    Empty,
    #[error("CSV Error: {0}")]
    BadCsv(String),
    #[error("Row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("Bad value {value:?} at row {row}, column {col}")]
    BadCell {
        row: usize,
        col: usize,
        value: String,
    },
}

/// A rectangular matrix of elevation samples.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Grid(Vec<Vec<f64>>);

impl Grid {
    /// Parse CSV text into a grid.  Every data cell must be numeric and every data row
    /// must have the same number of columns.  One leading header row (detected by a
    /// non-numeric first cell) is skipped, and with it the index column when the
    /// header's first cell is empty.
    ///
    #[tracing::instrument(skip(data))]
    pub fn from_csv(data: &str) -> Result<Grid, LoadError> {
        trace!("grid::from_csv");

        // flexible: we report ragged rows ourselves, with row/column context.
        //
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(data.as_bytes());

        let mut rows: Vec<Vec<f64>> = vec![];
        let mut skip_index = false;
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|e| LoadError::BadCsv(e.to_string()))?;

            if n == 0 {
                let first = rec.get(0).unwrap_or("");
                if first.parse::<f64>().is_err() {
                    // Header row.  An unnamed first column is the row index.
                    //
                    skip_index = first.is_empty();
                    debug!("header row skipped (index column: {skip_index})");
                    continue;
                }
            }

            let row = rec
                .iter()
                .enumerate()
                .skip(usize::from(skip_index))
                .map(|(col, cell)| {
                    cell.parse::<f64>().map_err(|_| LoadError::BadCell {
                        row: n,
                        col,
                        value: cell.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(LoadError::Ragged {
                        row: n,
                        expected: first.len(),
                        got: row.len(),
                    });
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(LoadError::Empty);
        }

        debug!("{} rows, {} cols", rows.len(), rows[0].len());
        Ok(Grid(rows))
    }

    /// Number of rows
    ///
    #[inline]
    pub fn rows(&self) -> usize {
        self.0.len()
    }

    /// Number of columns
    ///
    #[inline]
    pub fn cols(&self) -> usize {
        self.0.first().map_or(0, Vec::len)
    }

    /// Borrow the underlying values, row-major.
    ///
    #[inline]
    pub fn values(&self) -> &[Vec<f64>] {
        &self.0
    }
}

impl From<Vec<Vec<f64>>> for Grid {
    fn from(value: Vec<Vec<f64>>) -> Self {
        Grid(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_grid_3x3() {
        let g = Grid::from_csv("1,2,3\n4,5,6\n7,8,9").unwrap();

        assert_eq!(3, g.rows());
        assert_eq!(3, g.cols());
        assert_eq!(
            &[
                vec![1., 2., 3.],
                vec![4., 5., 6.],
                vec![7., 8., 9.],
            ],
            g.values()
        );
    }

    #[test]
    fn test_grid_rectangular() {
        let g = Grid::from_csv("1.5, 2.25\n-3, 0.0\n1e3, 42").unwrap();

        assert_eq!(3, g.rows());
        assert_eq!(2, g.cols());
        assert!((g.values()[2][0] - 1000.0).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("1,2\n3,oops")]
    #[case("1,\n3,4")]
    #[case("alt1,alt2\n1,2\n3,oops")]
    fn test_grid_bad_cell(#[case] input: &str) {
        let g = Grid::from_csv(input);
        assert!(matches!(g, Err(LoadError::BadCell { .. })));
    }

    #[test]
    fn test_grid_header_row() {
        let g = Grid::from_csv("alt1,alt2\n1,2\n3,4").unwrap();

        assert_eq!(2, g.rows());
        assert_eq!(2, g.cols());
        assert_eq!(&[vec![1., 2.], vec![3., 4.]], g.values());
    }

    #[test]
    fn test_grid_header_and_index_column() {
        // The shape of the usual published datasets: column labels with an unnamed
        // index column in front.
        //
        let data = ",0,1,2\n0,27.80985,27.9,27.5\n1,28.0,28.1,28.2\n";
        let g = Grid::from_csv(data).unwrap();

        assert_eq!(2, g.rows());
        assert_eq!(3, g.cols());
        assert!((g.values()[0][0] - 27.80985).abs() < f64::EPSILON);
        assert!((g.values()[1][2] - 28.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_header_without_index_keeps_first_column() {
        // A named first column is data, not an index.
        //
        let g = Grid::from_csv("id,alt\n0,27.8\n1,28.0").unwrap();

        assert_eq!(2, g.rows());
        assert_eq!(2, g.cols());
        assert!((g.values()[1][0] - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grid_header_only() {
        let g = Grid::from_csv("alt1,alt2\n");
        assert!(matches!(g, Err(LoadError::Empty)));
    }

    #[test]
    fn test_grid_ragged() {
        let g = Grid::from_csv("1,2,3\n4,5");
        assert!(matches!(
            g,
            Err(LoadError::Ragged {
                row: 1,
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_grid_empty() {
        let g = Grid::from_csv("");
        assert!(matches!(g, Err(LoadError::Empty)));
    }
}
