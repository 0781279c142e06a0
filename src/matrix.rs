//! Distance matrix and cyclic tour evaluation.

use crate::error::Error;

/// Full pairwise distance matrix over `dim` cities.
///
/// Distances are stored row-major in one flat vector, so
/// [`distance`](Self::distance) is a single indexed read. Symmetry is not
/// required: `distance(a, b)` and `distance(b, a)` may differ, and the
/// diagonal may be non-zero.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::DistanceMatrix;
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ]).unwrap();
///
/// assert_eq!(matrix.dim(), 2);
/// assert_eq!(matrix.tour_distance(&[0, 1]), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from square row data.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMatrix`] if there are fewer than two rows,
    /// any row length differs from the row count, or any entry is
    /// negative, NaN, or infinite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let dim = rows.len();
        if dim < 2 {
            return Err(Error::invalid_matrix(format!(
                "need at least 2 cities, got {dim}"
            )));
        }

        let mut data = Vec::with_capacity(dim * dim);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(Error::invalid_matrix(format!(
                    "row {i} has {} entries, expected {dim}",
                    row.len()
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::invalid_matrix(format!(
                        "entry [{i}][{j}] = {d} must be finite and non-negative"
                    )));
                }
            }
            data.extend_from_slice(row);
        }

        Ok(Self { dim, data })
    }

    /// Number of cities.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Distance from city `from` to city `to`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.dim && to < self.dim, "city index out of bounds");
        self.data[self.dim * from + to]
    }

    /// Total length of a cyclic tour.
    ///
    /// Sums the legs between consecutive cities plus the closing leg from
    /// the last city back to the first. An empty tour has length zero.
    pub fn tour_distance(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        let mut total = 0.0;
        for i in 0..n {
            total += self.distance(tour[i], tour[(i + 1) % n]);
        }
        total
    }
}
