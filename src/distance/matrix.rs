//! Dense distance matrix.

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// A dense n×n distance matrix stored in row-major order.
///
/// `get(a, b)` is the cost of travelling from city `a` to city `b`. Entries
/// are not required to be symmetric, and the diagonal is not checked.
///
/// Serializes as a list of rows, and deserialization goes through the same
/// shape check as [`DistanceMatrix::from_rows`].
///
/// # Examples
///
/// ```
/// use tsp_ls::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 3.0],
///     vec![3.0, 0.0],
/// ]).expect("square");
/// assert_eq!(dm.get(0, 1), 3.0);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from a grid of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] for ragged or non-square input and
    /// [`MatrixError::InvalidEntry`] if any entry is NaN.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|v| v.is_nan()) {
                return Err(MatrixError::InvalidEntry { row, col });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DataLength`] if the data length doesn't match
    /// `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(MatrixError::DataLength {
                expected: size * size,
                found: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.size && to < self.size,
            "city index out of bounds: ({from}, {to}) in matrix of size {}",
            self.size
        );
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        assert!(
            from < self.size && to < self.size,
            "city index out of bounds: ({from}, {to}) in matrix of size {}",
            self.size
        );
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no cities.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if every entry is exactly zero.
    ///
    /// An empty matrix is trivially all-zero.
    pub fn is_all_zero(&self) -> bool {
        self.data.iter().all(|&d| d == 0.0)
    }

    /// Returns the matrix as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.data.chunks(self.size).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(dm: DistanceMatrix) -> Self {
        dm.to_rows()
    }
}
