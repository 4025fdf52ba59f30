//! Exact nearest neighbor search under cosine distance.
//!
//! The index is a brute-force scan: every query is compared against every
//! fitted row. Corpora are filtered down before indexing, so an exhaustive
//! scan stays cheap and needs no acceleration structure.
//!
//! # Quick Start
//!
//! ```
//! use nutrirec::neighbors::NearestNeighbors;
//! use nutrirec::primitives::Matrix;
//!
//! let data = Matrix::from_vec(3, 2, vec![
//!     1.0, 0.0, // horizontal
//!     1.0, 1.0, // diagonal
//!     0.0, 1.0, // vertical
//! ]).expect("valid matrix dimensions");
//!
//! let mut index = NearestNeighbors::new(2);
//! index.fit(&data).expect("fit should succeed");
//!
//! let neighbors = index.query(&[0.9, 0.1]).expect("query should succeed");
//! assert_eq!(neighbors[0].index, 0);
//! assert!(neighbors[0].distance <= neighbors[1].distance);
//! ```

use crate::error::{NutrirecError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Cosine distance between two vectors: `1 - (a·b) / (‖a‖‖b‖)`.
///
/// Ranges over `[0, 2]`, 0 meaning identical direction. When either vector
/// has zero norm the distance is 1.0, the same as for orthogonal vectors.
///
/// # Examples
///
/// ```
/// use nutrirec::neighbors::cosine_distance;
///
/// assert!(cosine_distance(&[1.0, 2.0], &[2.0, 4.0]).abs() < 1e-6);
/// assert!((cosine_distance(&[1.0, 0.0], &[0.0, 1.0]) - 1.0).abs() < 1e-6);
/// assert_eq!(cosine_distance(&[0.0, 0.0], &[3.0, 4.0]), 1.0);
/// ```
#[must_use]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same length");

    let (mut dot, mut norm_a, mut norm_b) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }

    let similarity = dot / (norm_a * norm_b).sqrt();
    (1.0 - similarity).clamp(0.0, 2.0) as f32
}

/// A single search hit: row position in the fitted matrix and its distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// Row index into the matrix the index was fitted on.
    pub index: usize,
    /// Cosine distance from the query.
    pub distance: f32,
}

/// Brute-force k-nearest-neighbor index with cosine distance.
///
/// Results come back closest first. Rows at equal distance keep their
/// original row order.
#[derive(Debug, Clone)]
pub struct NearestNeighbors {
    n_neighbors: usize,
    fit_data: Option<Matrix<f32>>,
}

impl NearestNeighbors {
    /// Creates an unfitted index that returns `n_neighbors` hits per query.
    #[must_use]
    pub fn new(n_neighbors: usize) -> Self {
        Self {
            n_neighbors,
            fit_data: None,
        }
    }

    /// Number of neighbors returned per query.
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    /// Number of rows the index was fitted on (0 before fit).
    #[must_use]
    pub fn n_samples_fit(&self) -> usize {
        self.fit_data.as_ref().map_or(0, Matrix::n_rows)
    }

    /// Returns true if the index has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fit_data.is_some()
    }

    /// Stores the rows to search.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_neighbors` is zero or `x` has no rows or
    /// no columns.
    pub fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        if self.n_neighbors == 0 {
            return Err(NutrirecError::InvalidHyperparameter {
                param: "n_neighbors".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        if x.n_rows() == 0 || x.n_cols() == 0 {
            return Err(NutrirecError::EmptyData);
        }
        self.fit_data = Some(x.clone());
        Ok(())
    }

    /// Finds the nearest fitted rows for every row of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the index is not fitted, the query width differs
    /// from the fitted width, or `n_neighbors` exceeds the fitted row count.
    pub fn kneighbors(&self, x: &Matrix<f32>) -> Result<Vec<Vec<Neighbor>>> {
        x.rows().map(|row| self.query(row)).collect()
    }

    /// Finds the nearest fitted rows for a single query vector.
    ///
    /// # Errors
    ///
    /// Same conditions as [`kneighbors`](Self::kneighbors).
    pub fn query(&self, query: &[f32]) -> Result<Vec<Neighbor>> {
        let data = self
            .fit_data
            .as_ref()
            .ok_or(NutrirecError::NotFitted("NearestNeighbors"))?;

        if query.len() != data.n_cols() {
            return Err(NutrirecError::DimensionMismatch {
                expected: format!("{} features", data.n_cols()),
                actual: format!("{} features", query.len()),
            });
        }
        if self.n_neighbors > data.n_rows() {
            return Err(NutrirecError::InvalidHyperparameter {
                param: "n_neighbors".to_string(),
                value: self.n_neighbors.to_string(),
                constraint: format!("<= {} fitted samples", data.n_rows()),
            });
        }

        let mut hits: Vec<Neighbor> = data
            .rows()
            .enumerate()
            .map(|(index, row)| Neighbor {
                index,
                distance: cosine_distance(query, row),
            })
            .collect();

        // Stable sort: equal distances stay in row order
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.truncate(self.n_neighbors);

        Ok(hits)
    }
}
