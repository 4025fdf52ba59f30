//! Preprocessing transformers for feature standardization.
//!
//! Nutrition columns live on very different scales (sodium in milligrams,
//! fiber in grams), so they are standardized before any distance is taken.
//!
//! # Example
//!
//! ```
//! use nutrirec::prelude::*;
//! use nutrirec::preprocessing::StandardScaler;
//!
//! // Create data with different scales
//! let data = Matrix::from_vec(4, 2, vec![
//!     1.0, 100.0,
//!     2.0, 200.0,
//!     3.0, 300.0,
//!     4.0, 400.0,
//! ]).expect("valid matrix dimensions");
//!
//! // Standardize to zero mean and unit variance
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
//!
//! // Both columns now live on the same scale
//! assert!((scaled.get(0, 0) - scaled.get(0, 1)).abs() < 1e-5);
//! ```

use crate::error::{NutrirecError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};

/// Standard deviations at or below this are treated as zero variance.
pub const STD_EPSILON: f32 = 1e-10;

/// Standardizes features by removing mean and scaling to unit variance.
///
/// The standard score of a sample x is: z = (x - mean) / std
///
/// Statistics are population statistics (divide by n), computed only from
/// the matrix passed to [`fit`](Transformer::fit). A column with zero
/// variance is centered but not divided, so it standardizes to all zeros.
///
/// # Example
///
/// ```
/// use nutrirec::prelude::*;
/// use nutrirec::preprocessing::StandardScaler;
///
/// let data = Matrix::from_vec(3, 2, vec![
///     0.0, 5.0,
///     1.0, 5.0,
///     2.0, 5.0,
/// ]).expect("valid matrix dimensions");
///
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&data).expect("fit_transform should succeed");
///
/// // Constant column collapses to zero instead of dividing by zero
/// for i in 0..3 {
///     assert_eq!(scaled.get(i, 1), 0.0);
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Mean of each feature (computed during fit).
    mean: Option<Vec<f32>>,
    /// Standard deviation of each feature (computed during fit).
    std: Option<Vec<f32>>,
}

impl StandardScaler {
    /// Creates an unfitted `StandardScaler`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mean of each feature, or `None` before fit.
    #[must_use]
    pub fn mean(&self) -> Option<&[f32]> {
        self.mean.as_deref()
    }

    /// Returns the standard deviation of each feature, or `None` before fit.
    #[must_use]
    pub fn std(&self) -> Option<&[f32]> {
        self.std.as_deref()
    }

    /// Number of features seen during fit.
    #[must_use]
    pub fn n_features(&self) -> Option<usize> {
        self.mean.as_ref().map(Vec::len)
    }

    /// Returns true if the scaler has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }

    fn fitted_params(&self) -> Result<(&[f32], &[f32])> {
        match (&self.mean, &self.std) {
            (Some(mean), Some(std)) => Ok((mean, std)),
            _ => Err(NutrirecError::NotFitted("StandardScaler")),
        }
    }
}

impl Transformer for StandardScaler {
    /// Computes the mean and standard deviation of each feature.
    ///
    /// Sums are accumulated in `f64` and narrowed once per column. Any NaN
    /// or infinite value fails the fit with [`NutrirecError::NonFinite`].
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples == 0 {
            return Err(NutrirecError::EmptyData);
        }

        let mut mean = vec![0.0; n_features];
        let mut std = vec![0.0; n_features];

        for j in 0..n_features {
            let column = x.column(j);
            if let Some(i) = column.iter().position(|v| !v.is_finite()) {
                return Err(NutrirecError::NonFinite {
                    context: format!("row {i}, column {j} ({})", column[i]),
                });
            }

            let first = column[0];

            // Constant column: exact mean, zero std
            if column.iter().all(|&v| v == first) {
                mean[j] = first;
                continue;
            }

            let n = n_samples as f64;
            let col_mean = column.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
            let sum_sq: f64 = column
                .iter()
                .map(|&v| {
                    let diff = f64::from(v) - col_mean;
                    diff * diff
                })
                .sum();

            mean[j] = col_mean as f32;
            // Population std (divide by n, not n-1)
            std[j] = (sum_sq / n).sqrt() as f32;
        }

        self.mean = Some(mean);
        self.std = Some(std);

        Ok(())
    }

    /// Standardizes the data using fitted mean and std.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        let (mean, std) = self.fitted_params()?;
        if x.n_cols() != mean.len() {
            return Err(NutrirecError::DimensionMismatch {
                expected: format!("{} features", mean.len()),
                actual: format!("{} features", x.n_cols()),
            });
        }

        let (n_samples, n_features) = x.shape();
        let mut result = Matrix::zeros(n_samples, n_features);

        for i in 0..n_samples {
            for j in 0..n_features {
                let mut val = x.get(i, j) - mean[j];

                // Zero-variance columns are only centered
                if std[j] > STD_EPSILON {
                    val /= std[j];
                }

                result.set(i, j, val);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests;
