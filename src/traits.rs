//! Core traits for fitted transforms.
//!
//! These traits define the API contracts shared by the pipeline stages.

use crate::error::Result;
use crate::primitives::Matrix;

/// Trait for data transformers (scalers, encoders, etc.).
///
/// A transformer learns its parameters in [`fit`](Transformer::fit) and then
/// applies exactly those parameters in [`transform`](Transformer::transform),
/// so data seen at query time goes through the same mapping as the data the
/// parameters were learned from.
///
/// # Examples
///
/// ```
/// use nutrirec::prelude::*;
/// use nutrirec::preprocessing::StandardScaler;
///
/// let x = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid matrix dimensions");
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&x).expect("fit_transform should succeed");
/// assert!(scaled.get(1, 0).abs() < 1e-6);
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f32>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if transformer is not fitted.
    fn transform(&self, x: &Matrix<f32>) -> Result<Matrix<f32>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix<f32>) -> Result<Matrix<f32>> {
        self.fit(x)?;
        self.transform(x)
    }
}
