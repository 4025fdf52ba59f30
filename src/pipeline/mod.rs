//! Scaler + index composition.
//!
//! [`RecommendationPipeline`] owns a [`StandardScaler`] and a
//! [`NearestNeighbors`] index fitted on the same feature matrix, and exposes
//! a single [`transform`](RecommendationPipeline::transform) that takes a raw
//! query vector and returns neighbor row positions. Queries are always
//! standardized with the statistics the index was built from.
//!
//! # Example
//!
//! ```
//! use nutrirec::pipeline::RecommendationPipeline;
//! use nutrirec::primitives::Matrix;
//! use nutrirec::recommend::RecommendParams;
//!
//! let features = Matrix::from_vec(3, 2, vec![
//!     100.0, 1.0,
//!     200.0, 4.0,
//!     300.0, 2.0,
//! ]).expect("valid matrix dimensions");
//!
//! let params = RecommendParams::default().with_n_neighbors(2);
//! let pipeline = RecommendationPipeline::fit(&features, &params).expect("fit should succeed");
//!
//! let hits = pipeline.transform(&[200.0, 4.0]).expect("transform should succeed");
//! assert_eq!(hits[0].index, 1);
//! ```

use crate::error::Result;
use crate::neighbors::{NearestNeighbors, Neighbor};
use crate::preprocessing::StandardScaler;
use crate::primitives::Matrix;
use crate::recommend::RecommendParams;
use crate::traits::Transformer;

/// A fitted scaler and the index built over its output.
#[derive(Debug, Clone)]
pub struct RecommendationPipeline {
    scaler: StandardScaler,
    index: NearestNeighbors,
}

impl RecommendationPipeline {
    /// Fits the scaler on `features` and indexes the standardized rows.
    ///
    /// # Errors
    ///
    /// Returns an error if `features` is empty or `params` is invalid.
    pub fn fit(features: &Matrix<f32>, params: &RecommendParams) -> Result<Self> {
        params.validate()?;

        let mut scaler = StandardScaler::new();
        let scaled = scaler.fit_transform(features)?;

        let mut index = NearestNeighbors::new(params.n_neighbors);
        index.fit(&scaled)?;

        Ok(Self { scaler, index })
    }

    /// Standardizes `query` and returns its nearest rows, closest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query width differs from the fitted width or
    /// the index holds fewer rows than `n_neighbors`.
    pub fn transform(&self, query: &[f32]) -> Result<Vec<Neighbor>> {
        let scaled = self.scaler.transform(&Matrix::row_vector(query))?;
        self.index.query(scaled.row(0))
    }

    /// The fitted scaler.
    #[must_use]
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// The fitted index.
    #[must_use]
    pub fn index(&self) -> &NearestNeighbors {
        &self.index
    }
}
