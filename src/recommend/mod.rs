//! Recipe recommendation.
//!
//! A request runs the whole pipeline from scratch: filter the corpus by
//! required ingredients, fit a scaler and cosine index on the surviving
//! rows, push the query through, and return the matching rows closest
//! first. Nothing is cached between requests, so statistics fitted for one
//! ingredient filter never leak into another.
//!
//! # Quick Start
//!
//! ```
//! use nutrirec::recipe::{NutritionFacts, Recipe};
//! use nutrirec::recommend::{recommend, RecommendParams};
//!
//! let corpus: Vec<Recipe> = (0..6)
//!     .map(|i| Recipe {
//!         id: i,
//!         name: format!("dish {i}"),
//!         cook_time: String::new(),
//!         prep_time: String::new(),
//!         total_time: String::new(),
//!         ingredient_parts: r#"c("rice", "peas")"#.to_string(),
//!         nutrition: NutritionFacts::from_array([
//!             100.0 * (i + 1) as f32, (i * i) as f32, 1.0, 10.0, 300.0, 40.0, 2.0, 3.0, 8.0,
//!         ]),
//!         instructions: r#"c("Cook.")"#.to_string(),
//!     })
//!     .collect();
//!
//! // Same nutrition as dish 2
//! let query = [300.0, 4.0, 1.0, 10.0, 300.0, 40.0, 2.0, 3.0, 8.0];
//! let params = RecommendParams::default().with_n_neighbors(3);
//!
//! let recs = recommend(&corpus, &query, &["Rice"], &params)
//!     .expect("valid request")
//!     .expect("enough rows for 3 neighbors");
//! assert_eq!(recs.len(), 3);
//! assert_eq!(recs[0].recipe.id, 2);
//! ```

use crate::error::{NutrirecError, Result};
use crate::pipeline::RecommendationPipeline;
use crate::recipe::{nutrition_matrix, IngredientFilter, Recipe, NUTRITION_FEATURES};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of recommendations per request.
pub const DEFAULT_N_NEIGHBORS: usize = 5;

/// Per-request search parameters.
///
/// Every call constructs or receives its own value; missing fields in a
/// serialized form fall back to [`RecommendParams::default`].
///
/// # Examples
///
/// ```
/// use nutrirec::recommend::RecommendParams;
///
/// let params: RecommendParams = serde_json::from_str(r#"{"n_neighbors": 3}"#)
///     .expect("partial params deserialize with defaults");
/// assert_eq!(params.n_neighbors, 3);
/// assert!(!params.return_distance);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendParams {
    /// Number of recipes to return.
    pub n_neighbors: usize,
    /// Attach the cosine distance to each returned recipe.
    pub return_distance: bool,
}

impl Default for RecommendParams {
    fn default() -> Self {
        Self {
            n_neighbors: DEFAULT_N_NEIGHBORS,
            return_distance: false,
        }
    }
}

impl RecommendParams {
    /// Sets the number of recipes to return.
    #[must_use]
    pub fn with_n_neighbors(mut self, n_neighbors: usize) -> Self {
        self.n_neighbors = n_neighbors;
        self
    }

    /// Sets whether distances are attached to results.
    #[must_use]
    pub fn with_return_distance(mut self, return_distance: bool) -> Self {
        self.return_distance = return_distance;
        self
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `n_neighbors` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.n_neighbors == 0 {
            return Err(NutrirecError::InvalidHyperparameter {
                param: "n_neighbors".to_string(),
                value: "0".to_string(),
                constraint: ">= 1".to_string(),
            });
        }
        Ok(())
    }
}

/// One recommended corpus row.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Position of the recipe in the corpus passed to [`recommend`].
    pub corpus_index: usize,
    /// The selected recipe, unmodified.
    pub recipe: Recipe,
    /// Cosine distance to the standardized query, if requested.
    pub distance: Option<f32>,
}

/// Recommends the `params.n_neighbors` recipes whose standardized nutrition
/// is closest in cosine distance to `query`, among recipes containing every
/// ingredient in `ingredients`.
///
/// Returns `Ok(None)` when fewer than `n_neighbors` recipes survive the
/// ingredient filter.
///
/// # Errors
///
/// Returns an error if `query` does not have exactly
/// [`NUTRITION_FEATURES`] finite values, `params` is invalid, the ingredient
/// filter cannot be compiled, or a selected recipe has a non-finite
/// nutrition value.
pub fn recommend<S: AsRef<str>>(
    corpus: &[Recipe],
    query: &[f32],
    ingredients: &[S],
    params: &RecommendParams,
) -> Result<Option<Vec<Recommendation>>> {
    params.validate()?;
    if query.len() != NUTRITION_FEATURES {
        return Err(NutrirecError::DimensionMismatch {
            expected: format!("{NUTRITION_FEATURES} features"),
            actual: format!("{} features", query.len()),
        });
    }
    if let Some(pos) = query.iter().position(|v| !v.is_finite()) {
        return Err(NutrirecError::NonFinite {
            context: format!("query feature {pos} ({})", query[pos]),
        });
    }

    let selected = IngredientFilter::new(ingredients)?.matching_indices(corpus);
    debug!(
        corpus_rows = corpus.len(),
        filtered_rows = selected.len(),
        n_neighbors = params.n_neighbors,
        "filtered corpus"
    );

    if selected.len() < params.n_neighbors {
        debug!(
            filtered_rows = selected.len(),
            n_neighbors = params.n_neighbors,
            "not enough recipes, no recommendation"
        );
        return Ok(None);
    }

    let features = nutrition_matrix(selected.iter().map(|&i| &corpus[i]));
    let pipeline = RecommendationPipeline::fit(&features, params)?;
    let neighbors = pipeline.transform(query)?;

    let recommendations = neighbors
        .into_iter()
        .map(|n| {
            let corpus_index = selected[n.index];
            Recommendation {
                corpus_index,
                recipe: corpus[corpus_index].clone(),
                distance: params.return_distance.then_some(n.distance),
            }
        })
        .collect();

    Ok(Some(recommendations))
}

/// Issues recommendation requests against one shared, read-only corpus.
///
/// # Examples
///
/// ```
/// use nutrirec::recommend::{RecommendParams, Recommender};
///
/// let recommender = Recommender::new(&[]);
/// let none: [&str; 0] = [];
/// let result = recommender
///     .recommend(&[0.0; 9], &none, &RecommendParams::default())
///     .expect("valid request");
/// assert!(result.is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Recommender<'a> {
    corpus: &'a [Recipe],
}

impl<'a> Recommender<'a> {
    /// Wraps a corpus.
    #[must_use]
    pub fn new(corpus: &'a [Recipe]) -> Self {
        Self { corpus }
    }

    /// The wrapped corpus.
    #[must_use]
    pub fn corpus(&self) -> &'a [Recipe] {
        self.corpus
    }

    /// See [`recommend`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`recommend`].
    pub fn recommend<S: AsRef<str>>(
        &self,
        query: &[f32],
        ingredients: &[S],
        params: &RecommendParams,
    ) -> Result<Option<Vec<Recommendation>>> {
        recommend(self.corpus, query, ingredients, params)
    }
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
