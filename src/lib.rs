//! nutrirec: nutrition-aware recipe recommendation in pure Rust.
//!
//! Recipes are recommended by cosine nearest-neighbor search over their
//! standardized nutrition values, restricted to recipes that contain a set
//! of required ingredients. A separate set of formulas turns body metrics
//! into daily and per-meal nutrient targets that can serve as queries.
//!
//! # Quick Start
//!
//! ```
//! use nutrirec::prelude::*;
//!
//! let corpus: Vec<Recipe> = [
//!     [250.0, 9.0, 3.0, 80.0, 400.0, 33.0, 1.0, 6.0, 8.0],
//!     [520.0, 14.0, 3.5, 110.0, 640.0, 58.0, 4.0, 3.0, 38.0],
//!     [310.0, 2.0, 0.3, 0.0, 480.0, 52.0, 16.0, 5.0, 18.0],
//! ]
//! .into_iter()
//! .enumerate()
//! .map(|(i, nutrition)| Recipe {
//!     id: i as u64,
//!     name: format!("recipe {i}"),
//!     cook_time: String::new(),
//!     prep_time: String::new(),
//!     total_time: String::new(),
//!     ingredient_parts: r#"c("onion", "garlic")"#.to_string(),
//!     nutrition: NutritionFacts::from_array(nutrition),
//!     instructions: r#"c("Chop.", "Simmer.")"#.to_string(),
//! })
//! .collect();
//!
//! let daily = calculate_nutrition("female", 60.0, 165.0, 25.0).expect("known gender");
//! let [_, lunch, _] = calculate_meals_nutrients(&daily);
//!
//! let params = RecommendParams::default().with_n_neighbors(2);
//! let recs = recommend(&corpus, &lunch.to_query(), &["garlic"], &params).expect("valid request");
//!
//! let records = output_recommended_recipes(recs).expect("two recipes contain garlic");
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].ingredient_parts, vec!["onion", "garlic"]);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Row-major `Matrix` type
//! - [`traits`]: The `Transformer` contract
//! - [`preprocessing`]: `StandardScaler` feature standardization
//! - [`neighbors`]: Exact cosine nearest-neighbor index
//! - [`pipeline`]: Scaler + index bound into one transform
//! - [`recipe`]: Corpus schema, ingredient filter and output formatting
//! - [`recommend`]: The request-level recommender
//! - [`nutrition`]: Daily and per-meal nutrient targets

pub mod error;
pub mod neighbors;
pub mod nutrition;
pub mod pipeline;
pub mod prelude;
pub mod preprocessing;
pub mod primitives;
pub mod recipe;
pub mod recommend;
pub mod traits;

pub use error::{NutrirecError, Result};
pub use primitives::Matrix;
pub use traits::Transformer;
