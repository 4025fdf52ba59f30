//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use nutrirec::prelude::*;
//! ```

pub use crate::neighbors::{cosine_distance, NearestNeighbors, Neighbor};
pub use crate::nutrition::{
    calculate_meals_nutrients, calculate_nutrition, Gender, Meal, MealNutrients,
    NutritionProfile,
};
pub use crate::pipeline::RecommendationPipeline;
pub use crate::preprocessing::StandardScaler;
pub use crate::primitives::Matrix;
pub use crate::recipe::{
    extract_quoted_strings, filter_by_ingredients, output_recommended_recipes, NutritionFacts,
    Recipe, RecipeRecord,
};
pub use crate::recommend::{recommend, RecommendParams, Recommendation, Recommender};
pub use crate::traits::Transformer;
