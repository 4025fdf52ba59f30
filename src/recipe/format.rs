//! Conversion of recommended rows into plain output records.

use super::{NutritionFacts, Recipe};
use crate::recommend::Recommendation;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)""#).expect("quoted-string pattern is valid"));

/// Extracts every double-quoted substring, in order of appearance.
///
/// Text without a complete pair of quotes yields an empty vector.
///
/// # Examples
///
/// ```
/// use nutrirec::recipe::extract_quoted_strings;
///
/// assert_eq!(
///     extract_quoted_strings(r#""flour" "sugar" "eggs""#),
///     vec!["flour", "sugar", "eggs"]
/// );
/// assert!(extract_quoted_strings("no quotes here").is_empty());
/// ```
#[must_use]
pub fn extract_quoted_strings(s: &str) -> Vec<String> {
    QUOTED
        .captures_iter(s)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A recommended recipe with its list fields decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(rename = "RecipeId")]
    pub id: u64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "CookTime")]
    pub cook_time: String,
    #[serde(rename = "PrepTime")]
    pub prep_time: String,
    #[serde(rename = "TotalTime")]
    pub total_time: String,
    #[serde(rename = "RecipeIngredientParts")]
    pub ingredient_parts: Vec<String>,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(rename = "RecipeInstructions")]
    pub instructions: Vec<String>,
    /// Cosine distance to the query, when it was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

impl From<&Recipe> for RecipeRecord {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            cook_time: recipe.cook_time.clone(),
            prep_time: recipe.prep_time.clone(),
            total_time: recipe.total_time.clone(),
            ingredient_parts: extract_quoted_strings(&recipe.ingredient_parts),
            nutrition: recipe.nutrition,
            instructions: extract_quoted_strings(&recipe.instructions),
            distance: None,
        }
    }
}

impl From<&Recommendation> for RecipeRecord {
    fn from(rec: &Recommendation) -> Self {
        Self {
            distance: rec.distance,
            ..Self::from(&rec.recipe)
        }
    }
}

/// Formats recommender output; `None` (no result) passes through.
#[must_use]
pub fn output_recommended_recipes(
    recommendations: Option<Vec<Recommendation>>,
) -> Option<Vec<RecipeRecord>> {
    recommendations.map(|recs| recs.iter().map(RecipeRecord::from).collect())
}
