//! Recipe corpus schema.
//!
//! A corpus is a plain `&[Recipe]` owned by the caller. Each row follows a
//! fixed 16-column layout whose columns 6..=14 are the nutrition block used
//! as the feature vector for similarity search.
//!
//! # Example
//!
//! ```
//! use nutrirec::recipe::{nutrition_matrix, NutritionFacts, Recipe, NUTRITION_FEATURES};
//!
//! let recipe = Recipe {
//!     id: 38,
//!     name: "Low-Fat Berry Blue Frozen Dessert".to_string(),
//!     cook_time: "PT24H".to_string(),
//!     prep_time: "PT45M".to_string(),
//!     total_time: "PT24H45M".to_string(),
//!     ingredient_parts: r#"c("blueberries", "granulated sugar")"#.to_string(),
//!     nutrition: NutritionFacts::from_array([170.9, 2.5, 1.3, 8.0, 29.8, 37.1, 3.6, 30.2, 3.2]),
//!     instructions: r#"c("Toss berries.", "Freeze.")"#.to_string(),
//! };
//!
//! let features = nutrition_matrix(&[recipe]);
//! assert_eq!(features.shape(), (1, NUTRITION_FEATURES));
//! ```

pub mod filter;
pub mod format;

use crate::error::{NutrirecError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

pub use filter::{filter_by_ingredients, IngredientFilter};
pub use format::{extract_quoted_strings, output_recommended_recipes, RecipeRecord};

/// Source column names in schema order.
pub const RECIPE_COLUMNS: [&str; 16] = [
    "RecipeId",
    "Name",
    "CookTime",
    "PrepTime",
    "TotalTime",
    "RecipeIngredientParts",
    "Calories",
    "FatContent",
    "SaturatedFatContent",
    "CholesterolContent",
    "SodiumContent",
    "CarbohydrateContent",
    "FiberContent",
    "SugarContent",
    "ProteinContent",
    "RecipeInstructions",
];

/// Column index of the first nutrition column.
pub const NUTRITION_OFFSET: usize = 6;

/// Width of the nutrition block (and of every query vector).
pub const NUTRITION_FEATURES: usize = 9;

/// Nutrition column names in feature order.
pub const NUTRITION_COLUMNS: [&str; NUTRITION_FEATURES] = [
    "Calories",
    "FatContent",
    "SaturatedFatContent",
    "CholesterolContent",
    "SodiumContent",
    "CarbohydrateContent",
    "FiberContent",
    "SugarContent",
    "ProteinContent",
];

/// The nine nutrition values of a recipe, in feature order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(rename = "Calories")]
    pub calories: f32,
    #[serde(rename = "FatContent")]
    pub fat: f32,
    #[serde(rename = "SaturatedFatContent")]
    pub saturated_fat: f32,
    #[serde(rename = "CholesterolContent")]
    pub cholesterol: f32,
    #[serde(rename = "SodiumContent")]
    pub sodium: f32,
    #[serde(rename = "CarbohydrateContent")]
    pub carbohydrates: f32,
    #[serde(rename = "FiberContent")]
    pub fiber: f32,
    #[serde(rename = "SugarContent")]
    pub sugar: f32,
    #[serde(rename = "ProteinContent")]
    pub protein: f32,
}

impl NutritionFacts {
    /// Builds facts from a feature-ordered array.
    #[must_use]
    pub fn from_array(values: [f32; NUTRITION_FEATURES]) -> Self {
        let [calories, fat, saturated_fat, cholesterol, sodium, carbohydrates, fiber, sugar, protein] =
            values;
        Self {
            calories,
            fat,
            saturated_fat,
            cholesterol,
            sodium,
            carbohydrates,
            fiber,
            sugar,
            protein,
        }
    }

    /// Returns the values in feature order.
    #[must_use]
    pub fn to_array(&self) -> [f32; NUTRITION_FEATURES] {
        [
            self.calories,
            self.fat,
            self.saturated_fat,
            self.cholesterol,
            self.sodium,
            self.carbohydrates,
            self.fiber,
            self.sugar,
            self.protein,
        ]
    }
}

/// One corpus row.
///
/// Ingredient and instruction fields keep their raw quote-delimited text;
/// see [`format::extract_quoted_strings`] for decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
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
    pub ingredient_parts: String,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
    #[serde(rename = "RecipeInstructions")]
    pub instructions: String,
}

impl Recipe {
    /// Parses a raw row laid out as [`RECIPE_COLUMNS`].
    ///
    /// # Errors
    ///
    /// Returns [`NutrirecError::InvalidRecord`] if the row has the wrong
    /// number of cells or a numeric cell does not parse.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self> {
        if row.len() != RECIPE_COLUMNS.len() {
            return Err(NutrirecError::InvalidRecord(format!(
                "expected {} columns, got {}",
                RECIPE_COLUMNS.len(),
                row.len()
            )));
        }

        let cell = |idx: usize| row[idx].as_ref().trim();

        let id = cell(0).parse::<u64>().map_err(|e| {
            NutrirecError::InvalidRecord(format!("{}: {e}", RECIPE_COLUMNS[0]))
        })?;

        let mut nutrition = [0.0_f32; NUTRITION_FEATURES];
        for (j, value) in nutrition.iter_mut().enumerate() {
            let col = NUTRITION_OFFSET + j;
            *value = cell(col).parse::<f32>().map_err(|e| {
                NutrirecError::InvalidRecord(format!("{}: {e}", RECIPE_COLUMNS[col]))
            })?;
            if !value.is_finite() {
                return Err(NutrirecError::InvalidRecord(format!(
                    "{}: non-finite value {}",
                    RECIPE_COLUMNS[col],
                    cell(col)
                )));
            }
        }

        Ok(Self {
            id,
            name: cell(1).to_string(),
            cook_time: cell(2).to_string(),
            prep_time: cell(3).to_string(),
            total_time: cell(4).to_string(),
            ingredient_parts: row[5].as_ref().to_string(),
            nutrition: NutritionFacts::from_array(nutrition),
            instructions: row[15].as_ref().to_string(),
        })
    }
}

/// Extracts the nutrition block of every recipe as a `rows x 9` matrix.
///
/// Accepts any iterator of recipe references, so a subset can be selected by
/// position without copying rows.
#[must_use]
pub fn nutrition_matrix<'a, I>(recipes: I) -> Matrix<f32>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    let recipes: Vec<&Recipe> = recipes.into_iter().collect();
    let mut matrix = Matrix::zeros(recipes.len(), NUTRITION_FEATURES);
    for (i, recipe) in recipes.iter().enumerate() {
        for (j, value) in recipe.nutrition.to_array().into_iter().enumerate() {
            matrix.set(i, j, value);
        }
    }
    matrix
}
