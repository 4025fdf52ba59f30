//! Daily and per-meal nutrient targets from body metrics.
//!
//! Daily energy is estimated with the Mifflin-St Jeor BMR equation scaled by
//! a moderate activity factor, then split into macronutrient targets. The
//! [`meals`] submodule divides a daily profile across breakfast, lunch and
//! dinner with fixed ratios.
//!
//! # Example
//!
//! ```
//! use nutrirec::nutrition::{calculate_meals_nutrients, calculate_nutrition};
//!
//! let daily = calculate_nutrition("Male", 70.0, 175.0, 30.0).expect("known gender");
//! assert!((daily.total_calories - 2555.56).abs() < 1e-9);
//!
//! let [breakfast, lunch, dinner] = calculate_meals_nutrients(&daily);
//! let total = breakfast.calories + lunch.calories + dinner.calories;
//! assert!((total - daily.total_calories).abs() < 0.06);
//! ```

pub mod meals;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use meals::{calculate_meals_nutrients, Meal, MealNutrients, MealRatios};

/// Multiplier from BMR to total daily energy expenditure (moderate activity).
pub const ACTIVITY_LEVEL: f64 = 1.55;

/// Daily protein target in grams per kilogram of body weight.
pub const PROTEIN_G_PER_KG: f64 = 0.8;

/// Daily cholesterol target in milligrams.
pub const DAILY_CHOLESTEROL_MG: f64 = 300.0;

/// Daily sodium target in milligrams.
pub const DAILY_SODIUM_MG: f64 = 2300.0;

/// Daily fiber target in grams.
pub const DAILY_FIBER_G: f64 = 25.0;

const KCAL_PER_G_FAT: f64 = 9.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Errors from nutrient target calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NutritionError {
    /// Gender other than male or female.
    #[error("Invalid gender specified. Please specify 'male' or 'female'.")]
    InvalidGender {
        /// The rejected input
        given: String,
    },

    /// A body metric was NaN or infinite.
    #[error("Invalid body metric: {name} = {value}")]
    InvalidMetric {
        /// Metric name
        name: &'static str,
        /// Provided value
        value: f64,
    },
}

/// Sex used by the BMR equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = NutritionError;

    /// Parses `"male"` or `"female"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(NutritionError::InvalidGender {
                given: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Body measurements: weight in kg, height in cm, age in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
}

impl BodyMetrics {
    fn validate(&self) -> Result<(), NutritionError> {
        for (name, value) in [
            ("weight", self.weight),
            ("height", self.height),
            ("age", self.age),
        ] {
            if !value.is_finite() {
                return Err(NutritionError::InvalidMetric { name, value });
            }
        }
        Ok(())
    }

    /// Basal metabolic rate in kcal/day.
    ///
    /// Weight and age are truncated to whole units. Height is truncated for
    /// the male equation only.
    #[must_use]
    pub fn bmr(&self) -> f64 {
        let weight = self.weight.trunc();
        let age = self.age.trunc();
        match self.gender {
            Gender::Male => 10.0 * weight + 6.25 * self.height.trunc() - 5.0 * age + 5.0,
            Gender::Female => 10.0 * weight + 6.25 * self.height - 5.0 * age - 161.0,
        }
    }

    /// Total daily energy expenditure in kcal/day.
    #[must_use]
    pub fn tdee(&self) -> f64 {
        self.bmr() * ACTIVITY_LEVEL
    }
}

/// Daily nutrient targets. Masses in grams except cholesterol and sodium
/// (milligrams).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub total_calories: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub cholesterol: f64,
    pub sodium: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub protein: f64,
}

impl NutritionProfile {
    /// The targets laid out in recipe nutrition column order, usable as a
    /// recommendation query.
    #[must_use]
    pub fn to_query(&self) -> [f32; 9] {
        [
            self.total_calories as f32,
            self.fat as f32,
            self.saturated_fat as f32,
            self.cholesterol as f32,
            self.sodium as f32,
            self.carbohydrates as f32,
            self.fiber as f32,
            self.sugar as f32,
            self.protein as f32,
        ]
    }
}

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes daily targets for already-parsed body metrics.
///
/// # Errors
///
/// Returns [`NutritionError::InvalidMetric`] if a metric is not finite.
pub fn calculate_nutrition_for(metrics: &BodyMetrics) -> Result<NutritionProfile, NutritionError> {
    metrics.validate()?;

    let tdee = metrics.tdee();
    let protein = PROTEIN_G_PER_KG * metrics.weight.trunc();
    // 25% of energy from fat
    let fat = 0.25 * tdee / KCAL_PER_G_FAT;
    // Remaining energy from carbohydrates
    let carbohydrates =
        (tdee - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT) / KCAL_PER_G_CARB;
    let saturated_fat = 0.1 * tdee / KCAL_PER_G_FAT;
    let sugar = 0.1 * tdee / KCAL_PER_G_CARB;

    Ok(NutritionProfile {
        total_calories: round2(tdee),
        fat: round2(fat),
        saturated_fat: round2(saturated_fat),
        cholesterol: DAILY_CHOLESTEROL_MG,
        sodium: DAILY_SODIUM_MG,
        carbohydrates: round2(carbohydrates),
        fiber: DAILY_FIBER_G,
        sugar: round2(sugar),
        protein: round2(protein),
    })
}

/// Computes daily targets from a gender string and body metrics.
///
/// `gender` is matched case-insensitively against `"male"` and `"female"`.
///
/// # Errors
///
/// Returns [`NutritionError::InvalidGender`] for any other gender string and
/// [`NutritionError::InvalidMetric`] for non-finite metrics.
pub fn calculate_nutrition(
    gender: &str,
    weight: f64,
    height: f64,
    age: f64,
) -> Result<NutritionProfile, NutritionError> {
    calculate_nutrition_for(&BodyMetrics {
        gender: gender.parse()?,
        weight,
        height,
        age,
    })
}
