//! Fixed-ratio split of daily targets across three meals.

use super::{round2, NutritionProfile};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Share of cholesterol, sodium and (outside lunch) fiber per meal.
const EVEN_SHARE: f64 = 1.0 / 3.0;

/// A meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

/// Fraction of each daily target assigned to a meal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealRatios {
    pub calories: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub cholesterol: f64,
    pub sodium: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub protein: f64,
}

impl Meal {
    /// All meals in serving order.
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// The split table for this meal.
    #[must_use]
    pub const fn ratios(self) -> MealRatios {
        match self {
            Meal::Breakfast => MealRatios {
                calories: 0.25,
                fat: 0.275,
                saturated_fat: 0.275,
                cholesterol: EVEN_SHARE,
                sodium: EVEN_SHARE,
                carbohydrates: 0.45,
                fiber: EVEN_SHARE,
                sugar: 0.45,
                protein: 0.175,
            },
            // Lunch carries extra fiber
            Meal::Lunch => MealRatios {
                calories: 0.35,
                fat: 0.275,
                saturated_fat: 0.275,
                cholesterol: EVEN_SHARE,
                sodium: EVEN_SHARE,
                carbohydrates: 0.4,
                fiber: 0.4,
                sugar: 0.4,
                protein: 0.225,
            },
            Meal::Dinner => MealRatios {
                calories: 0.4,
                fat: 0.325,
                saturated_fat: 0.325,
                cholesterol: EVEN_SHARE,
                sodium: EVEN_SHARE,
                carbohydrates: 0.25,
                fiber: EVEN_SHARE,
                sugar: 0.25,
                protein: 0.275,
            },
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        };
        f.write_str(name)
    }
}

/// Nutrient targets for one meal, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealNutrients {
    pub calories: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub cholesterol: f64,
    pub sodium: f64,
    pub carbohydrates: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub protein: f64,
}

impl MealNutrients {
    /// Applies `meal`'s ratios to a daily profile.
    #[must_use]
    pub fn for_meal(daily: &NutritionProfile, meal: Meal) -> Self {
        let r = meal.ratios();
        Self {
            calories: round2(daily.total_calories * r.calories),
            fat: round2(daily.fat * r.fat),
            saturated_fat: round2(daily.saturated_fat * r.saturated_fat),
            cholesterol: round2(daily.cholesterol * r.cholesterol),
            sodium: round2(daily.sodium * r.sodium),
            carbohydrates: round2(daily.carbohydrates * r.carbohydrates),
            fiber: round2(daily.fiber * r.fiber),
            sugar: round2(daily.sugar * r.sugar),
            protein: round2(daily.protein * r.protein),
        }
    }

    /// The targets laid out in recipe nutrition column order.
    #[must_use]
    pub fn to_query(&self) -> [f32; 9] {
        [
            self.calories as f32,
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

/// Splits daily targets into `[breakfast, lunch, dinner]`.
#[must_use]
pub fn calculate_meals_nutrients(daily: &NutritionProfile) -> [MealNutrients; 3] {
    Meal::ALL.map(|meal| MealNutrients::for_meal(daily, meal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::calculate_nutrition;

    fn daily() -> NutritionProfile {
        calculate_nutrition("male", 70.0, 175.0, 30.0).expect("known gender")
    }

    #[test]
    fn test_calorie_ratios_cover_the_day() {
        let sum: f64 = Meal::ALL.iter().map(|m| m.ratios().calories).sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_meal_calories_sum_to_total() {
        let daily = daily();
        let meals = calculate_meals_nutrients(&daily);
        let total: f64 = meals.iter().map(|m| m.calories).sum();
        assert!((total - daily.total_calories).abs() <= 0.06);
    }

    #[test]
    fn test_breakfast_split() {
        let [breakfast, _, _] = calculate_meals_nutrients(&daily());
        // 2555.56 * 0.25 = 638.89
        assert!((breakfast.calories - 638.89).abs() < 1e-9);
        // 56 * 0.175 = 9.8
        assert!((breakfast.protein - 9.8).abs() < 1e-9);
        assert!((breakfast.cholesterol - 100.0).abs() < 1e-9);
        assert!((breakfast.sodium - 766.67).abs() < 1e-9);
        assert!((breakfast.fiber - 8.33).abs() < 1e-9);
    }

    #[test]
    fn test_lunch_fiber_is_forty_percent() {
        let [_, lunch, _] = calculate_meals_nutrients(&daily());
        assert!((lunch.fiber - 10.0).abs() < 1e-9);
        assert!((lunch.protein - 12.6).abs() < 1e-9);
    }

    #[test]
    fn test_dinner_split() {
        let daily = daily();
        let [_, _, dinner] = calculate_meals_nutrients(&daily);
        assert!((dinner.calories - 1022.22).abs() < 1e-9);
        assert!((dinner.fat - round2(daily.fat * 0.325)).abs() < 1e-9);
        assert!((dinner.fiber - 8.33).abs() < 1e-9);
    }

    #[test]
    fn test_values_are_rounded() {
        for meal in calculate_meals_nutrients(&daily()) {
            for value in meal.to_query() {
                let cents = f64::from(value) * 100.0;
                assert!((cents - cents.round()).abs() < 0.05, "{value}");
            }
        }
    }

    #[test]
    fn test_meal_display_and_serde() {
        assert_eq!(Meal::Lunch.to_string(), "lunch");
        let json = serde_json::to_string(&Meal::Dinner).expect("serializable");
        assert_eq!(json, "\"dinner\"");
    }
}
