//! Required-ingredient filtering.
//!
//! Every required ingredient must occur somewhere in a recipe's ingredient
//! text, in any order and ignoring case. The ingredients are compiled into a
//! single case-insensitive [`RegexSet`] of literal patterns; a row is kept
//! when every pattern in the set matches.

use super::Recipe;
use crate::error::Result;
use regex::{RegexSet, RegexSetBuilder};
use tracing::trace;

/// Compiled AND-matcher over required ingredients.
///
/// # Examples
///
/// ```
/// use nutrirec::recipe::IngredientFilter;
///
/// let filter = IngredientFilter::new(&["Sugar", "flour"]).expect("valid ingredients");
/// assert!(filter.matches(r#"c("flour", "brown sugar", "eggs")"#));
/// assert!(!filter.matches(r#"c("flour", "eggs")"#));
/// ```
#[derive(Debug, Clone)]
pub struct IngredientFilter {
    /// `None` when no ingredients are required.
    patterns: Option<RegexSet>,
}

impl IngredientFilter {
    /// Compiles the required ingredients.
    ///
    /// Ingredients are matched as literal substrings; regex metacharacters
    /// in them carry no special meaning.
    ///
    /// # Errors
    ///
    /// Returns [`NutrirecError::InvalidPattern`](crate::error::NutrirecError::InvalidPattern)
    /// if the set cannot be compiled (for example when it exceeds the regex
    /// size limit).
    pub fn new<S: AsRef<str>>(ingredients: &[S]) -> Result<Self> {
        if ingredients.is_empty() {
            return Ok(Self { patterns: None });
        }

        let escaped = ingredients.iter().map(|i| regex::escape(i.as_ref()));
        let set = RegexSetBuilder::new(escaped)
            .case_insensitive(true)
            .build()?;

        trace!(patterns = set.len(), "compiled ingredient filter");
        Ok(Self {
            patterns: Some(set),
        })
    }

    /// Returns true when no ingredient is required.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.patterns.is_none()
    }

    /// Returns true if `ingredient_text` contains every required ingredient.
    #[must_use]
    pub fn matches(&self, ingredient_text: &str) -> bool {
        match &self.patterns {
            None => true,
            Some(set) => set.matches(ingredient_text).matched_all(),
        }
    }

    /// Returns the corpus positions of matching recipes, ascending.
    #[must_use]
    pub fn matching_indices(&self, corpus: &[Recipe]) -> Vec<usize> {
        if self.is_identity() {
            return (0..corpus.len()).collect();
        }
        corpus
            .iter()
            .enumerate()
            .filter(|(_, recipe)| self.matches(&recipe.ingredient_parts))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns copies of the matching recipes in corpus order.
    #[must_use]
    pub fn apply(&self, corpus: &[Recipe]) -> Vec<Recipe> {
        self.matching_indices(corpus)
            .into_iter()
            .map(|i| corpus[i].clone())
            .collect()
    }
}

/// Filters `corpus` down to recipes containing all `ingredients`.
///
/// An empty ingredient list returns the whole corpus.
///
/// # Errors
///
/// Returns an error if the ingredient matcher cannot be compiled.
pub fn filter_by_ingredients<S: AsRef<str>>(
    corpus: &[Recipe],
    ingredients: &[S],
) -> Result<Vec<Recipe>> {
    Ok(IngredientFilter::new(ingredients)?.apply(corpus))
}
