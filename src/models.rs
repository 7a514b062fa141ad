//! Frontend Models
//!
//! Recipe record and the text helpers shared by the form and the list.

use std::fmt;

/// Recipe identifier, issued by the store's id sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Recipe data structure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    /// Trimmed, non-empty ingredient names in entry order
    pub ingredients: Vec<String>,
    pub instruction: String,
}

impl Recipe {
    pub fn new(id: RecipeId, name: String, ingredients: Vec<String>, instruction: String) -> Self {
        Self {
            id,
            name,
            ingredients,
            instruction,
        }
    }

    /// Ingredients as shown in the list and in the edit field
    pub fn ingredients_text(&self) -> String {
        join_ingredients(&self.ingredients)
    }
}

/// Split a comma separated ingredient line, trimming each piece.
/// Pieces that are blank after trimming are dropped.
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|ing| !ing.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_ingredients(ingredients: &[String]) -> String {
    ingredients.join(", ")
}
