//! UI Components
//!
//! Reusable Leptos components.

mod recipe_editor;
mod recipe_list;
mod recipe_card;

pub use recipe_editor::RecipeEditor;
pub use recipe_list::RecipeList;
pub use recipe_card::RecipeCard;
