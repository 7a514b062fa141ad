//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Recipe, RecipeId};

/// Mutation primitives over the recipe collection
pub trait RecipeStore {
    /// Append a recipe. No uniqueness or validation check.
    fn add_recipe(&mut self, recipe: Recipe);
    /// Remove the first recipe with this id; no-op when absent
    fn remove_recipe(&mut self, id: RecipeId);
}

impl RecipeStore for Vec<Recipe> {
    fn add_recipe(&mut self, recipe: Recipe) {
        self.push(recipe);
    }

    fn remove_recipe(&mut self, id: RecipeId) {
        if let Some(pos) = self.iter().position(|recipe| recipe.id == id) {
            self.remove(pos);
        }
    }
}

/// Monotonic id source. Ids are never reused.
#[derive(Clone, Debug)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> RecipeId {
        let id = RecipeId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All recipes, in insertion order
    pub recipes: Vec<Recipe>,
    /// Source of fresh recipe ids
    pub ids: IdSequence,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a recipe to the store
pub fn store_add_recipe(store: &AppStore, recipe: Recipe) {
    log::debug!("[STORE] add recipe {} ({})", recipe.id, recipe.name);
    store.recipes().write().add_recipe(recipe);
}

/// Remove a recipe from the store by ID
pub fn store_remove_recipe(store: &AppStore, id: RecipeId) {
    log::debug!("[STORE] remove recipe {}", id);
    store.recipes().write().remove_recipe(id);
}

/// Replace a recipe: remove the record with its id, then append it.
/// The replaced recipe ends up last.
pub fn store_replace_recipe(store: &AppStore, recipe: Recipe) {
    log::debug!("[STORE] replace recipe {} ({})", recipe.id, recipe.name);
    let recipes_field = store.recipes();
    let mut recipes = recipes_field.write();
    recipes.remove_recipe(recipe.id);
    recipes.add_recipe(recipe);
}

/// Draw the next recipe id
pub fn store_next_id(store: &AppStore) -> RecipeId {
    store.ids().write().next_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_recipe(id: u64, name: &str) -> Recipe {
        Recipe::new(
            RecipeId(id),
            name.to_string(),
            vec!["water".to_string()],
            "Stir".to_string(),
        )
    }

    fn ids(recipes: &[Recipe]) -> Vec<u64> {
        recipes.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_add_recipe_appends() {
        let mut recipes = Vec::new();
        recipes.add_recipe(make_recipe(1, "Soup"));
        recipes.add_recipe(make_recipe(2, "Stew"));
        assert_eq!(ids(&recipes), vec![1, 2]);
    }

    #[test]
    fn test_add_duplicate_id_keeps_both() {
        let mut recipes = Vec::new();
        recipes.add_recipe(make_recipe(1, "Soup"));
        recipes.add_recipe(make_recipe(1, "Soup again"));
        assert_eq!(recipes.len(), 2);
    }

    #[test]
    fn test_remove_recipe_preserves_order() {
        let mut recipes = vec![
            make_recipe(1, "A"),
            make_recipe(2, "B"),
            make_recipe(3, "C"),
        ];
        recipes.remove_recipe(RecipeId(2));
        assert_eq!(ids(&recipes), vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut recipes = vec![make_recipe(1, "A"), make_recipe(2, "B")];
        recipes.remove_recipe(RecipeId(99));
        assert_eq!(ids(&recipes), vec![1, 2]);
    }

    #[test]
    fn test_remove_only_first_duplicate() {
        let mut recipes = vec![make_recipe(1, "A"), make_recipe(1, "B")];
        recipes.remove_recipe(RecipeId(1));
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].name, "B");
    }

    #[test]
    fn test_id_sequence_is_monotonic() {
        let mut seq = IdSequence::new();
        let issued: Vec<RecipeId> = (0..1000).map(|_| seq.next_id()).collect();
        assert_eq!(issued[0], RecipeId(1));
        assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_store_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());

            let first = store_next_id(&store);
            let second = store_next_id(&store);
            assert_ne!(first, second);

            store_add_recipe(&store, make_recipe(first.0, "Soup"));
            store_add_recipe(&store, make_recipe(second.0, "Stew"));
            assert_eq!(ids(&store.recipes().get_untracked()), vec![first.0, second.0]);

            store_remove_recipe(&store, first);
            assert_eq!(ids(&store.recipes().get_untracked()), vec![second.0]);
        });
    }

    #[test]
    fn test_store_replace_recipe_moves_to_end() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            for (id, name) in [(1, "A"), (2, "B"), (3, "C")] {
                store_add_recipe(&store, make_recipe(id, name));
            }

            store_replace_recipe(&store, make_recipe(1, "A2"));

            let recipes = store.recipes().get_untracked();
            assert_eq!(ids(&recipes), vec![2, 3, 1]);
            assert_eq!(recipes[2].name, "A2");
        });
    }

    #[test]
    fn test_store_replace_missing_recipe_appends() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(AppState::new());
            store_add_recipe(&store, make_recipe(1, "A"));

            store_replace_recipe(&store, make_recipe(9, "Z"));

            assert_eq!(ids(&store.recipes().get_untracked()), vec![1, 9]);
        });
    }
}
