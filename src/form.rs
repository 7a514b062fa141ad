//! Recipe Form State
//!
//! Draft fields plus the Create/Edit mode machine behind the recipe form.
//! Plain data, no DOM types.

use thiserror::Error;

use crate::models::{parse_ingredients, Recipe, RecipeId};

/// Why a draft was not committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("recipe name is empty")]
    EmptyName,
    #[error("ingredient list is empty")]
    EmptyIngredients,
    #[error("instructions are empty")]
    EmptyInstructions,
    #[error("no recipe is being edited")]
    NotEditing,
}

/// Uncommitted field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    /// Raw comma separated text, as typed
    pub ingredients: String,
    pub instructions: String,
}

impl Draft {
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients_text(),
            instructions: recipe.instruction.clone(),
        }
    }

    /// Non-empty check applied before any commit
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        if parse_ingredients(&self.ingredients).is_empty() {
            return Err(DraftError::EmptyIngredients);
        }
        if self.instructions.trim().is_empty() {
            return Err(DraftError::EmptyInstructions);
        }
        Ok(())
    }

    fn to_recipe(&self, id: RecipeId) -> Recipe {
        Recipe::new(
            id,
            self.name.clone(),
            parse_ingredients(&self.ingredients),
            self.instructions.clone(),
        )
    }
}

/// Form mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Composing a new recipe
    #[default]
    Create,
    /// Editing a copy of an existing recipe
    Edit(Recipe),
}

/// Form state: draft values plus the current mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeForm {
    pub draft: Draft,
    pub mode: FormMode,
}

impl RecipeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: String) {
        self.draft.name = value;
    }

    pub fn set_ingredients(&mut self, value: String) {
        self.draft.ingredients = value;
    }

    pub fn set_instructions(&mut self, value: String) {
        self.draft.instructions = value;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Id of the recipe under edit, if any
    pub fn editing_id(&self) -> Option<RecipeId> {
        match &self.mode {
            FormMode::Edit(recipe) => Some(recipe.id),
            FormMode::Create => None,
        }
    }

    /// Build a new recipe from the draft and reset the form.
    ///
    /// `next_id` is only called once the draft is valid, so rejected
    /// submissions do not consume ids. On error the draft is left as is.
    pub fn submit_add(&mut self, next_id: impl FnOnce() -> RecipeId) -> Result<Recipe, DraftError> {
        self.draft.validate()?;
        let recipe = self.draft.to_recipe(next_id());
        self.reset();
        Ok(recipe)
    }

    /// Load a recipe into the draft and switch to edit mode
    pub fn begin_edit(&mut self, recipe: &Recipe) {
        self.draft = Draft::from_recipe(recipe);
        self.mode = FormMode::Edit(recipe.clone());
    }

    /// Rebuild the edited recipe from the draft, keeping its id, and reset.
    ///
    /// The caller replaces the stored record (remove then add).
    pub fn submit_update(&mut self) -> Result<Recipe, DraftError> {
        let id = self.editing_id().ok_or(DraftError::NotEditing)?;
        self.draft.validate()?;
        let recipe = self.draft.to_recipe(id);
        self.reset();
        Ok(recipe)
    }

    /// Drop the draft and return to create mode
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = Draft::default();
        self.mode = FormMode::Create;
    }
}
