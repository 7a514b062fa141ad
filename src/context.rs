//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::form::RecipeForm;
use crate::models::{Recipe, RecipeId};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Draft fields and Create/Edit mode of the recipe form
    pub form: RwSignal<RecipeForm>,
    pub config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            form: RwSignal::new(RecipeForm::new()),
            config: StoredValue::new(config),
        }
    }

    /// Load a recipe into the form for editing
    pub fn begin_edit(&self, recipe: &Recipe) {
        log::debug!("[FORM] edit {}", recipe.id);
        self.form.update(|form| form.begin_edit(recipe));
    }

    /// Leave edit mode if the given recipe is the one being edited
    pub fn forget(&self, id: RecipeId) {
        if self.form.with_untracked(|form| form.editing_id()) == Some(id) {
            log::debug!("[FORM] edited recipe {} deleted, cancelling edit", id);
            self.form.update(|form| form.cancel());
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
