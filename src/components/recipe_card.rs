//! Recipe Card Component
//!
//! A single recipe entry with Edit and Delete.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Recipe;
use crate::store::{store_remove_recipe, use_app_store};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = recipe.id;
    let name = recipe.name.clone();
    let ingredients = recipe.ingredients_text();
    let instruction = recipe.instruction.clone();

    let is_editing = move || ctx.form.with(|f| f.editing_id() == Some(id));

    let on_edit = move |_: web_sys::MouseEvent| ctx.begin_edit(&recipe);

    // No confirmation step
    let on_delete = move |_: web_sys::MouseEvent| {
        ctx.forget(id);
        store_remove_recipe(&store, id);
    };

    view! {
        <li class=move || if is_editing() { "recipe-card editing" } else { "recipe-card" }>
            <h2 class="recipe-name">{name}</h2>
            <p class="recipe-ingredients">
                <strong>"Ingredients:"</strong>
                " "
                {ingredients}
            </p>
            <p class="recipe-instructions">
                <strong>"Instructions:"</strong>
                " "
                {instruction}
            </p>
            <div class="recipe-actions">
                <button class="edit-btn" on:click=on_edit>"Edit"</button>
                <button class="delete-btn" on:click=on_delete>"Delete"</button>
            </div>
        </li>
    }
}
