//! Recipe Editor Component
//!
//! Name/ingredients/instructions inputs with Add, or Update and Cancel while editing.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::form::RecipeForm;
use crate::store::{store_add_recipe, store_next_id, store_replace_recipe, use_app_store};

/// Form for adding a recipe or updating the one selected for edit
#[component]
pub fn RecipeEditor() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = ctx.form;

    let editing = Memo::new(move |_| form.with(RecipeForm::is_editing));

    let add_recipe = move || {
        match form.try_update(|f| f.submit_add(|| store_next_id(&store))) {
            Some(Ok(recipe)) => store_add_recipe(&store, recipe),
            Some(Err(e)) => log::debug!("[FORM] add rejected: {}", e),
            None => {}
        }
    };

    let update_recipe = move || {
        match form.try_update(RecipeForm::submit_update) {
            Some(Ok(recipe)) => store_replace_recipe(&store, recipe),
            Some(Err(e)) => log::debug!("[FORM] update rejected: {}", e),
            None => {}
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if editing.get_untracked() {
            update_recipe();
        } else {
            add_recipe();
        }
    };

    view! {
        <form class="recipe-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Recipe Name"
                prop:value=move || form.with(|f| f.draft.name.clone())
                on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
            />
            <input
                type="text"
                placeholder="Ingredients (comma separated)"
                prop:value=move || form.with(|f| f.draft.ingredients.clone())
                on:input=move |ev| form.update(|f| f.set_ingredients(event_target_value(&ev)))
            />
            <textarea
                placeholder="Instructions"
                prop:value=move || form.with(|f| f.draft.instructions.clone())
                on:input=move |ev| form.update(|f| f.set_instructions(event_target_value(&ev)))
            ></textarea>

            <div class="form-actions">
                <Show
                    when=move || editing.get()
                    fallback=|| view! { <button type="submit" class="add-btn">"Add Recipe"</button> }
                >
                    <button type="submit" class="update-btn">"Update Recipe"</button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |_| {
                            log::debug!("[FORM] edit cancelled");
                            form.update(RecipeForm::cancel);
                        }
                    >
                        "Cancel"
                    </button>
                </Show>
            </div>
        </form>
    }
}
