//! Recipe List Component
//!
//! Order-preserving projection of the store's recipes.

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecipeList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="recipe-list">
            <For
                each=move || store.recipes().get()
                // Key on every shown field so a replaced recipe re-renders
                key=|recipe| {
                    (
                        recipe.id,
                        recipe.name.clone(),
                        recipe.ingredients.clone(),
                        recipe.instruction.clone(),
                    )
                }
                children=move |recipe| view! { <RecipeCard recipe=recipe /> }
            />
        </ul>
    }
}
