//! Recipe Book App
//!
//! Root component: recipe form above the recipe list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{RecipeEditor, RecipeList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide state to all children
    let store = Store::new(AppState::new());
    provide_context(store);
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let title = ctx.config.with_value(|config| config.title.clone());

    let count = move || count_label(store.recipes().read().len());

    view! {
        <div class="app-layout">
            <main class="recipe-book">
                <h1>{title}</h1>

                <RecipeEditor />

                <RecipeList />

                <p class="recipe-count">{count}</p>
            </main>
        </div>
    }
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 recipe".to_string(),
        n => format!("{} recipes", n),
    }
}
