//! Todo Web UI App
//!
//! Composes the name store and todo client and switches between the two
//! pages.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoList, WelcomeForm};
use crate::context::{AppContext, Page};
use crate::store::{store_apply_todo_state, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (page, set_page) = signal(Page::Welcome);
    let ctx = AppContext::create((page, set_page));

    // Mirror client state into the store
    ctx.client()
        .state()
        .subscribe(move |state| store_apply_todo_state(&store, state));

    provide_context(ctx);

    view! {
        <main class="app">
            {move || match page.get() {
                Page::Welcome => view! { <WelcomeForm /> }.into_any(),
                Page::Todos => view! { <TodoList /> }.into_any(),
            }}
        </main>
    }
}
