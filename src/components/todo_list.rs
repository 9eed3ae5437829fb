//! Todo List Component
//!
//! Greeting, create form, loading flag, error banner and the list itself.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NewTodoForm, TodoRow};
use crate::context::{AppContext, Page};
use crate::store::{store_last_error, store_loading, store_todos, store_user_name, use_app_store};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Load on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            client.fetch_all().await;
        });
    });

    view! {
        <section class="todo-list">
            <header class="todo-header">
                <h1>{move || format!("Hello, {}!", store_user_name(&store))}</h1>
                <button type="button" class="change-name-btn" on:click=move |_| ctx.show(Page::Welcome)>
                    "Change name"
                </button>
            </header>

            <NewTodoForm />

            <Show when=move || store_loading(&store)>
                <p class="loading">"Loading..."</p>
            </Show>

            {move || {
                let error = store_last_error(&store);
                (!error.is_empty()).then(|| view! { <p class="error-banner">{error}</p> })
            }}

            <ul class="todo-items">
                {move || store_todos(&store).into_iter().map(|todo| view! {
                    <TodoRow todo=todo />
                }).collect_view()}
            </ul>

            <p class="item-count">{move || format!("{} todos", store_todos(&store).len())}</p>
        </section>
    }
}
