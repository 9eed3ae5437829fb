//! Todo Row Component
//!
//! One todo with a completion checkbox and a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{Todo, TodoPatch};

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;

#[component]
pub fn TodoRow(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let completed = todo.completed;
    let row_class = if completed { "todo-row completed" } else { "todo-row" };

    let toggle_id = todo.id.clone();
    let on_toggle = move |_: web_sys::Event| {
        let client = ctx.client();
        let id = toggle_id.clone();
        spawn_local(async move {
            client.update(&id, &TodoPatch::default().completed(!completed)).await;
        });
    };

    let delete_id = todo.id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = delete_id.clone();
        spawn_local(async move {
            client.delete(&id).await;
        });
    });

    view! {
        <li class=row_class>
            <input type="checkbox" prop:checked=completed on:change=on_toggle />
            <span class="todo-title">{todo.title}</span>
            {todo.priority.map(|p| view! { <span class="todo-priority">{p.as_str()}</span> })}
            {todo.due_date.map(|d| view! { <span class="todo-due">{d}</span> })}
            {todo.description.map(|d| view! { <p class="todo-description">{d}</p> })}
            <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
        </li>
    }
}
