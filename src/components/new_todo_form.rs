//! New Todo Form Component
//!
//! Title, optional priority and optional due date.

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{Priority, TodoDraft};

use crate::context::AppContext;

/// Draft from raw form values; `None` when the title is blank
fn build_draft(title: &str, priority: &str, due_date: &str) -> Option<TodoDraft> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let mut draft = TodoDraft::new(title);
    if let Ok(p) = priority.parse::<Priority>() {
        draft = draft.priority(p);
    }
    if !due_date.is_empty() {
        draft = draft.due_date(due_date);
    }
    Some(draft)
}

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (priority, set_priority) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = build_draft(&title.get(), &priority.get(), &due_date.get()) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            if client.create(&draft).await {
                set_title.set(String::new());
                set_due_date.set(String::new());
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="What needs doing?"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <select on:change=move |ev| set_priority.set(event_target_value(&ev))>
                <option value="">"No priority"</option>
                {Priority::ALL.iter().map(|p| view! {
                    <option value=p.as_str()>{p.as_str()}</option>
                }).collect_view()}
            </select>
            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_builds_nothing() {
        assert_eq!(build_draft("  ", "high", ""), None);
    }

    #[test]
    fn test_optional_fields() {
        let draft = build_draft(" Water plants ", "", "").unwrap();
        assert_eq!(draft, TodoDraft::new("Water plants"));

        let draft = build_draft("Pay rent", "high", "2025-02-01").unwrap();
        assert_eq!(draft.priority, Some(Priority::High));
        assert_eq!(draft.due_date.as_deref(), Some("2025-02-01"));
    }
}
