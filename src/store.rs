//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo fields
//! mirror the client's `TodoListState`; they are only written by
//! [`store_apply_todo_state`].

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::{Todo, TodoListState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Display name entered on the welcome page
    pub user_name: String,
    /// Last fetched todos
    pub todos: Vec<Todo>,
    /// A list fetch is in flight
    pub loading: bool,
    /// Most recent client error, empty when none
    pub last_error: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Fields of a client snapshot that differ from what the store holds
#[derive(Debug, Default, PartialEq)]
pub struct TodoStateChanges {
    pub todos: Option<Vec<Todo>>,
    pub loading: Option<bool>,
    pub last_error: Option<String>,
}

pub fn todo_state_changes(current: &TodoListState, next: &TodoListState) -> TodoStateChanges {
    TodoStateChanges {
        todos: (current.items != next.items).then(|| next.items.clone()),
        loading: (current.loading != next.loading).then_some(next.loading),
        last_error: (current.last_error != next.last_error).then(|| next.last_error.clone()),
    }
}

/// Copy a client state snapshot into the store, touching only changed fields
pub fn store_apply_todo_state(store: &AppStore, state: &TodoListState) {
    let current = TodoListState {
        items: store.todos().get_untracked(),
        loading: store.loading().get_untracked(),
        last_error: store.last_error().get_untracked(),
    };
    let changes = todo_state_changes(&current, state);
    if let Some(todos) = changes.todos {
        store.todos().set(todos);
    }
    if let Some(loading) = changes.loading {
        store.loading().set(loading);
    }
    if let Some(last_error) = changes.last_error {
        store.last_error().set(last_error);
    }
}

pub fn store_set_user_name(store: &AppStore, name: String) {
    store.user_name().set(name);
}

pub fn store_user_name(store: &AppStore) -> String {
    store.user_name().get()
}

pub fn store_todos(store: &AppStore) -> Vec<Todo> {
    store.todos().get()
}

pub fn store_loading(store: &AppStore) -> bool {
    store.loading().get()
}

pub fn store_last_error(store: &AppStore) -> String {
    store.last_error().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            title: format!("Todo {}", id),
            description: None,
            completed: false,
            due_date: None,
            priority: None,
            is_deleted: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_error_only_change_leaves_list_alone() {
        let current = TodoListState {
            items: vec![todo("1")],
            loading: false,
            last_error: "Failed to fetch TODO".to_string(),
        };
        let next = TodoListState {
            last_error: String::new(),
            ..current.clone()
        };

        let changes = todo_state_changes(&current, &next);
        assert_eq!(changes.todos, None);
        assert_eq!(changes.loading, None);
        assert_eq!(changes.last_error, Some(String::new()));
    }

    #[test]
    fn test_identical_snapshot_has_no_changes() {
        let state = TodoListState {
            items: vec![todo("1"), todo("2")],
            loading: true,
            last_error: String::new(),
        };
        assert_eq!(todo_state_changes(&state, &state), TodoStateChanges::default());
    }

    #[test]
    fn test_new_items_and_loading_off() {
        let current = TodoListState { loading: true, ..Default::default() };
        let next = TodoListState { items: vec![todo("9")], ..Default::default() };

        let changes = todo_state_changes(&current, &next);
        assert_eq!(changes.todos.map(|t| t.len()), Some(1));
        assert_eq!(changes.loading, Some(false));
        assert_eq!(changes.last_error, None);
    }
}
