//! Todo List State
//!
//! Observable state owned by a [`TodoClient`](crate::TodoClient).

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::models::Todo;

/// Snapshot of what the client last saw
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoListState {
    /// Last fetched list, replaced wholesale on each successful fetch
    pub items: Vec<Todo>,
    /// True while a list fetch is in flight
    pub loading: bool,
    /// Most recent failure, empty when the last operation succeeded
    pub last_error: String,
}

impl TodoListState {
    pub fn has_error(&self) -> bool {
        !self.last_error.is_empty()
    }
}

type Listener = Rc<dyn Fn(&TodoListState)>;

/// Shared handle to a [`TodoListState`]
///
/// Clones point at the same state and listeners. Listeners run after every
/// mutation with a snapshot of the new state.
#[derive(Clone, Default)]
pub struct SharedTodoState {
    inner: Rc<RefCell<TodoListState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
}

impl fmt::Debug for SharedTodoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTodoState")
            .field("state", &*self.inner.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl SharedTodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TodoListState {
        self.inner.borrow().clone()
    }

    pub fn items(&self) -> Vec<Todo> {
        self.inner.borrow().items.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.borrow().loading
    }

    pub fn last_error(&self) -> String {
        self.inner.borrow().last_error.clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&TodoListState) + 'static) {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Apply a mutation, then notify listeners.
    ///
    /// No borrow is held while listeners run, so a listener may read the
    /// state or subscribe further listeners.
    pub(crate) fn update(&self, f: impl FnOnce(&mut TodoListState)) {
        let snapshot = {
            let mut state = self.inner.borrow_mut();
            f(&mut state);
            state.clone()
        };
        let listeners: Vec<Listener> = self.listeners.borrow().clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
