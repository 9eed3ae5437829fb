//! UI Components
//!
//! Leptos components for the two pages.

mod delete_confirm_button;
mod new_todo_form;
mod todo_list;
mod todo_row;
mod welcome_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use new_todo_form::NewTodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
pub use welcome_form::WelcomeForm;
