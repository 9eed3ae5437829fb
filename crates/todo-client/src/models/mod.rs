//! Models
//!
//! Data structures matching the remote API.

mod envelope;
mod todo;

pub use envelope::{Envelope, TodoPage};
pub use todo::{Priority, Todo, TodoDraft, TodoPatch};
