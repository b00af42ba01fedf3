//! Todo use-cases over a `TodoStore`.
//!
//! # Design
//! `TodoService` owns its store outright; the HTTP layer shares it behind a
//! lock. Each method is one synchronous step that either fully applies or
//! returns `TodoError` before touching state.
//!
//! Create and update both answer with a `Confirmation` whose `details` is the
//! record as stored after the call.

use tracing::{debug, info};

use crate::dto::{Confirmation, NewTodo, Todo, TodoId, TodoPatch};
use crate::error::TodoError;
use crate::store::TodoStore;

/// Todo use-cases backed by an owned `TodoStore`.
#[derive(Debug, Default)]
pub struct TodoService {
    store: TodoStore,
}

impl TodoService {
    pub fn new(store: TodoStore) -> Self {
        Self { store }
    }

    /// Appends a new unchecked todo with a freshly issued id.
    pub fn create(&mut self, input: NewTodo) -> Confirmation<Todo> {
        let todo = Todo {
            id: self.store.issue_id(),
            text: input.text,
            is_checked: false,
        };
        self.store.append(todo.clone());
        info!(id = %todo.id, "todo created");

        Confirmation {
            message: "This action added a new todo".to_string(),
            details: todo,
        }
    }

    /// All todos in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.store.iter().cloned().collect()
    }

    pub fn get(&self, id: TodoId) -> Result<Todo, TodoError> {
        self.store.find(id).cloned().ok_or(TodoError::NotFound(id))
    }

    /// Replaces `text` and `is_checked` of an existing todo, keeping its id.
    pub fn update(&mut self, id: TodoId, patch: TodoPatch) -> Result<Confirmation<Todo>, TodoError> {
        let index = self.store.position(id).ok_or(TodoError::NotFound(id))?;
        let todo = self.store.get_mut(index).ok_or(TodoError::NotFound(id))?;
        todo.text = patch.text;
        todo.is_checked = patch.is_checked;
        let details = todo.clone();
        info!(%id, is_checked = details.is_checked, "todo updated");

        Ok(Confirmation {
            message: format!("This action updated a #{id} todo"),
            details,
        })
    }

    pub fn delete(&mut self, id: TodoId) -> Result<String, TodoError> {
        let index = self.store.position(id).ok_or(TodoError::NotFound(id))?;
        self.store.remove_at(index).ok_or(TodoError::NotFound(id))?;
        info!(%id, remaining = self.store.len(), "todo removed");
        Ok(format!("This action removed a #{id} todo"))
    }

    /// Removes every todo. Ids already issued are never handed out again.
    pub fn clear(&mut self) -> String {
        let removed = self.store.len();
        self.store.clear();
        debug!(removed, "todos cleared");
        "This action deleted all todos".to_string()
    }
}
