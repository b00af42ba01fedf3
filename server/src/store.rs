//! In-memory todo storage.
//!
//! # Design
//! `TodoStore` is a plain `Vec` in insertion order plus the next id to hand
//! out. Lookups are linear scans. The store knows nothing about messages or
//! errors; `TodoService` is its only caller.
//!
//! The id counter survives `clear`, so an id is never issued twice for the
//! lifetime of a store.

use crate::dto::{Todo, TodoId};

/// Ordered collection of todos and the id counter.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the current counter value and advances it.
    pub fn issue_id(&mut self) -> TodoId {
        let id = TodoId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn append(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id == id)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Todo> {
        self.todos.get_mut(index)
    }

    /// Removes the todo at `index`, shifting later entries down.
    pub fn remove_at(&mut self, index: usize) -> Option<Todo> {
        (index < self.todos.len()).then(|| self.todos.remove(index))
    }

    /// Drops every todo. The id counter is left untouched.
    pub fn clear(&mut self) {
        self.todos.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}
