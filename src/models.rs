//! Plain data structures handed to callers of the persistence gateway.

use serde::{Deserialize, Serialize};

use crate::entities::{list, todo};

/// A named, ordered collection of todos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<Todo>,
}

/// A single item inside a [`List`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub completed: bool,
}

impl List {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            todos: Vec::new(),
        }
    }

    pub fn todo(&self, todo_id: i32) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub fn todo_mut(&mut self, todo_id: i32) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }
}

impl Todo {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
        }
    }
}

impl List {
    /// Builds a list from its row and the rows of its todos.
    pub fn from_rows(model: list::Model, todos: Vec<todo::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            todos: todos.into_iter().map(Todo::from).collect(),
        }
    }
}

impl From<todo::Model> for Todo {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            completed: model.completed,
        }
    }
}

