//! In-memory list store scoped to a user session.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{Persistence, PersistenceError};
use crate::models::{List, Todo};
use crate::utils::next_id;

/// The lists held by one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStore {
    #[serde(default)]
    pub lists: Vec<List>,
}

/// Handle to a session store shared between the request handler and the gateway.
pub type SharedSession = Arc<Mutex<SessionStore>>;

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the store in a shareable handle.
    pub fn shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// Load a session previously written with [`SessionStore::save`].
    ///
    /// A missing file yields an empty session.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse session file: {}", path.display()))
    }

    /// Write the session as JSON, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create session directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize session")?;
        std::fs::write(path, content).with_context(|| format!("Failed to write session file: {}", path.display()))
    }

    fn list_mut(&mut self, id: i32) -> Option<&mut List> {
        self.lists.iter_mut().find(|list| list.id == id)
    }
}

/// Gateway over a [`SessionStore`].
#[derive(Clone)]
pub struct SessionPersistence {
    session: SharedSession,
}

impl SessionPersistence {
    pub fn new(session: SharedSession) -> Self {
        Self { session }
    }

    /// The underlying session handle.
    pub fn session(&self) -> SharedSession {
        Arc::clone(&self.session)
    }
}

#[async_trait]
impl Persistence for SessionPersistence {
    fn backend_type(&self) -> &str {
        "session"
    }

    async fn find_list(&self, id: i32) -> Result<List, PersistenceError> {
        let session = self.session.lock().await;
        session
            .lists
            .iter()
            .find(|list| list.id == id)
            .cloned()
            .ok_or(PersistenceError::NotFound(id))
    }

    async fn all_lists(&self) -> Result<Vec<List>, PersistenceError> {
        Ok(self.session.lock().await.lists.clone())
    }

    async fn create_list(&self, name: &str) -> Result<i32, PersistenceError> {
        let mut session = self.session.lock().await;
        let id = next_id(session.lists.iter().map(|list| list.id)).ok_or(PersistenceError::IdsExhausted)?;
        info!("create_list: [{}, {:?}]", id, name);
        session.lists.push(List::new(id, name));
        Ok(id)
    }

    async fn delete_list(&self, id: i32) -> Result<(), PersistenceError> {
        info!("delete_list: [{}]", id);
        let mut session = self.session.lock().await;
        match session.lists.iter().position(|list| list.id == id) {
            Some(index) => {
                // Todos first, then the list itself
                session.lists[index].todos.clear();
                session.lists.remove(index);
            }
            None => warn!("delete_list: list {} not found", id),
        }
        Ok(())
    }

    async fn rename_list(&self, id: i32, new_name: &str) -> Result<(), PersistenceError> {
        info!("rename_list: [{}, {:?}]", id, new_name);
        let mut session = self.session.lock().await;
        match session.list_mut(id) {
            Some(list) => list.name = new_name.to_string(),
            None => warn!("rename_list: list {} not found", id),
        }
        Ok(())
    }

    async fn create_todo(&self, list_id: i32, name: &str) -> Result<(), PersistenceError> {
        let mut session = self.session.lock().await;
        let Some(list) = session.list_mut(list_id) else {
            warn!("create_todo: list {} not found", list_id);
            return Ok(());
        };

        let id = next_id(list.todos.iter().map(|todo| todo.id)).ok_or(PersistenceError::IdsExhausted)?;
        info!("create_todo: [{}, {}, {:?}]", list_id, id, name);
        list.todos.push(Todo::new(id, name));
        Ok(())
    }

    async fn delete_todo(&self, list_id: i32, todo_id: i32) -> Result<(), PersistenceError> {
        info!("delete_todo: [{}, {}]", list_id, todo_id);
        let mut session = self.session.lock().await;
        match session.list_mut(list_id) {
            Some(list) => list.todos.retain(|todo| todo.id != todo_id),
            None => warn!("delete_todo: list {} not found", list_id),
        }
        Ok(())
    }

    async fn set_todo_completed(&self, list_id: i32, todo_id: i32, completed: bool) -> Result<(), PersistenceError> {
        info!("set_todo_completed: [{}, {}, {}]", list_id, todo_id, completed);
        let mut session = self.session.lock().await;
        match session.list_mut(list_id).and_then(|list| list.todo_mut(todo_id)) {
            Some(todo) => todo.completed = completed,
            None => warn!("set_todo_completed: todo {} in list {} not found", todo_id, list_id),
        }
        Ok(())
    }

    async fn complete_all_todos(&self, list_id: i32) -> Result<(), PersistenceError> {
        info!("complete_all_todos: [{}]", list_id);
        let mut session = self.session.lock().await;
        match session.list_mut(list_id) {
            Some(list) => list.todos.iter_mut().for_each(|todo| todo.completed = true),
            None => warn!("complete_all_todos: list {} not found", list_id),
        }
        Ok(())
    }
}
