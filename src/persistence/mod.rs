//! Persistence gateway for lists and todos.
//!
//! This module defines the operation set every backing store must provide,
//! along with the error type shared by all backends. Two implementations exist:
//!
//! * [`SessionPersistence`] keeps lists in an explicit [`SessionStore`] owned by the caller
//! * [`DatabasePersistence`] stores lists and todos in a relational database through SeaORM
//!
//! The gateway never validates names; callers run [`crate::validation`] first.

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use sea_orm::DbErr;

use crate::config::{StorageBackend, StorageConfig};
use crate::models::List;

pub mod database;
pub mod session;

pub use database::DatabasePersistence;
pub use session::{SessionPersistence, SessionStore, SharedSession};

/// Errors raised by persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("List not found: {0}")]
    NotFound(i32),

    #[error("No ids left to allocate")]
    IdsExhausted,

    #[error("Storage error: {0}")]
    Storage(#[from] DbErr),
}

impl PersistenceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Uniform CRUD interface over a list store.
///
/// Mutations that target a list or todo which does not exist are no-ops.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Returns the backend type identifier ("session" or "database").
    fn backend_type(&self) -> &str;

    async fn find_list(&self, id: i32) -> Result<List, PersistenceError>;
    async fn all_lists(&self) -> Result<Vec<List>, PersistenceError>;

    /// Stores a new empty list and returns its allocated id.
    async fn create_list(&self, name: &str) -> Result<i32, PersistenceError>;
    /// Removes a list together with all of its todos.
    async fn delete_list(&self, id: i32) -> Result<(), PersistenceError>;
    async fn rename_list(&self, id: i32, new_name: &str) -> Result<(), PersistenceError>;

    async fn create_todo(&self, list_id: i32, name: &str) -> Result<(), PersistenceError>;
    async fn delete_todo(&self, list_id: i32, todo_id: i32) -> Result<(), PersistenceError>;
    async fn set_todo_completed(&self, list_id: i32, todo_id: i32, completed: bool) -> Result<(), PersistenceError>;
    async fn complete_all_todos(&self, list_id: i32) -> Result<(), PersistenceError>;
}

/// Session store for the configured backend.
///
/// The session file is only read when the session backend is selected; the
/// database backend gets an empty, unused store.
pub fn load_session(config: &StorageConfig) -> Result<SharedSession> {
    let store = match config.backend {
        StorageBackend::Session => SessionStore::load(&config.session_file)?,
        StorageBackend::Database => SessionStore::new(),
    };
    Ok(store.shared())
}

/// Open the backend selected in configuration.
///
/// # Arguments
/// * `config` - Storage settings
/// * `session` - Store used when the session backend is selected
///
/// # Errors
/// Returns error if the database cannot be reached or its schema cannot be created
pub async fn open(config: &StorageConfig, session: SharedSession) -> Result<Box<dyn Persistence>> {
    match config.backend {
        StorageBackend::Session => {
            info!("Storage: using session backend");
            Ok(Box::new(SessionPersistence::new(session)))
        }
        StorageBackend::Database => {
            info!("Storage: using database backend at {}", config.database_url);
            let database = DatabasePersistence::connect(&config.database_url, config.max_connections).await?;
            Ok(Box::new(database))
        }
    }
}
