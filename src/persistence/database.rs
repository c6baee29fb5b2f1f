//! Relational list store backed by SeaORM.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use super::{Persistence, PersistenceError};
use crate::entities::{list, todo};
use crate::models::List;
use crate::repositories::{ListRepository, TodoRepository};
use crate::utils::next_id;

/// Gateway over the `lists` and `todo` tables.
#[derive(Clone)]
pub struct DatabasePersistence {
    conn: DatabaseConnection,
}

impl DatabasePersistence {
    /// Connect to `database_url` and create the tables if they are missing.
    ///
    /// # Arguments
    /// * `database_url` - SeaORM connection string, e.g. `sqlite::memory:`
    /// * `max_connections` - Pool size
    ///
    /// # Errors
    /// Returns error if the connection or schema creation fails
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(database_url.to_string());
        options
            .max_connections(max_connections.max(1))
            .min_connections(1)
            .connect_timeout(Duration::from_secs(8))
            .sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let storage = Self { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create the `lists` and `todo` tables from the entity definitions.
    async fn init_schema(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut lists = schema.create_table_from_entity(list::Entity);
        lists.if_not_exists();
        let mut todos = schema.create_table_from_entity(todo::Entity);
        todos.if_not_exists();

        for statement in [backend.build(&lists), backend.build(&todos)] {
            debug!("Schema: {}", statement.sql);
            self.conn.execute(statement).await?;
        }
        Ok(())
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    async fn require_list(&self, id: i32) -> Result<Option<list::Model>, PersistenceError> {
        Ok(ListRepository::get_by_id(&self.conn, id).await?)
    }
}

#[async_trait]
impl Persistence for DatabasePersistence {
    fn backend_type(&self) -> &str {
        "database"
    }

    async fn find_list(&self, id: i32) -> Result<List, PersistenceError> {
        let row = self.require_list(id).await?.ok_or(PersistenceError::NotFound(id))?;
        let todos = TodoRepository::get_for_list(&self.conn, id).await?;
        Ok(List::from_rows(row, todos))
    }

    async fn all_lists(&self) -> Result<Vec<List>, PersistenceError> {
        let rows = ListRepository::get_all(&self.conn).await?;
        let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();

        let mut todos_by_list: HashMap<i32, Vec<todo::Model>> = HashMap::new();
        for todo in TodoRepository::get_for_lists(&self.conn, &ids).await? {
            todos_by_list.entry(todo.list_id).or_default().push(todo);
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let todos = todos_by_list.remove(&row.id).unwrap_or_default();
                List::from_rows(row, todos)
            })
            .collect())
    }

    async fn create_list(&self, name: &str) -> Result<i32, PersistenceError> {
        let existing = ListRepository::get_all(&self.conn).await?;
        let id = next_id(existing.iter().map(|row| row.id)).ok_or(PersistenceError::IdsExhausted)?;
        ListRepository::insert(&self.conn, id, name).await?;
        Ok(id)
    }

    /// Deletes the list's todos, then the list row.
    ///
    /// The two statements are not wrapped in a transaction. Todos always go
    /// first, so an interrupted delete can leave an empty list behind but never
    /// a missing list whose todos survive.
    async fn delete_list(&self, id: i32) -> Result<(), PersistenceError> {
        TodoRepository::delete_for_list(&self.conn, id).await?;
        if ListRepository::delete(&self.conn, id).await? == 0 {
            warn!("delete_list: list {} not found", id);
        }
        Ok(())
    }

    async fn rename_list(&self, id: i32, new_name: &str) -> Result<(), PersistenceError> {
        if ListRepository::rename(&self.conn, id, new_name).await? == 0 {
            warn!("rename_list: list {} not found", id);
        }
        Ok(())
    }

    async fn create_todo(&self, list_id: i32, name: &str) -> Result<(), PersistenceError> {
        if self.require_list(list_id).await?.is_none() {
            warn!("create_todo: list {} not found", list_id);
            return Ok(());
        }

        let existing = TodoRepository::get_for_list(&self.conn, list_id).await?;
        let id = next_id(existing.iter().map(|todo| todo.id)).ok_or(PersistenceError::IdsExhausted)?;
        TodoRepository::insert(&self.conn, list_id, id, name).await?;
        Ok(())
    }

    async fn delete_todo(&self, list_id: i32, todo_id: i32) -> Result<(), PersistenceError> {
        if TodoRepository::delete(&self.conn, list_id, todo_id).await? == 0 {
            warn!("delete_todo: todo {} in list {} not found", todo_id, list_id);
        }
        Ok(())
    }

    async fn set_todo_completed(&self, list_id: i32, todo_id: i32, completed: bool) -> Result<(), PersistenceError> {
        if TodoRepository::set_completed(&self.conn, list_id, todo_id, completed).await? == 0 {
            warn!("set_todo_completed: todo {} in list {} not found", todo_id, list_id);
        }
        Ok(())
    }

    async fn complete_all_todos(&self, list_id: i32) -> Result<(), PersistenceError> {
        TodoRepository::complete_all(&self.conn, list_id).await?;
        Ok(())
    }
}
