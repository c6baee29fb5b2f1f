//! Application service sitting between a request handler and the persistence gateway.
//!
//! The service accepts raw user input, trims names, runs validation, calls the
//! gateway and reports back a flash message plus the response the handler
//! should send. Validation and not-found failures come back as [`ServiceError`]
//! values whose [`ServiceError::user_message`] is ready to show to the user.

use log::info;
use serde::Serialize;

use crate::aggregation::{is_list_complete, remaining_count, sort_lists, total_count};
use crate::constants::{
    ERROR_LIST_NOT_FOUND, ERROR_TODO_NOT_FOUND, PATH_LISTS, SUCCESS_LIST_CREATED, SUCCESS_LIST_DELETED,
    SUCCESS_LIST_UPDATED, SUCCESS_TODOS_COMPLETED, SUCCESS_TODO_CREATED, SUCCESS_TODO_DELETED, SUCCESS_TODO_UPDATED,
};
use crate::models::List;
use crate::persistence::{Persistence, PersistenceError};
use crate::validation::{validate_list_name, validate_todo_name, ValidationError};

/// Where a request came from, which decides the kind of response it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A regular form submission expecting a full page
    Page,
    /// A script-issued request (`X-Requested-With: XMLHttpRequest`)
    Ajax,
}

impl Origin {
    /// Classify a request from its `X-Requested-With` header value.
    pub fn from_requested_with(header: Option<&str>) -> Self {
        match header {
            Some(value) if value.eq_ignore_ascii_case("XMLHttpRequest") => Self::Ajax,
            _ => Self::Page,
        }
    }
}

/// What the request handler should send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Redirect(String),
    NoContent,
}

/// Result of a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: &'static str,
    pub response: Response,
}

impl Outcome {
    fn redirect(message: &'static str, path: String) -> Self {
        Self {
            message,
            response: Response::Redirect(path),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Todo {todo_id} not found in list {list_id}")]
    TodoNotFound { list_id: i32, todo_id: i32 },
}

impl ServiceError {
    /// Message suitable for a flash error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(error) => error.to_string(),
            Self::Persistence(PersistenceError::NotFound(_)) => ERROR_LIST_NOT_FOUND.to_string(),
            Self::Persistence(error) => error.to_string(),
            Self::TodoNotFound { .. } => ERROR_TODO_NOT_FOUND.to_string(),
        }
    }

    /// Validation and not-found errors are recoverable; storage failures are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Persistence(PersistenceError::Storage(_)))
    }
}

/// One row of the lists overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub id: i32,
    pub name: String,
    pub remaining: usize,
    pub total: usize,
    pub complete: bool,
    /// Position of the list before completion ordering was applied
    pub index: usize,
}

fn list_path(id: i32) -> String {
    format!("{}/{}", PATH_LISTS, id)
}

/// Request-scoped service owning one gateway handle.
pub struct TodoService {
    store: Box<dyn Persistence>,
}

impl TodoService {
    pub fn new(store: Box<dyn Persistence>) -> Self {
        Self { store }
    }

    /// All lists with their counts, incomplete lists first.
    pub async fn overview(&self) -> Result<Vec<ListSummary>, ServiceError> {
        let lists = self.store.all_lists().await?;
        Ok(sort_lists(&lists)
            .into_iter()
            .map(|(list, index)| ListSummary {
                id: list.id,
                name: list.name.clone(),
                remaining: remaining_count(list),
                total: total_count(list),
                complete: is_list_complete(list),
                index,
            })
            .collect())
    }

    pub async fn load_list(&self, id: i32) -> Result<List, ServiceError> {
        Ok(self.store.find_list(id).await?)
    }

    pub async fn create_list(&self, raw_name: &str) -> Result<Outcome, ServiceError> {
        let name = raw_name.trim();
        let existing = self.store.all_lists().await?;
        validate_list_name(name, &existing)?;

        let id = self.store.create_list(name).await?;
        info!("Service: created list {} '{}'", id, name);
        Ok(Outcome::redirect(SUCCESS_LIST_CREATED, PATH_LISTS.to_string()))
    }

    /// Rename a list. Keeping the list's current name is not a duplicate.
    pub async fn rename_list(&self, id: i32, raw_name: &str) -> Result<Outcome, ServiceError> {
        let name = raw_name.trim();
        self.load_list(id).await?;

        let others: Vec<List> = self
            .store
            .all_lists()
            .await?
            .into_iter()
            .filter(|list| list.id != id)
            .collect();
        validate_list_name(name, &others)?;

        self.store.rename_list(id, name).await?;
        Ok(Outcome::redirect(SUCCESS_LIST_UPDATED, list_path(id)))
    }

    pub async fn delete_list(&self, id: i32, origin: Origin) -> Result<Outcome, ServiceError> {
        self.load_list(id).await?;
        self.store.delete_list(id).await?;

        let response = match origin {
            Origin::Ajax => Response::NoContent,
            Origin::Page => Response::Redirect(PATH_LISTS.to_string()),
        };
        Ok(Outcome {
            message: SUCCESS_LIST_DELETED,
            response,
        })
    }

    pub async fn create_todo(&self, list_id: i32, raw_name: &str) -> Result<Outcome, ServiceError> {
        let name = raw_name.trim();
        self.load_list(list_id).await?;
        validate_todo_name(name)?;

        self.store.create_todo(list_id, name).await?;
        Ok(Outcome::redirect(SUCCESS_TODO_CREATED, list_path(list_id)))
    }

    pub async fn delete_todo(&self, list_id: i32, todo_id: i32, origin: Origin) -> Result<Outcome, ServiceError> {
        self.require_todo(list_id, todo_id).await?;
        self.store.delete_todo(list_id, todo_id).await?;

        let response = match origin {
            Origin::Ajax => Response::NoContent,
            Origin::Page => Response::Redirect(list_path(list_id)),
        };
        Ok(Outcome {
            message: SUCCESS_TODO_DELETED,
            response,
        })
    }

    pub async fn set_todo_completed(&self, list_id: i32, todo_id: i32, completed: bool) -> Result<Outcome, ServiceError> {
        self.require_todo(list_id, todo_id).await?;
        self.store.set_todo_completed(list_id, todo_id, completed).await?;
        Ok(Outcome::redirect(SUCCESS_TODO_UPDATED, list_path(list_id)))
    }

    pub async fn complete_all_todos(&self, list_id: i32) -> Result<Outcome, ServiceError> {
        self.load_list(list_id).await?;
        self.store.complete_all_todos(list_id).await?;
        Ok(Outcome::redirect(SUCCESS_TODOS_COMPLETED, list_path(list_id)))
    }

    async fn require_todo(&self, list_id: i32, todo_id: i32) -> Result<(), ServiceError> {
        let list = self.load_list(list_id).await?;
        match list.todo(todo_id) {
            Some(_) => Ok(()),
            None => Err(ServiceError::TodoNotFound { list_id, todo_id }),
        }
    }
}
