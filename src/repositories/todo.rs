//! Todo repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::{execute_logged, fetch_logged};
use crate::entities::todo;

/// Repository for todo-related database operations.
pub struct TodoRepository;

impl TodoRepository {
    /// Get the todos of one list ordered by id.
    pub async fn get_for_list<C>(conn: &C, list_id: i32) -> Result<Vec<todo::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        fetch_logged(
            conn,
            todo::Entity::find()
                .filter(todo::Column::ListId.eq(list_id))
                .order_by_asc(todo::Column::Id),
        )
        .await
    }

    /// Get the todos of several lists at once, ordered by list then id.
    pub async fn get_for_lists<C>(conn: &C, list_ids: &[i32]) -> Result<Vec<todo::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        fetch_logged(
            conn,
            todo::Entity::find()
                .filter(todo::Column::ListId.is_in(list_ids.iter().copied()))
                .order_by_asc(todo::Column::ListId)
                .order_by_asc(todo::Column::Id),
        )
        .await
    }

    /// Insert a todo with an already allocated id. New todos start incomplete.
    pub async fn insert<C>(conn: &C, list_id: i32, id: i32, name: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let row = todo::ActiveModel {
            list_id: ActiveValue::Set(list_id),
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
            completed: ActiveValue::Set(false),
        };
        execute_logged(conn, todo::Entity::insert(row)).await?;
        Ok(())
    }

    /// Delete one todo from a list.
    pub async fn delete<C>(conn: &C, list_id: i32, todo_id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let delete = todo::Entity::delete_many()
            .filter(todo::Column::ListId.eq(list_id))
            .filter(todo::Column::Id.eq(todo_id));
        Ok(execute_logged(conn, delete).await?.rows_affected())
    }

    /// Delete every todo belonging to a list.
    pub async fn delete_for_list<C>(conn: &C, list_id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let delete = todo::Entity::delete_many().filter(todo::Column::ListId.eq(list_id));
        Ok(execute_logged(conn, delete).await?.rows_affected())
    }

    /// Set the completion flag of one todo.
    pub async fn set_completed<C>(conn: &C, list_id: i32, todo_id: i32, completed: bool) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let update = todo::Entity::update_many()
            .col_expr(todo::Column::Completed, Expr::value(completed))
            .filter(todo::Column::ListId.eq(list_id))
            .filter(todo::Column::Id.eq(todo_id));
        Ok(execute_logged(conn, update).await?.rows_affected())
    }

    /// Mark every todo of a list as completed.
    pub async fn complete_all<C>(conn: &C, list_id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let update = todo::Entity::update_many()
            .col_expr(todo::Column::Completed, Expr::value(true))
            .filter(todo::Column::ListId.eq(list_id));
        Ok(execute_logged(conn, update).await?.rows_affected())
    }
}
