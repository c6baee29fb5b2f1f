//! List repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use super::{execute_logged, fetch_logged};
use crate::entities::list;

/// Repository for list-related database operations.
pub struct ListRepository;

impl ListRepository {
    /// Get all lists ordered by id, which is also their creation order.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<list::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        fetch_logged(conn, list::Entity::find().order_by_asc(list::Column::Id)).await
    }

    /// Get a single list by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<list::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let found = fetch_logged(conn, list::Entity::find().filter(list::Column::Id.eq(id))).await?;
        Ok(found.into_iter().next())
    }

    /// Insert a list row with an already allocated id.
    pub async fn insert<C>(conn: &C, id: i32, name: &str) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let row = list::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
        };
        execute_logged(conn, list::Entity::insert(row)).await?;
        Ok(())
    }

    /// Rename a list. Returns the number of rows touched.
    pub async fn rename<C>(conn: &C, id: i32, name: &str) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let update = list::Entity::update_many()
            .col_expr(list::Column::Name, Expr::value(name.to_string()))
            .filter(list::Column::Id.eq(id));
        Ok(execute_logged(conn, update).await?.rows_affected())
    }

    /// Delete the list row only. Its todos must already be gone.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let delete = list::Entity::delete_many().filter(list::Column::Id.eq(id));
        Ok(execute_logged(conn, delete).await?.rows_affected())
    }
}
