//! Repository layer for database operations.
//!
//! Repositories are unit structs whose methods take any SeaORM connection, so
//! the same queries run against a pooled connection or a transaction. Every
//! statement is logged with its bound values before it is sent to the database.

use log::info;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, ExecResult, QueryTrait, Select};

pub mod list;
pub mod todo;

pub use list::ListRepository;
pub use todo::TodoRepository;

/// Log a query's SQL and parameters, then execute it.
pub(crate) async fn execute_logged<C, Q>(conn: &C, query: Q) -> Result<ExecResult, DbErr>
where
    C: ConnectionTrait,
    Q: QueryTrait,
{
    let statement = query.build(conn.get_database_backend());
    info!("{}: {:?}", statement.sql, statement.values);
    conn.execute(statement).await
}

/// Log a select's SQL and parameters, then fetch every matching model.
pub(crate) async fn fetch_logged<C, E>(conn: &C, select: Select<E>) -> Result<Vec<E::Model>, DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let statement = select.build(conn.get_database_backend());
    info!("{}: {:?}", statement.sql, statement.values);
    select.all(conn).await
}
