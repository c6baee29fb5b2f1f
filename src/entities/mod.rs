//! SeaORM entity models for the `lists` and `todo` tables.

pub mod list;
pub mod todo;
