//! Constants used throughout the application
//!
//! Name bounds and the user-facing messages returned to request handlers.

// Name bounds, counted in characters after trimming
pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 100;

// Validation Messages
pub const ERROR_LIST_NAME_LENGTH: &str = "List name must be between 1 and 100 characters.";
pub const ERROR_LIST_NAME_DUPLICATE: &str = "List name must be unique.";
pub const ERROR_TODO_NAME_LENGTH: &str = "Todo must be between 1 and 100 characters.";
pub const ERROR_LIST_NOT_FOUND: &str = "The specified list was not found.";
pub const ERROR_TODO_NOT_FOUND: &str = "The specified todo was not found.";

// Success Messages
pub const SUCCESS_LIST_CREATED: &str = "The list has been created.";
pub const SUCCESS_LIST_UPDATED: &str = "The list has been updated.";
pub const SUCCESS_LIST_DELETED: &str = "The list has been deleted.";
pub const SUCCESS_TODO_CREATED: &str = "The todo was added.";
pub const SUCCESS_TODO_DELETED: &str = "The todo has been deleted.";
pub const SUCCESS_TODO_UPDATED: &str = "The todo has been updated.";
pub const SUCCESS_TODOS_COMPLETED: &str = "All todos have been completed.";

// Paths handed back to the request handler for redirects
pub const PATH_LISTS: &str = "/lists";

// Configuration
pub const CONFIG_FILE_NAME: &str = "todolists.toml";
pub const CONFIG_DIR_NAME: &str = "todolists";
pub const CONFIG_GENERATED: &str = "Generated default configuration";
pub const MAX_CONNECTIONS_LIMIT: u32 = 32;
