//! todolists - named to-do lists with pluggable persistence
//!
//! This library provides the storage and validation core of a to-do list
//! manager: users create named lists, add, complete and remove todos, and see
//! how much of each list is done. Lists live either in a per-session store or
//! in a relational database, behind one gateway trait.
//!
//! # Modules
//!
//! * [`persistence`] - Gateway trait and its session and database backends
//! * [`validation`] - List and todo name rules
//! * [`aggregation`] - Completion counts and completion ordering
//! * [`service`] - Request-facing operations returning flash messages
//! * [`config`] - Application configuration management
//! * [`logger`] - Log routing to stderr and the log file

/// Completion state and ordering helpers
pub mod aggregation;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and user-facing messages
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging setup
pub mod logger;

/// Plain list and todo data structures
pub mod models;

/// Persistence gateway and its backends
pub mod persistence;

/// Repository layer for database operations
pub mod repositories;

/// Request-scoped application service
pub mod service;

/// Identifier allocation
pub mod utils;

/// List and todo name validation
pub mod validation;

pub use models::{List, Todo};
pub use persistence::{Persistence, PersistenceError};
