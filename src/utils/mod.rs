//! Small helpers shared by both persistence backends.

pub mod ids;

pub use ids::next_id;
