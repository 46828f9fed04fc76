//! Task model and in-memory store.
//!
//! The store is an explicit value owned by a [`crate::session::Session`];
//! there are no process-wide singletons.

mod models;
mod store;

pub use models::Task;
pub use store::TaskStore;
