// termban - SQLite persistence for the termban task tracker

pub mod config;
pub mod error;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use error::{InitCause, Result, StoreError};
pub use store::TaskStore;
pub use task::{NewTask, Task, TaskStatus};
