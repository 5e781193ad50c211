// Error types for the task store

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`TaskStore`](crate::TaskStore) operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Directory, file or schema setup failed; the store is unusable
    #[error("could not initialize task store at {} ({stage})", .path.display())]
    Initialization {
        path: PathBuf,
        stage: &'static str,
        #[source]
        source: InitCause,
    },

    /// A write statement could not be prepared or executed, so nothing was applied,
    /// or closing the database failed (`op` is `"close"`)
    #[error("{op}: could not execute statement")]
    Statement {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A read query could not be run
    #[error("{op}: query failed")]
    Query {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    /// A row could not be decoded into a task
    #[error("{op}: could not decode row")]
    Scan {
        op: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

/// Underlying cause of an initialization failure
#[derive(Error, Debug)]
pub enum InitCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl StoreError {
    pub(crate) fn init(path: impl Into<PathBuf>, stage: &'static str, source: impl Into<InitCause>) -> Self {
        StoreError::Initialization {
            path: path.into(),
            stage,
            source: source.into(),
        }
    }

    pub(crate) fn statement(op: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StoreError::Statement { op, source }
    }

    pub(crate) fn query(op: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StoreError::Query { op, source }
    }

    pub(crate) fn scan(op: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StoreError::Scan { op, source }
    }
}

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_initialization_display_names_path_and_stage() {
        let err = StoreError::init(
            "/tmp/tasks.db",
            "create directory",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/tasks.db"));
        assert!(msg.contains("create directory"));
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }

    #[test]
    fn test_statement_error_keeps_cause() {
        let err = StoreError::statement("insert_task")(rusqlite::Error::InvalidQuery);
        assert_eq!(err.to_string(), "insert_task: could not execute statement");
        assert!(err.source().is_some());
        assert!(matches!(err, StoreError::Statement { op: "insert_task", .. }));
    }
}
