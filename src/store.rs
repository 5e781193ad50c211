// SQLite-backed task store

use crate::error::{Result, StoreError};
use crate::task::{NewTask, Task};
use rusqlite::{Connection, Row, params};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        description TEXT,
        status INTEGER
    );
"#;

/// Persistent task store backed by a single SQLite file
///
/// Every operation is a direct round-trip to the database; nothing is cached.
pub struct TaskStore {
    path: PathBuf,
    db: Connection,
}

impl TaskStore {
    /// Open or create the store at the given database file path
    ///
    /// Missing parent directories are created and the `tasks` table is created
    /// if it does not exist yet. Opening an existing store leaves its rows intact.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!(path = %path.display(), "Opening task store");

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::init(&path, "create directory", e))?;
        }

        let db = Connection::open(&path).map_err(|e| StoreError::init(&path, "open database", e))?;

        if let Err(e) = db.execute_batch(SCHEMA) {
            // Release the handle before reporting; the schema error is the one that matters
            if let Err((_, close_err)) = db.close() {
                warn!(path = %path.display(), error = %close_err, "Failed to close database after schema error");
            }
            return Err(StoreError::init(&path, "create schema", e));
        }

        info!(path = %path.display(), "Task store ready");
        Ok(Self { path, db })
    }

    /// Path of the database file backing this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Insert a new task and return the id the store assigned to it
    pub fn insert_task(&self, task: &NewTask) -> Result<i64> {
        const OP: &str = "insert_task";
        debug!(title = %task.title, status = task.status, "New task received");

        let mut stmt = self
            .db
            .prepare("INSERT INTO tasks (title, description, status) VALUES (?1, ?2, ?3)")
            .map_err(StoreError::statement(OP))?;
        let id = stmt
            .insert(params![task.title, task.description, task.status])
            .map_err(StoreError::statement(OP))?;

        debug!(id, title = %task.title, "Task added");
        Ok(id)
    }

    /// Get every task in the store
    ///
    /// Rows come back in the order SQLite iterates them; no sort is applied.
    pub fn get_tasks(&self) -> Result<Vec<Task>> {
        const OP: &str = "get_tasks";
        debug!("Getting tasks");

        let mut stmt = self
            .db
            .prepare("SELECT id, title, description, status FROM tasks")
            .map_err(StoreError::query(OP))?;
        let mut rows = stmt.query([]).map_err(StoreError::query(OP))?;

        let mut tasks = Vec::new();
        while let Some(row) = rows.next().map_err(StoreError::query(OP))? {
            tasks.push(task_from_row(row).map_err(StoreError::scan(OP))?);
        }

        debug!(count = tasks.len(), "Got tasks");
        Ok(tasks)
    }

    /// Replace title, description and status of the task with `task.id`
    ///
    /// Returns the number of rows changed; 0 means no task has that id.
    pub fn update_task(&self, task: &Task) -> Result<usize> {
        const OP: &str = "update_task";

        let mut stmt = self
            .db
            .prepare("UPDATE tasks SET title = ?1, description = ?2, status = ?3 WHERE id = ?4")
            .map_err(StoreError::statement(OP))?;
        let changed = stmt
            .execute(params![task.title, task.description, task.status, task.id])
            .map_err(StoreError::statement(OP))?;

        if changed == 0 {
            debug!(id = task.id, "Update matched no task");
        }
        Ok(changed)
    }

    /// Delete the task with the given id
    ///
    /// Returns the number of rows removed; 0 means no task had that id.
    pub fn delete_task(&self, id: i64) -> Result<usize> {
        const OP: &str = "delete_task";

        let mut stmt = self
            .db
            .prepare("DELETE FROM tasks WHERE id = ?1")
            .map_err(StoreError::statement(OP))?;
        let removed = stmt.execute([id]).map_err(StoreError::statement(OP))?;

        if removed == 0 {
            debug!(id, "Delete matched no task");
        }
        Ok(removed)
    }

    /// Close the underlying database, reporting any error SQLite raises
    ///
    /// A failed close is reported as [`StoreError::Statement`] with `op: "close"`.
    pub fn close(self) -> Result<()> {
        self.db
            .close()
            .map_err(|(_, source)| StoreError::Statement { op: "close", source })
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
    })
}
