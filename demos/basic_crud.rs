//! Demo: Basic CRUD Operations
//!
//! Walks one task through insert, read, update and delete against a
//! throwaway database.
//!
//! Run with: cargo run --example basic_crud

use eyre::Result;
use termban::{NewTask, TaskStatus, TaskStore};

fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let db_path = temp_dir.path().join("termban").join("db").join("tasks.db");

    println!("termban Basic CRUD Demo");
    println!("=======================\n");
    println!("Database: {}\n", db_path.display());

    let store = TaskStore::open(&db_path)?;

    // CREATE
    println!("1. CREATE - Adding a task...");
    let id = store.insert_task(&NewTask::new("Buy milk", "2%", TaskStatus::Todo.code()))?;
    println!("   Created task with ID: {}\n", id);

    // READ
    println!("2. READ - Listing tasks...");
    for task in store.get_tasks()? {
        println!("   - [{}] {} ({})", task.id, task.title, task.description);
    }
    println!();

    // UPDATE
    println!("3. UPDATE - Moving the task to in-progress...");
    let changed = store.update_task(&NewTask::new("Buy milk", "2%", TaskStatus::InProgress.code()).with_id(id))?;
    println!("   Rows changed: {}", changed);
    for task in store.get_tasks()? {
        let status = task
            .known_status()
            .map(|s| s.to_string())
            .unwrap_or_else(|| task.status.to_string());
        println!("   - [{}] {} is now {}", task.id, task.title, status);
    }
    println!();

    // DELETE
    println!("4. DELETE - Removing the task...");
    let removed = store.delete_task(id)?;
    println!("   Rows removed: {}", removed);
    println!("   Remaining tasks: {}\n", store.get_tasks()?.len());

    store.close()?;
    println!("Demo complete!");
    Ok(())
}
