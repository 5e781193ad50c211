// Task data model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A persisted task row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, stable for the lifetime of the row
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Opaque status code; see [`TaskStatus`] for the conventional values
    pub status: i64,
}

/// A task that has not been inserted yet and therefore has no id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: i64,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>, status: i64) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
        }
    }

    /// Attach a store-assigned id
    pub fn with_id(self, id: i64) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
        }
    }
}

impl Task {
    /// The status as a known [`TaskStatus`], if the code is one
    pub fn known_status(&self) -> Option<TaskStatus> {
        TaskStatus::from_code(self.status)
    }
}

/// Conventional status codes used by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn code(self) -> i64 {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(TaskStatus::Todo),
            1 => Some(TaskStatus::InProgress),
            2 => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in-progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" | "in_progress" | "doing" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!("unknown status: {} (expected todo, in-progress or done)", other)),
        }
    }
}
