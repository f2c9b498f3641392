use crate::domain::ids::{ColumnId, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task card, owned by exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    /// Assigned at creation, never edited afterwards
    pub title: String,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the given column
    pub fn new(id: TaskId, column_id: ColumnId, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            column_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the free-text content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Moves the task to another column
    pub fn set_column(&mut self, column_id: ColumnId) {
        self.column_id = column_id;
        self.updated_at = Utc::now();
    }
}
