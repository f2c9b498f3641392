use crate::domain::ids::ColumnId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stage on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Column {
    /// Creates a new column with the given ID and title
    pub fn new(id: ColumnId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_title_updates_updated_at() {
        let mut column = Column::new(ColumnId::new("c1"), "Stage #1".to_string());
        let initial_updated_at = column.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        column.set_title("Backlog".to_string());

        assert_eq!(column.title, "Backlog");
        assert!(column.updated_at > initial_updated_at);
        assert_eq!(column.created_at, initial_updated_at);
    }

    #[test]
    fn test_deserialize_payload_without_timestamps() {
        let column: Column = serde_json::from_str(r#"{"id": "c1", "title": "Todo"}"#).unwrap();
        assert_eq!(column.id.as_str(), "c1");
        assert_eq!(column.title, "Todo");
    }
}
