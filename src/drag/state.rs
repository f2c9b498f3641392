use crate::domain::{Column, Task};
use serde::{Deserialize, Serialize};

/// Drag gesture in progress, if any.
///
/// The recorded entity is the one captured at drag start and drives the
/// floating preview overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn { column: Column },
    DraggingTask { task: Task },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging_task(&self) -> bool {
        matches!(self, Self::DraggingTask { .. })
    }

    /// Id of the item being dragged
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn { column } => Some(column.id.as_str()),
            Self::DraggingTask { task } => Some(task.id.as_str()),
        }
    }

    /// True while the item with this id is the one being dragged
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    pub fn active_column(&self) -> Option<&Column> {
        match self {
            Self::DraggingColumn { column } => Some(column),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match self {
            Self::DraggingTask { task } => Some(task),
            _ => None,
        }
    }
}
