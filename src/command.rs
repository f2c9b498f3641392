//! Commands accepted by the board and the callback contract components use
//! to issue them.

use crate::{
    domain::{Board, ColumnId, TaskId},
    drag::{DragEndEvent, DragOverEvent, DragStartEvent},
    error::Result,
};
use serde::{Deserialize, Serialize};

/// A single state change request, as sent by UI components or the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BoardCommand {
    AddColumn,
    DeleteColumn {
        id: ColumnId,
    },
    CreateTask {
        #[serde(rename = "columnId")]
        column_id: ColumnId,
    },
    DeleteTask {
        id: TaskId,
    },
    UpdateColumnTitle {
        id: ColumnId,
        title: String,
    },
    UpdateTaskContent {
        id: TaskId,
        content: String,
    },
    DragStart(DragStartEvent),
    DragOver(DragOverEvent),
    DragEnd(DragEndEvent),
    DragCancel,
}

impl BoardCommand {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Callback handle passed down to column and card components.
///
/// Components never touch board state; they describe what should happen and
/// the owner of the board decides when to apply it.
pub trait BoardActions {
    fn dispatch(&mut self, command: BoardCommand);
}

impl BoardActions for Board {
    fn dispatch(&mut self, command: BoardCommand) {
        self.apply(command);
    }
}

/// Collects commands for later application
impl BoardActions for Vec<BoardCommand> {
    fn dispatch(&mut self, command: BoardCommand) {
        self.push(command);
    }
}

impl Board {
    /// Applies one command to completion
    pub fn apply(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::AddColumn => {
                self.add_column();
            }
            BoardCommand::DeleteColumn { id } => self.delete_column(&id),
            BoardCommand::CreateTask { column_id } => {
                self.create_task(&column_id);
            }
            BoardCommand::DeleteTask { id } => self.delete_task(&id),
            BoardCommand::UpdateColumnTitle { id, title } => self.update_column_title(&id, title),
            BoardCommand::UpdateTaskContent { id, content } => {
                self.update_task_content(&id, content)
            }
            BoardCommand::DragStart(event) => self.on_drag_start(&event),
            BoardCommand::DragOver(event) => self.on_drag_over(&event),
            BoardCommand::DragEnd(event) => self.on_drag_end(&event),
            BoardCommand::DragCancel => self.on_drag_cancel(),
        }
    }
}
