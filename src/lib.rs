//! # Stageboard Core
//!
//! In-memory state and drag-and-drop reordering logic for a kanban stage
//! board.
//!
//! The [`Board`] owns an ordered list of columns and a flat, ordered list of
//! tasks. Columns and tasks are created, edited and deleted through plain
//! method calls or [`BoardCommand`]s, and reordered by feeding it the drag
//! lifecycle events of a pointer/drag sensor. Rendering is left to the
//! embedding front end, which reads [`BoardSnapshot`]s.

pub mod command;
pub mod domain;
pub mod drag;
pub mod error;
#[cfg(feature = "runtime")]
pub mod runtime;
pub mod view;

// Re-export commonly used types
pub use command::{BoardActions, BoardCommand};
pub use domain::{
    board::{Board, BoardConfig, TaskDropPolicy},
    column::Column,
    ids::{ColumnId, TaskId},
    snapshot::{BoardSnapshot, ColumnView},
    task::Task,
};
pub use drag::{DragEndEvent, DragItem, DragOverEvent, DragStartEvent, DragState};
pub use error::{BoardError, Result};
#[cfg(feature = "runtime")]
pub use runtime::{spawn_board, BoardHandle};
