use crate::{
    domain::{column::Column, ids::ColumnId, task::Task},
    drag::DragState,
};
use serde::Serialize;
use std::sync::Arc;

/// Read-only picture of the board handed to renderers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub revision: u64,
    pub columns: Arc<Vec<Column>>,
    pub tasks: Arc<Vec<Task>>,
    pub drag: DragState,
}

impl BoardSnapshot {
    /// True when both snapshots share the very same column and task sequences
    pub fn same_sequences(&self, other: &BoardSnapshot) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns) && Arc::ptr_eq(&self.tasks, &other.tasks)
    }

    pub fn tasks_in_column(&self, id: &ColumnId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| &t.column_id == id).collect()
    }

    /// One view per column, in board order, each with its own tasks
    pub fn column_views(&self) -> Vec<ColumnView<'_>> {
        self.columns
            .iter()
            .map(|column| ColumnView {
                column,
                tasks: self.tasks_in_column(&column.id),
            })
            .collect()
    }
}

/// A column together with the tasks it displays
#[derive(Debug, Clone)]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub tasks: Vec<&'a Task>,
}

impl ColumnView<'_> {
    /// Value of the count badge in the column header
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Task ids in display order, as registered with the nested sortable group
    pub fn task_ids(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.id.as_str()).collect()
    }
}
