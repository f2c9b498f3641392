use crate::{
    domain::{
        column::Column,
        ids::{ColumnId, IdGenerator, TaskId, UuidGenerator},
        reorder::array_move,
        snapshot::BoardSnapshot,
        task::Task,
    },
    drag::{DragData, DragEndEvent, DragItem, DragKind, DragOverEvent, DragStartEvent, DragState},
    error::Result,
};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};
use tracing::{debug, trace};

/// What a task drag-end does once the pointer is released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskDropPolicy {
    /// Tasks are reordered live during drag-over; drag-end only clears the gesture
    #[default]
    KeepLive,
    /// Drag-end repeats the task-over-task move against the final target
    Reapply,
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// New columns are titled `<prefix><n>`
    pub column_title_prefix: String,
    /// New tasks are titled `<prefix><n>`
    pub task_title_prefix: String,
    pub default_task_content: String,
    pub task_drop: TaskDropPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: "Stage #".to_string(),
            task_title_prefix: "Task ".to_string(),
            default_task_content: String::new(),
            task_drop: TaskDropPolicy::default(),
        }
    }
}

impl BoardConfig {
    /// Decodes a configuration; missing fields keep their defaults
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Kanban board state and the controller that mutates it.
///
/// Both sequences sit behind `Arc` and are only ever replaced wholesale, so a
/// snapshot handed to a renderer never changes underneath it. Operations that
/// find nothing to do leave the existing `Arc` in place.
pub struct Board {
    config: BoardConfig,
    columns: Arc<Vec<Column>>,
    tasks: Arc<Vec<Task>>,
    drag: DragState,
    revision: u64,
    ids: Box<dyn IdGenerator>,
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("tasks", &self.tasks)
            .field("drag", &self.drag)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_id_generator(config, UuidGenerator)
    }

    pub fn with_id_generator(config: BoardConfig, ids: impl IdGenerator + 'static) -> Self {
        Self {
            config,
            columns: Arc::new(Vec::new()),
            tasks: Arc::new(Vec::new()),
            drag: DragState::Idle,
            revision: 0,
            ids: Box::new(ids),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Columns in board order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All tasks as one flat sequence
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Tasks of one column in display order
    pub fn tasks_in_column(&self, id: &ColumnId) -> Vec<&Task> {
        self.tasks.iter().filter(|t| &t.column_id == id).collect()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// Bumped on every committed change, including drag state changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Immutable view sharing the current sequences
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            revision: self.revision,
            columns: Arc::clone(&self.columns),
            tasks: Arc::clone(&self.tasks),
            drag: self.drag.clone(),
        }
    }

    /// Appends a column titled after the current column count
    pub fn add_column(&mut self) -> ColumnId {
        let id = ColumnId::new(self.ids.next_id());
        let title = format!("{}{}", self.config.column_title_prefix, self.columns.len() + 1);

        let mut columns = self.columns.to_vec();
        columns.push(Column::new(id.clone(), title));
        self.commit_columns(columns);

        debug!(column_id = %id, count = self.columns.len(), "Added column");
        id
    }

    /// Removes a column together with every task it holds
    pub fn delete_column(&mut self, id: &ColumnId) {
        if self.column(id).is_none() {
            trace!(column_id = %id, "Delete skipped, column not found");
            return;
        }

        let columns = self.columns.iter().filter(|c| &c.id != id).cloned().collect();
        self.commit_columns(columns);

        let before = self.tasks.len();
        if self.tasks.iter().any(|t| &t.column_id == id) {
            let tasks = self.tasks.iter().filter(|t| &t.column_id != id).cloned().collect();
            self.commit_tasks(tasks);
        }

        debug!(
            column_id = %id,
            removed_tasks = before - self.tasks.len(),
            "Deleted column"
        );
    }

    /// Appends a task to the given column.
    ///
    /// Returns `None` without touching the board when the column does not exist.
    pub fn create_task(&mut self, column_id: &ColumnId) -> Option<TaskId> {
        if self.column(column_id).is_none() {
            trace!(column_id = %column_id, "Create task skipped, column not found");
            return None;
        }

        let id = TaskId::new(self.ids.next_id());
        let title = format!("{}{}", self.config.task_title_prefix, self.tasks.len() + 1);
        let task = Task::new(
            id.clone(),
            column_id.clone(),
            title,
            self.config.default_task_content.clone(),
        );

        let mut tasks = self.tasks.to_vec();
        tasks.push(task);
        self.commit_tasks(tasks);

        debug!(task_id = %id, column_id = %column_id, "Created task");
        Some(id)
    }

    pub fn delete_task(&mut self, id: &TaskId) {
        if self.task(id).is_none() {
            trace!(task_id = %id, "Delete skipped, task not found");
            return;
        }

        let tasks = self.tasks.iter().filter(|t| &t.id != id).cloned().collect();
        self.commit_tasks(tasks);
        debug!(task_id = %id, "Deleted task");
    }

    pub fn update_column_title(&mut self, id: &ColumnId, title: String) {
        let Some(index) = self.columns.iter().position(|c| &c.id == id) else {
            trace!(column_id = %id, "Title update skipped, column not found");
            return;
        };

        let mut columns = self.columns.to_vec();
        columns[index].set_title(title);
        self.commit_columns(columns);
        debug!(column_id = %id, "Updated column title");
    }

    pub fn update_task_content(&mut self, id: &TaskId, content: String) {
        let Some(index) = self.task_index(id.as_str()) else {
            trace!(task_id = %id, "Content update skipped, task not found");
            return;
        };

        let mut tasks = self.tasks.to_vec();
        tasks[index].set_content(content);
        self.commit_tasks(tasks);
        debug!(task_id = %id, "Updated task content");
    }

    /// Records the dragged entity for the preview overlay
    pub fn on_drag_start(&mut self, event: &DragStartEvent) {
        let next = match &event.active.data {
            Some(DragData::Column { column }) => DragState::DraggingColumn {
                column: column.clone(),
            },
            Some(DragData::Task { task }) => DragState::DraggingTask { task: task.clone() },
            None => {
                trace!(active = %event.active.id, "Drag start without payload ignored");
                return;
            }
        };

        debug!(active = %event.active.id, "Drag started");
        self.set_drag(next);
    }

    /// Reorders tasks live while a task is dragged across targets
    pub fn on_drag_over(&mut self, event: &DragOverEvent) {
        if !self.drag.is_dragging_task() || !event.active.is_task() {
            return;
        }
        let Some(over) = event.distinct_target() else {
            return;
        };

        self.move_task_onto(&event.active, over);
    }

    /// Finishes the gesture; columns are reordered here, never during drag-over
    pub fn on_drag_end(&mut self, event: &DragEndEvent) {
        self.set_drag(DragState::Idle);

        let Some(over) = event.distinct_target() else {
            return;
        };

        match event.active.kind() {
            Some(DragKind::Column) => self.move_column_onto(&event.active.id, &over.id),
            Some(DragKind::Task) if self.config.task_drop == TaskDropPolicy::Reapply => {
                self.move_task_onto(&event.active, over)
            }
            _ => {}
        }
    }

    /// Abandons the gesture without reordering anything
    pub fn on_drag_cancel(&mut self) {
        if !self.drag.is_idle() {
            debug!("Drag cancelled");
        }
        self.set_drag(DragState::Idle);
    }

    fn move_task_onto(&mut self, active: &DragItem, over: &DragItem) {
        match over.kind() {
            Some(DragKind::Task) => self.move_task_over_task(&active.id, &over.id),
            Some(DragKind::Column) => self.move_task_into_column(&active.id, &over.id),
            None => {}
        }
    }

    fn move_task_over_task(&mut self, active_id: &str, over_id: &str) {
        let (Some(active_index), Some(over_index)) =
            (self.task_index(active_id), self.task_index(over_id))
        else {
            trace!(active = active_id, over = over_id, "Task move skipped, task not found");
            return;
        };

        let target_column = self.tasks[over_index].column_id.clone();
        let mut tasks = array_move(&self.tasks, active_index, over_index);
        if tasks[over_index].column_id != target_column {
            tasks[over_index].set_column(target_column);
        }
        self.commit_tasks(tasks);

        debug!(
            task_id = active_id,
            from = active_index,
            to = over_index,
            "Moved task over task"
        );
    }

    fn move_task_into_column(&mut self, active_id: &str, column_id: &str) {
        let Some(index) = self.task_index(active_id) else {
            trace!(active = active_id, "Task move skipped, task not found");
            return;
        };
        let Some(column) = self.columns.iter().find(|c| c.id.as_str() == column_id) else {
            trace!(column_id, "Task move skipped, column not found");
            return;
        };
        if self.tasks[index].column_id == column.id {
            return;
        }

        let column_id = column.id.clone();
        let mut tasks = self.tasks.to_vec();
        tasks[index].set_column(column_id.clone());
        self.commit_tasks(tasks);

        debug!(task_id = active_id, column_id = %column_id, "Moved task into column");
    }

    fn move_column_onto(&mut self, active_id: &str, over_id: &str) {
        let (Some(active_index), Some(over_index)) =
            (self.column_index(active_id), self.column_index(over_id))
        else {
            trace!(active = active_id, over = over_id, "Column move skipped, column not found");
            return;
        };

        let columns = array_move(&self.columns, active_index, over_index);
        self.commit_columns(columns);

        debug!(
            column_id = active_id,
            from = active_index,
            to = over_index,
            "Moved column"
        );
    }

    fn task_index(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id.as_str() == id)
    }

    fn column_index(&self, id: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.id.as_str() == id)
    }

    fn commit_columns(&mut self, columns: Vec<Column>) {
        self.columns = Arc::new(columns);
        self.revision += 1;
    }

    fn commit_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = Arc::new(tasks);
        self.revision += 1;
    }

    fn set_drag(&mut self, drag: DragState) {
        if self.drag != drag {
            self.drag = drag;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SequentialIdGenerator;

    fn board() -> Board {
        Board::with_id_generator(BoardConfig::default(), SequentialIdGenerator::new("id"))
    }

    fn board_with(config: BoardConfig) -> Board {
        Board::with_id_generator(config, SequentialIdGenerator::new("id"))
    }

    fn column_ids(board: &Board) -> Vec<&str> {
        board.columns().iter().map(|c| c.id.as_str()).collect()
    }

    fn task_ids(board: &Board) -> Vec<&str> {
        board.tasks().iter().map(|t| t.id.as_str()).collect()
    }

    fn drag_task(board: &mut Board, id: &TaskId) -> DragItem {
        let item = DragItem::task(board.task(id).unwrap());
        board.on_drag_start(&DragStartEvent::new(item.clone()));
        item
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert!(board.columns().is_empty());
        assert!(board.tasks().is_empty());
        assert!(board.drag_state().is_idle());
        assert_eq!(board.revision(), 0);
    }

    #[test]
    fn test_add_column_appends_unique_ids() {
        let mut board = Board::default();

        for expected_len in 1..=5 {
            let existing: Vec<ColumnId> = board.columns().iter().map(|c| c.id.clone()).collect();
            let id = board.add_column();
            assert!(!existing.contains(&id));
            assert_eq!(board.columns().len(), expected_len);
            assert_eq!(board.columns().last().unwrap().id, id);
        }
    }

    #[test]
    fn test_column_titles_are_not_renumbered() {
        let mut board = board();
        let s1 = board.add_column();
        board.add_column();
        board.delete_column(&s1);
        board.add_column();

        let titles: Vec<&str> = board.columns().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Stage #2", "Stage #2"]);
    }

    #[test]
    fn test_delete_column_is_idempotent() {
        let mut board = board();
        let s1 = board.add_column();
        board.add_column();

        board.delete_column(&s1);
        let after_first = board.snapshot();

        board.delete_column(&s1);
        let after_second = board.snapshot();

        assert!(after_first.same_sequences(&after_second));
        assert_eq!(board.columns().len(), 1);
    }

    #[test]
    fn test_delete_column_cascades_to_tasks() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();
        board.create_task(&s1);
        let kept = board.create_task(&s2).unwrap();
        board.create_task(&s1);

        board.delete_column(&s1);

        assert!(board.tasks().iter().all(|t| t.column_id != s1));
        assert_eq!(task_ids(&board), vec![kept.as_str()]);
    }

    #[test]
    fn test_create_then_delete_column_scenario() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();

        board.create_task(&s1);
        board.create_task(&s1);

        let titles: Vec<&str> = board.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Task 1", "Task 2"]);
        assert!(board.tasks().iter().all(|t| t.column_id == s1));

        board.delete_column(&s1);
        assert_eq!(column_ids(&board), vec![s2.as_str()]);
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_create_task_in_missing_column_is_noop() {
        let mut board = board();
        board.add_column();
        let before = board.snapshot();

        assert!(board.create_task(&ColumnId::new("nope")).is_none());
        assert!(before.same_sequences(&board.snapshot()));
    }

    #[test]
    fn test_create_task_uses_configured_content() {
        let mut board = board_with(BoardConfig {
            default_task_content: "Please describe task...".to_string(),
            ..BoardConfig::default()
        });
        let s1 = board.add_column();
        let id = board.create_task(&s1).unwrap();
        assert_eq!(board.task(&id).unwrap().content, "Please describe task...");
    }

    #[test]
    fn test_delete_task() {
        let mut board = board();
        let s1 = board.add_column();
        let t1 = board.create_task(&s1).unwrap();
        let t2 = board.create_task(&s1).unwrap();

        board.delete_task(&t1);
        assert_eq!(task_ids(&board), vec![t2.as_str()]);

        let before = board.snapshot();
        board.delete_task(&t1);
        assert!(before.same_sequences(&board.snapshot()));
    }

    #[test]
    fn test_update_column_title() {
        let mut board = board();
        let s1 = board.add_column();

        board.update_column_title(&s1, "Backlog".to_string());
        assert_eq!(board.column(&s1).unwrap().title, "Backlog");

        let before = board.snapshot();
        board.update_column_title(&ColumnId::new("missing"), "x".to_string());
        assert!(before.same_sequences(&board.snapshot()));
    }

    #[test]
    fn test_update_task_content_last_write_wins() {
        let mut board = board();
        let s1 = board.add_column();
        let t1 = board.create_task(&s1).unwrap();

        board.update_task_content(&t1, "x".to_string());
        board.update_task_content(&t1, "y".to_string());
        assert_eq!(board.task(&t1).unwrap().content, "y");
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_mutations() {
        let mut board = board();
        let s1 = board.add_column();
        let snapshot = board.snapshot();

        board.update_column_title(&s1, "Renamed".to_string());

        assert_eq!(snapshot.columns[0].title, "Stage #1");
        assert_eq!(board.column(&s1).unwrap().title, "Renamed");
    }

    #[test]
    fn test_drag_start_records_active_entity() {
        let mut board = board();
        let s1 = board.add_column();
        let t1 = board.create_task(&s1).unwrap();

        let column = DragItem::column(board.column(&s1).unwrap());
        board.on_drag_start(&DragStartEvent::new(column));
        assert_eq!(board.drag_state().active_column().unwrap().id, s1);

        board.on_drag_cancel();
        assert!(board.drag_state().is_idle());

        drag_task(&mut board, &t1);
        assert_eq!(board.drag_state().active_task().unwrap().id, t1);
    }

    #[test]
    fn test_drag_start_without_payload_keeps_idle() {
        let mut board = board();
        board.on_drag_start(&DragStartEvent::new(DragItem::bare("x")));
        assert!(board.drag_state().is_idle());
        assert_eq!(board.revision(), 0);
    }

    #[test]
    fn test_drag_task_over_task_across_columns() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        let x = board.create_task(&s2).unwrap();
        let b = board.create_task(&s2).unwrap();

        let active = drag_task(&mut board, &a);
        let over = DragItem::task(board.task(&b).unwrap());
        board.on_drag_over(&DragOverEvent::new(active, Some(over)));

        assert_eq!(task_ids(&board), vec![x.as_str(), b.as_str(), a.as_str()]);
        assert_eq!(board.task(&a).unwrap().column_id, s2);
    }

    #[test]
    fn test_drag_task_over_task_within_column() {
        let mut board = board();
        let s1 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        let b = board.create_task(&s1).unwrap();
        let c = board.create_task(&s1).unwrap();

        let active = drag_task(&mut board, &c);
        let over = DragItem::task(board.task(&a).unwrap());
        board.on_drag_over(&DragOverEvent::new(active, Some(over)));

        assert_eq!(task_ids(&board), vec![c.as_str(), a.as_str(), b.as_str()]);
        assert!(board.tasks().iter().all(|t| t.column_id == s1));
    }

    #[test]
    fn test_drag_over_self_is_noop() {
        let mut board = board();
        let s1 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        board.create_task(&s1);

        let active = drag_task(&mut board, &a);
        let before = board.snapshot();
        board.on_drag_over(&DragOverEvent::new(active.clone(), Some(active)));

        assert!(before.same_sequences(&board.snapshot()));
        assert_eq!(before.revision, board.revision());
    }

    #[test]
    fn test_drag_over_without_target_is_noop() {
        let mut board = board();
        let s1 = board.add_column();
        let a = board.create_task(&s1).unwrap();

        let active = drag_task(&mut board, &a);
        let before = board.snapshot();
        board.on_drag_over(&DragOverEvent::new(active, None));

        assert!(before.same_sequences(&board.snapshot()));
    }

    #[test]
    fn test_drag_task_over_column_keeps_flat_index() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        let b = board.create_task(&s1).unwrap();

        let active = drag_task(&mut board, &a);
        let over = DragItem::column(board.column(&s2).unwrap());
        board.on_drag_over(&DragOverEvent::new(active.clone(), Some(over.clone())));

        assert_eq!(task_ids(&board), vec![a.as_str(), b.as_str()]);
        assert_eq!(board.task(&a).unwrap().column_id, s2);

        // Already in that column
        let before = board.snapshot();
        board.on_drag_over(&DragOverEvent::new(active, Some(over)));
        assert!(before.same_sequences(&board.snapshot()));
    }

    #[test]
    fn test_drag_over_ignored_for_column_drags() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();

        let active = DragItem::column(board.column(&s1).unwrap());
        board.on_drag_start(&DragStartEvent::new(active.clone()));
        let before = board.snapshot();

        let over = DragItem::column(board.column(&s2).unwrap());
        board.on_drag_over(&DragOverEvent::new(active, Some(over)));

        assert!(before.same_sequences(&board.snapshot()));
        assert_eq!(column_ids(&board), vec![s1.as_str(), s2.as_str()]);
    }

    #[test]
    fn test_drag_over_requires_task_drag_in_progress() {
        let mut board = board();
        let s1 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        let b = board.create_task(&s1).unwrap();

        let active = DragItem::task(board.task(&b).unwrap());
        let over = DragItem::task(board.task(&a).unwrap());
        board.on_drag_over(&DragOverEvent::new(active, Some(over)));

        assert_eq!(task_ids(&board), vec![a.as_str(), b.as_str()]);
    }

    #[test]
    fn test_drag_end_reorders_columns() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();

        let active = DragItem::column(board.column(&s1).unwrap());
        let over = DragItem::column(board.column(&s2).unwrap());
        board.on_drag_start(&DragStartEvent::new(active.clone()));
        board.on_drag_end(&DragEndEvent::new(active, Some(over)));

        assert_eq!(column_ids(&board), vec![s2.as_str(), s1.as_str()]);
        assert!(board.drag_state().is_idle());
    }

    #[test]
    fn test_drag_end_moves_column_single_pass() {
        let mut board = board();
        let s1 = board.add_column();
        let s2 = board.add_column();
        let s3 = board.add_column();
        let s4 = board.add_column();

        let active = DragItem::column(board.column(&s4).unwrap());
        let over = DragItem::column(board.column(&s2).unwrap());
        board.on_drag_end(&DragEndEvent::new(active, Some(over)));

        assert_eq!(
            column_ids(&board),
            vec![s1.as_str(), s4.as_str(), s2.as_str(), s3.as_str()]
        );
    }

    #[test]
    fn test_drag_end_without_target_returns_to_idle() {
        let mut board = board();
        let s1 = board.add_column();
        board.add_column();

        let active = DragItem::column(board.column(&s1).unwrap());
        board.on_drag_start(&DragStartEvent::new(active.clone()));
        let before = board.snapshot();

        board.on_drag_end(&DragEndEvent::new(active.clone(), None));
        assert!(board.drag_state().is_idle());
        assert!(before.same_sequences(&board.snapshot()));

        board.on_drag_start(&DragStartEvent::new(active.clone()));
        board.on_drag_end(&DragEndEvent::new(active.clone(), Some(active)));
        assert!(board.drag_state().is_idle());
        assert!(before.same_sequences(&board.snapshot()));
    }

    #[test]
    fn test_task_drag_end_keeps_live_order_by_default() {
        let mut board = board();
        let s1 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        let b = board.create_task(&s1).unwrap();

        let active = drag_task(&mut board, &a);
        let over = DragItem::task(board.task(&b).unwrap());
        board.on_drag_over(&DragOverEvent::new(active.clone(), Some(over.clone())));
        assert_eq!(task_ids(&board), vec![b.as_str(), a.as_str()]);

        let before = board.snapshot();
        board.on_drag_end(&DragEndEvent::new(active, Some(over)));

        assert!(before.same_sequences(&board.snapshot()));
        assert!(board.drag_state().is_idle());
    }

    #[test]
    fn test_task_drag_end_reapply_policy_moves_task() {
        let mut board = board_with(BoardConfig {
            task_drop: TaskDropPolicy::Reapply,
            ..BoardConfig::default()
        });
        let s1 = board.add_column();
        let s2 = board.add_column();
        let a = board.create_task(&s1).unwrap();
        let b = board.create_task(&s2).unwrap();

        let active = drag_task(&mut board, &a);
        let over = DragItem::task(board.task(&b).unwrap());
        board.on_drag_end(&DragEndEvent::new(active, Some(over)));

        assert_eq!(task_ids(&board), vec![b.as_str(), a.as_str()]);
        assert_eq!(board.task(&a).unwrap().column_id, s2);
    }

    #[test]
    fn test_config_from_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "taskDrop": "reapply" }"#).unwrap();
        assert_eq!(config.task_drop, TaskDropPolicy::Reapply);
        assert_eq!(config.column_title_prefix, "Stage #");

        assert!(BoardConfig::from_json("{ not json").is_err());
    }
}
