use crate::{
    command::{BoardActions, BoardCommand},
    domain::{Task, TaskId},
    drag::{DragData, DragState},
    view::{Key, KeyPress, Sortable},
};

/// Local mode of a task card; hover only exists outside the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMode {
    Viewing { hovered: bool },
    Editing,
}

impl Default for CardMode {
    fn default() -> Self {
        Self::Viewing { hovered: false }
    }
}

/// What a card should draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPresentation {
    /// Faded outline left at the origin slot while the card is dragged
    Placeholder,
    Editor,
    Display { show_delete: bool },
}

/// Interaction state of one task card
#[derive(Debug, Clone)]
pub struct TaskCard {
    task_id: TaskId,
    mode: CardMode,
}

impl TaskCard {
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            mode: CardMode::default(),
        }
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == CardMode::Editing
    }

    pub fn is_hovered(&self) -> bool {
        self.mode == CardMode::Viewing { hovered: true }
    }

    pub fn pointer_enter(&mut self) {
        if let CardMode::Viewing { hovered } = &mut self.mode {
            *hovered = true;
        }
    }

    pub fn pointer_leave(&mut self) {
        if let CardMode::Viewing { hovered } = &mut self.mode {
            *hovered = false;
        }
    }

    /// Switches between display and editor; always clears hover
    pub fn toggle_edit_mode(&mut self) {
        self.mode = match self.mode {
            CardMode::Viewing { .. } => CardMode::Editing,
            CardMode::Editing => CardMode::Viewing { hovered: false },
        };
    }

    /// Clicking the card body opens the editor
    pub fn click_body(&mut self) {
        if !self.is_editing() {
            self.toggle_edit_mode();
        }
    }

    pub fn blur(&mut self) {
        if self.is_editing() {
            self.toggle_edit_mode();
        }
    }

    /// Shift+Enter closes the editor; plain Enter is a newline
    pub fn key_down(&mut self, key: KeyPress) {
        if self.is_editing() && key.key == Key::Enter && key.shift {
            self.toggle_edit_mode();
        }
    }

    pub fn edit_content<A: BoardActions + ?Sized>(&self, actions: &mut A, content: String) {
        if self.is_editing() {
            actions.dispatch(BoardCommand::UpdateTaskContent {
                id: self.task_id.clone(),
                content,
            });
        }
    }

    /// The delete button is only shown while hovered.
    ///
    /// Handling it here never reaches `click_body`, so the card stays out of
    /// the editor.
    pub fn click_delete<A: BoardActions + ?Sized>(&self, actions: &mut A) {
        if self.is_hovered() {
            actions.dispatch(BoardCommand::DeleteTask {
                id: self.task_id.clone(),
            });
        }
    }

    pub fn sortable(&self, task: &Task) -> Sortable {
        Sortable {
            id: task.id.as_str().to_string(),
            data: DragData::Task { task: task.clone() },
            disabled: self.is_editing(),
        }
    }

    pub fn presentation(&self, drag: &DragState) -> CardPresentation {
        if drag.is_active(self.task_id.as_str()) {
            return CardPresentation::Placeholder;
        }
        match self.mode {
            CardMode::Editing => CardPresentation::Editor,
            CardMode::Viewing { hovered } => CardPresentation::Display {
                show_delete: hovered,
            },
        }
    }
}
