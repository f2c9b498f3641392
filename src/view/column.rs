use crate::{
    command::{BoardActions, BoardCommand},
    domain::{Column, ColumnId},
    drag::{DragData, DragState},
    view::{Key, KeyPress, Sortable},
};

/// Whether the column header shows its title or a title input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleMode {
    #[default]
    Viewing,
    Editing,
}

/// What a column should draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPresentation {
    /// Collapsed outline left at the origin slot while the column is dragged
    Placeholder,
    Full { editing: bool },
}

/// Interaction state of one column
#[derive(Debug, Clone)]
pub struct ColumnCard {
    column_id: ColumnId,
    title_mode: TitleMode,
}

impl ColumnCard {
    pub fn new(column_id: ColumnId) -> Self {
        Self {
            column_id,
            title_mode: TitleMode::default(),
        }
    }

    pub fn column_id(&self) -> &ColumnId {
        &self.column_id
    }

    pub fn title_mode(&self) -> TitleMode {
        self.title_mode
    }

    pub fn is_editing(&self) -> bool {
        self.title_mode == TitleMode::Editing
    }

    pub fn click_header(&mut self) {
        self.title_mode = TitleMode::Editing;
    }

    pub fn blur(&mut self) {
        self.title_mode = TitleMode::Viewing;
    }

    pub fn key_down(&mut self, key: KeyPress) {
        if key.key == Key::Enter {
            self.title_mode = TitleMode::Viewing;
        }
    }

    pub fn edit_title<A: BoardActions + ?Sized>(&self, actions: &mut A, title: String) {
        if self.is_editing() {
            actions.dispatch(BoardCommand::UpdateColumnTitle {
                id: self.column_id.clone(),
                title,
            });
        }
    }

    pub fn click_delete<A: BoardActions + ?Sized>(&self, actions: &mut A) {
        actions.dispatch(BoardCommand::DeleteColumn {
            id: self.column_id.clone(),
        });
    }

    pub fn click_add_task<A: BoardActions + ?Sized>(&self, actions: &mut A) {
        actions.dispatch(BoardCommand::CreateTask {
            column_id: self.column_id.clone(),
        });
    }

    /// Dragging is disabled while the title is being typed
    pub fn sortable(&self, column: &Column) -> Sortable {
        Sortable {
            id: column.id.as_str().to_string(),
            data: DragData::Column {
                column: column.clone(),
            },
            disabled: self.is_editing(),
        }
    }

    pub fn presentation(&self, drag: &DragState) -> ColumnPresentation {
        if drag.is_active(self.column_id.as_str()) {
            ColumnPresentation::Placeholder
        } else {
            ColumnPresentation::Full {
                editing: self.is_editing(),
            }
        }
    }
}
