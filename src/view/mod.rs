//! Interaction state of the board's components.
//!
//! Each component keeps only its local UI mode. Board state arrives as
//! read-only values and changes leave through [`BoardActions`].
//!
//! [`BoardActions`]: crate::command::BoardActions

pub mod card;
pub mod column;

pub use card::{CardMode, CardPresentation, TaskCard};
pub use column::{ColumnCard, ColumnPresentation, TitleMode};

use crate::drag::{DragData, DragItem};

/// Registration of a draggable and droppable item with the drag sensor
#[derive(Debug, Clone, PartialEq)]
pub struct Sortable {
    pub id: String,
    pub data: DragData,
    /// Disabled items can be neither picked up nor dropped onto
    pub disabled: bool,
}

impl Sortable {
    /// The item as the sensor reports it in lifecycle events
    pub fn drag_item(&self) -> DragItem {
        DragItem {
            id: self.id.clone(),
            data: Some(self.data.clone()),
        }
    }
}

/// Key the user pressed inside an inline editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }
}
