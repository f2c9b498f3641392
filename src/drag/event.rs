//! Drag lifecycle events as delivered by the pointer/drag sensor.
//!
//! The JSON shape mirrors the sortable drag library the front end uses:
//! every item carries its `id` and a `data.current` payload tagged by `type`.

use crate::domain::{Column, Task};
use serde::{Deserialize, Serialize};

/// Payload a sortable item declares when it registers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DragData {
    Column { column: Column },
    Task { task: Task },
}

/// Coarse type of a drag item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Column,
    Task,
}

impl DragData {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column { .. } => DragKind::Column,
            Self::Task { .. } => DragKind::Task,
        }
    }
}

/// The dragged item (`active`) or the item under the pointer (`over`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragItem {
    pub id: String,
    #[serde(default, with = "data_ref")]
    pub data: Option<DragData>,
}

impl DragItem {
    /// An item with no declared payload
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    pub fn column(column: &Column) -> Self {
        Self {
            id: column.id.as_str().to_string(),
            data: Some(DragData::Column {
                column: column.clone(),
            }),
        }
    }

    pub fn task(task: &Task) -> Self {
        Self {
            id: task.id.as_str().to_string(),
            data: Some(DragData::Task { task: task.clone() }),
        }
    }

    pub fn kind(&self) -> Option<DragKind> {
        self.data.as_ref().map(DragData::kind)
    }

    pub fn is_task(&self) -> bool {
        self.kind() == Some(DragKind::Task)
    }

    pub fn is_column(&self) -> bool {
        self.kind() == Some(DragKind::Column)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragStartEvent {
    pub active: DragItem,
}

impl DragStartEvent {
    pub fn new(active: DragItem) -> Self {
        Self { active }
    }
}

/// Fired repeatedly while the pointer moves over drop targets.
///
/// `over` is absent when the pointer has left every drop target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragOverEvent {
    pub active: DragItem,
    #[serde(default)]
    pub over: Option<DragItem>,
}

/// Fired once on pointer release; same shape as [`DragOverEvent`]
pub type DragEndEvent = DragOverEvent;

impl DragOverEvent {
    pub fn new(active: DragItem, over: Option<DragItem>) -> Self {
        Self { active, over }
    }

    /// Returns the target unless it is missing or the active item itself
    pub fn distinct_target(&self) -> Option<&DragItem> {
        self.over.as_ref().filter(|over| over.id != self.active.id)
    }
}

/// `data` travels as `{ "current": <payload> }`
mod data_ref {
    use super::DragData;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Borrowed<'a> {
        current: Option<&'a DragData>,
    }

    #[derive(Deserialize)]
    struct Owned {
        #[serde(default)]
        current: Option<DragData>,
    }

    pub fn serialize<S: Serializer>(data: &Option<DragData>, s: S) -> Result<S::Ok, S::Error> {
        Borrowed {
            current: data.as_ref(),
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<DragData>, D::Error> {
        Ok(Option::<Owned>::deserialize(d)?.and_then(|owned| owned.current))
    }
}
