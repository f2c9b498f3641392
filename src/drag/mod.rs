pub mod event;
pub mod state;

pub use event::{DragData, DragEndEvent, DragItem, DragKind, DragOverEvent, DragStartEvent};
pub use state::DragState;
