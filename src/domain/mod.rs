pub mod board;
pub mod column;
pub mod ids;
pub mod reorder;
pub mod snapshot;
pub mod task;

pub use board::{Board, BoardConfig, TaskDropPolicy};
pub use column::Column;
pub use ids::{ColumnId, IdGenerator, SequentialIdGenerator, TaskId, UuidGenerator};
pub use reorder::array_move;
pub use snapshot::{BoardSnapshot, ColumnView};
pub use task::Task;
