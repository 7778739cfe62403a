pub mod board;
pub mod card;
pub mod column;
pub mod commands;
pub mod field_update;
pub mod gesture;
pub mod task;
pub mod transform;

pub use board::{Board, BoardId};
pub use card::{Card, CardId, CardUpdate};
pub use column::{Column, ColumnId, ColumnUpdate};
pub use field_update::FieldUpdate;
pub use gesture::{
    BoardObserver, DragEvent, DragPayload, DragState, DragTarget, EntityKind, GestureCoordinator,
};
pub use task::{Task, TaskId};
pub use transform::CardLocation;
