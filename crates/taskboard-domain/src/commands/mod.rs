//! Create/update/delete operations over a board snapshot.
//!
//! Unlike the drag engine these may fail: empty titles are rejected and
//! unknown ids are reported. A command never mutates its input; it derives a
//! new board that the caller publishes through the same [`BoardObserver`]
//! channel the gesture coordinator uses.

use taskboard_core::{TaskboardError, TaskboardResult};

use crate::gesture::BoardObserver;
use crate::Board;

pub mod board_commands;
pub mod card_commands;
pub mod column_commands;
pub mod task_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use column_commands::*;
pub use task_commands::*;

/// Trait for commands that derive a new board from an existing one.
pub trait Command: Send + Sync {
    fn execute(&self, board: &Board) -> TaskboardResult<Board>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Run a command and hand the resulting board to `observer`.
pub fn execute_and_publish<O>(
    command: &dyn Command,
    board: &Board,
    observer: &mut O,
) -> TaskboardResult<()>
where
    O: BoardObserver + ?Sized,
{
    let next = command.execute(board)?;
    tracing::debug!("Executed: {}", command.description());
    observer.on_board_changed(next);
    Ok(())
}

pub(crate) fn validate_title(entity: &str, title: &str) -> TaskboardResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskboardError::Validation(format!(
            "{} title must not be empty",
            entity
        )));
    }
    Ok(trimmed.to_string())
}
