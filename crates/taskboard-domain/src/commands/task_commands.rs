use super::Command;
use crate::{Board, CardId, TaskId};
use taskboard_core::{TaskboardError, TaskboardResult};

/// Add a checklist item to a card
pub struct AddTask {
    pub card_id: CardId,
    pub description: String,
}

impl Command for AddTask {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(TaskboardError::Validation(
                "task description must not be empty".to_string(),
            ));
        }

        let mut next = board.clone();
        next.card_mut(self.card_id)
            .ok_or_else(|| TaskboardError::card_not_found(self.card_id))?
            .add_task(description.to_string());
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Add task to card {}", self.card_id)
    }
}

/// Flip a checklist item between open and completed
pub struct ToggleTask {
    pub card_id: CardId,
    pub task_id: TaskId,
}

impl Command for ToggleTask {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let mut next = board.clone();
        next.card_mut(self.card_id)
            .ok_or_else(|| TaskboardError::card_not_found(self.card_id))?
            .toggle_task(self.task_id)
            .ok_or_else(|| TaskboardError::task_not_found(self.task_id))?;
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.task_id)
    }
}

/// Remove a checklist item from a card
pub struct RemoveTask {
    pub card_id: CardId,
    pub task_id: TaskId,
}

impl Command for RemoveTask {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let mut next = board.clone();
        next.card_mut(self.card_id)
            .ok_or_else(|| TaskboardError::card_not_found(self.card_id))?
            .remove_task(self.task_id)
            .ok_or_else(|| TaskboardError::task_not_found(self.task_id))?;
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Remove task {}", self.task_id)
    }
}
