use super::{validate_title, Command};
use crate::Board;
use taskboard_core::TaskboardResult;

/// Rename a board
pub struct UpdateBoard {
    pub title: String,
}

impl Command for UpdateBoard {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let title = validate_title("Board", &self.title)?;
        let mut next = board.clone();
        next.update_title(title);
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Rename board to '{}'", self.title.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_board_title() {
        let board = Board::new("Old".to_string());
        let next = UpdateBoard {
            title: " New ".to_string(),
        }
        .execute(&board)
        .unwrap();

        assert_eq!(next.title, "New");
        assert_eq!(next.id, board.id);
        assert_eq!(board.title, "Old");
    }

    #[test]
    fn test_update_board_rejects_empty_title() {
        let board = Board::new("Old".to_string());
        assert!(UpdateBoard {
            title: String::new()
        }
        .execute(&board)
        .is_err());
    }
}
