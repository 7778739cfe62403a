use super::{validate_title, Command};
use crate::{transform, Board, Column, ColumnId, ColumnUpdate};
use taskboard_core::{TaskboardError, TaskboardResult};

/// Append a new column to the board
pub struct CreateColumn {
    pub title: String,
    pub color: Option<String>,
    pub card_limit: Option<u32>,
}

impl CreateColumn {
    pub fn new(title: String) -> Self {
        Self {
            title,
            color: None,
            card_limit: None,
        }
    }
}

impl Command for CreateColumn {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let title = validate_title("Column", &self.title)?;
        let column = Column::new(title)
            .with_color(self.color.clone())
            .with_card_limit(self.card_limit);

        let mut next = board.clone();
        next.columns.push(column);
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Create column: '{}'", self.title.trim())
    }
}

/// Update column properties (title, color, card limit)
pub struct UpdateColumn {
    pub column_id: ColumnId,
    pub updates: ColumnUpdate,
}

impl Command for UpdateColumn {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let mut updates = self.updates.clone();
        if let Some(title) = updates.title.take() {
            updates.title = Some(validate_title("Column", &title)?);
        }

        let mut next = board.clone();
        let column = next
            .column_mut(self.column_id)
            .ok_or_else(|| TaskboardError::column_not_found(self.column_id))?;
        column.update(updates);
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Update column {}", self.column_id)
    }
}

/// Delete a column together with the cards it holds
pub struct DeleteColumn {
    pub column_id: ColumnId,
}

impl Command for DeleteColumn {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let position = board
            .column_position(self.column_id)
            .ok_or_else(|| TaskboardError::column_not_found(self.column_id))?;

        let mut next = board.clone();
        next.columns.remove(position);
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Delete column {}", self.column_id)
    }
}

/// Move a column from one position to another
pub struct ReorderColumns {
    pub from: usize,
    pub to: usize,
}

impl Command for ReorderColumns {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let len = board.columns.len();
        if self.from >= len || self.to >= len {
            return Err(TaskboardError::Validation(format!(
                "column positions {} -> {} out of range (board has {} columns)",
                self.from, self.to, len
            )));
        }

        let mut next = transform::reorder_columns(board, self.from, self.to).into_owned();
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Move column from {} to {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, FieldUpdate};
    use uuid::Uuid;

    fn board() -> Board {
        Board::with_column_titles("Team".to_string(), ["A", "B", "C"])
    }

    #[test]
    fn test_create_column_appends() {
        let board = board();
        let next = CreateColumn {
            title: "Review".to_string(),
            color: Some("purple".to_string()),
            card_limit: Some(3),
        }
        .execute(&board)
        .unwrap();

        assert_eq!(next.columns.len(), 4);
        let created = next.columns.last().unwrap();
        assert_eq!(created.title, "Review");
        assert_eq!(created.card_limit, Some(3));
        assert!(next.updated_at >= board.updated_at);
    }

    #[test]
    fn test_update_column() {
        let board = board();
        let column_id = board.columns[1].id;
        let next = UpdateColumn {
            column_id,
            updates: ColumnUpdate {
                title: Some("Doing".to_string()),
                color: FieldUpdate::Set("amber".to_string()),
                card_limit: FieldUpdate::NoChange,
            },
        }
        .execute(&board)
        .unwrap();

        assert_eq!(next.columns[1].title, "Doing");
        assert_eq!(next.columns[1].color.as_deref(), Some("amber"));
    }

    #[test]
    fn test_update_column_errors() {
        let board = board();
        let unknown = UpdateColumn {
            column_id: Uuid::new_v4(),
            updates: ColumnUpdate::default(),
        };
        assert!(matches!(
            unknown.execute(&board),
            Err(TaskboardError::NotFound(_))
        ));

        let empty_title = UpdateColumn {
            column_id: board.columns[0].id,
            updates: ColumnUpdate {
                title: Some(" ".to_string()),
                ..Default::default()
            },
        };
        assert!(matches!(
            empty_title.execute(&board),
            Err(TaskboardError::Validation(_))
        ));
    }

    #[test]
    fn test_delete_column_drops_its_cards() {
        let mut board = board();
        board.columns[0].cards.push(Card::new("gone".to_string()));
        board.columns[1].cards.push(Card::new("stays".to_string()));
        let column_id = board.columns[0].id;

        let next = DeleteColumn { column_id }.execute(&board).unwrap();
        assert_eq!(next.columns.len(), 2);
        assert_eq!(next.card_count(), 1);
        assert!(transform::locate_column(&next, column_id).is_none());
    }

    #[test]
    fn test_reorder_columns_command() {
        let board = board();
        let next = ReorderColumns { from: 2, to: 0 }.execute(&board).unwrap();
        let titles: Vec<_> = next.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);

        assert!(ReorderColumns { from: 0, to: 3 }.execute(&board).is_err());
    }
}
