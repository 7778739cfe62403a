use super::{validate_title, Command};
use crate::{transform, Board, Card, CardId, CardUpdate, ColumnId};
use taskboard_core::{TaskboardError, TaskboardResult};

/// Append a new card to a column
pub struct CreateCard {
    pub column_id: ColumnId,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl CreateCard {
    pub fn new(column_id: ColumnId, title: String) -> Self {
        Self {
            column_id,
            title,
            description: None,
            color: None,
        }
    }
}

impl Command for CreateCard {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let title = validate_title("Card", &self.title)?;
        let card = Card::new(title)
            .with_description(self.description.clone())
            .with_color(self.color.clone());

        let mut next = board.clone();
        next.column_mut(self.column_id)
            .ok_or_else(|| TaskboardError::column_not_found(self.column_id))?
            .cards
            .push(card);
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.title.trim())
    }
}

/// Update card properties (title, description, color, schedule)
pub struct UpdateCard {
    pub card_id: CardId,
    pub updates: CardUpdate,
}

impl Command for UpdateCard {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let mut updates = self.updates.clone();
        if let Some(title) = updates.title.take() {
            updates.title = Some(validate_title("Card", &title)?);
        }

        let mut next = board.clone();
        let card = next
            .card_mut(self.card_id)
            .ok_or_else(|| TaskboardError::card_not_found(self.card_id))?;

        let starts_at = updates.starts_at.resolve(card.starts_at.as_ref());
        let ends_at = updates.ends_at.resolve(card.ends_at.as_ref());
        if let (Some(start), Some(end)) = (starts_at, ends_at) {
            if end < start {
                return Err(TaskboardError::Validation(format!(
                    "card end {} is before its start {}",
                    end.to_rfc3339(),
                    start.to_rfc3339()
                )));
            }
        }

        card.update(updates);
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Delete a card and its checklist
pub struct DeleteCard {
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let location = transform::locate_card(board, self.card_id)
            .ok_or_else(|| TaskboardError::card_not_found(self.card_id))?;
        let (column_id, index) = (location.column_id, location.index);

        let mut next = board.clone();
        if let Some(column) = next.column_mut(column_id) {
            column.cards.remove(index);
        }
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Move card to a column, optionally at a position
pub struct MoveCard {
    pub card_id: CardId,
    pub column_id: ColumnId,
    pub position: Option<usize>,
}

impl Command for MoveCard {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let source = transform::locate_card(board, self.card_id)
            .ok_or_else(|| TaskboardError::card_not_found(self.card_id))?
            .column_id;
        if transform::locate_column(board, self.column_id).is_none() {
            return Err(TaskboardError::column_not_found(self.column_id));
        }

        let mut next = transform::move_card(
            board,
            self.card_id,
            source,
            self.column_id,
            self.position,
        )
        .into_owned();
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!("Move card {} to column {}", self.card_id, self.column_id)
    }
}

/// Move a card within its column
pub struct ReorderCards {
    pub column_id: ColumnId,
    pub from: usize,
    pub to: usize,
}

impl Command for ReorderCards {
    fn execute(&self, board: &Board) -> TaskboardResult<Board> {
        let column = transform::locate_column(board, self.column_id)
            .ok_or_else(|| TaskboardError::column_not_found(self.column_id))?;
        let len = column.cards.len();
        if self.from >= len || self.to >= len {
            return Err(TaskboardError::Validation(format!(
                "card positions {} -> {} out of range (column has {} cards)",
                self.from, self.to, len
            )));
        }

        let mut next = transform::reorder_cards(board, self.column_id, self.from, self.to)
            .into_owned();
        next.touch();
        Ok(next)
    }

    fn description(&self) -> String {
        format!(
            "Move card in column {} from {} to {}",
            self.column_id, self.from, self.to
        )
    }
}
