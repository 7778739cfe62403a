use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::card::{Card, CardId};
use crate::field_update::FieldUpdate;

pub type ColumnId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub color: Option<String>,
    /// Advisory only. Nothing rejects an insertion past this limit.
    #[serde(default)]
    pub card_limit: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct ColumnUpdate {
    pub title: Option<String>,
    pub color: FieldUpdate<String>,
    pub card_limit: FieldUpdate<u32>,
}

impl Column {
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            cards: Vec::new(),
            color: None,
            card_limit: None,
        }
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn with_card_limit(mut self, card_limit: Option<u32>) -> Self {
        self.card_limit = card_limit;
        self
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn update(&mut self, updates: ColumnUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.color.apply_to(&mut self.color);
        updates.card_limit.apply_to(&mut self.card_limit);
    }

    pub fn position_of(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_over_limit(&self) -> bool {
        self.card_limit
            .is_some_and(|limit| self.cards.len() > limit as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of() {
        let a = Card::new("a".to_string());
        let b = Card::new("b".to_string());
        let (a_id, b_id) = (a.id, b.id);
        let column = Column::new("To Do".to_string()).with_cards(vec![a, b]);

        assert_eq!(column.position_of(a_id), Some(0));
        assert_eq!(column.position_of(b_id), Some(1));
        assert_eq!(column.position_of(Uuid::new_v4()), None);
    }

    #[test]
    fn test_card_limit_is_advisory() {
        let column = Column::new("Doing".to_string())
            .with_card_limit(Some(1))
            .with_cards(vec![Card::new("a".to_string()), Card::new("b".to_string())]);

        assert_eq!(column.card_count(), 2);
        assert!(column.is_over_limit());

        let unlimited = Column::new("Done".to_string());
        assert!(!unlimited.is_over_limit());
    }

    #[test]
    fn test_update() {
        let mut column = Column::new("Old".to_string()).with_color(Some("blue".to_string()));
        column.update(ColumnUpdate {
            title: Some("New".to_string()),
            color: FieldUpdate::Clear,
            card_limit: FieldUpdate::Set(4),
        });

        assert_eq!(column.title, "New");
        assert_eq!(column.color, None);
        assert_eq!(column.card_limit, Some(4));
    }
}
