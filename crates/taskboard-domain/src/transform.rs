//! Pure, order-preserving board transformations.
//!
//! Every mutation takes a board snapshot and returns a [`Cow`]: `Borrowed`
//! (the very same board) when the request does not resolve or changes
//! nothing, `Owned` with a fresh board otherwise. Callers decide whether to
//! re-render by matching on the variant. Lookup-misses are never errors.

use std::borrow::Cow;

use chrono::Utc;

use crate::board::Board;
use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};

/// Where a card currently sits on a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLocation<'a> {
    pub card: &'a Card,
    pub column_id: ColumnId,
    pub index: usize,
}

pub fn locate_column(board: &Board, column_id: ColumnId) -> Option<&Column> {
    board.columns.iter().find(|c| c.id == column_id)
}

/// Scan columns in board order, then cards in column order.
pub fn locate_card(board: &Board, card_id: CardId) -> Option<CardLocation<'_>> {
    board.columns.iter().find_map(|column| {
        column
            .position_of(card_id)
            .map(|index| CardLocation {
                card: &column.cards[index],
                column_id: column.id,
                index,
            })
    })
}

/// Move a card out of `source_column_id` into `target_column_id`.
///
/// `target_index` is interpreted against the target sequence after the card
/// has been removed, so a same-column move lands exactly at the requested
/// slot. A missing or out-of-range index appends.
pub fn move_card(
    board: &Board,
    card_id: CardId,
    source_column_id: ColumnId,
    target_column_id: ColumnId,
    target_index: Option<usize>,
) -> Cow<'_, Board> {
    let Some(source) = board.column_position(source_column_id) else {
        tracing::trace!("move_card: source column {} not found", source_column_id);
        return Cow::Borrowed(board);
    };
    let Some(target) = board.column_position(target_column_id) else {
        tracing::trace!("move_card: target column {} not found", target_column_id);
        return Cow::Borrowed(board);
    };
    let Some(card_index) = board.columns[source].position_of(card_id) else {
        tracing::trace!(
            "move_card: card {} not in column {}",
            card_id,
            source_column_id
        );
        return Cow::Borrowed(board);
    };

    let mut next = board.clone();
    let mut card = next.columns[source].cards.remove(card_index);
    card.updated_at = Utc::now();

    let cards = &mut next.columns[target].cards;
    match target_index {
        Some(index) if index <= cards.len() => cards.insert(index, card),
        _ => cards.push(card),
    }
    Cow::Owned(next)
}

pub fn reorder_cards(
    board: &Board,
    column_id: ColumnId,
    source_index: usize,
    target_index: usize,
) -> Cow<'_, Board> {
    if source_index == target_index {
        return Cow::Borrowed(board);
    }
    let Some(position) = board.column_position(column_id) else {
        tracing::trace!("reorder_cards: column {} not found", column_id);
        return Cow::Borrowed(board);
    };
    if !in_bounds(board.columns[position].cards.len(), source_index, target_index) {
        tracing::trace!(
            "reorder_cards: {} -> {} out of range in column {}",
            source_index,
            target_index,
            column_id
        );
        return Cow::Borrowed(board);
    }

    let mut next = board.clone();
    splice_move(&mut next.columns[position].cards, source_index, target_index);
    Cow::Owned(next)
}

pub fn reorder_columns(board: &Board, source_index: usize, target_index: usize) -> Cow<'_, Board> {
    if source_index == target_index {
        return Cow::Borrowed(board);
    }
    if !in_bounds(board.columns.len(), source_index, target_index) {
        tracing::trace!(
            "reorder_columns: {} -> {} out of range",
            source_index,
            target_index
        );
        return Cow::Borrowed(board);
    }

    let mut next = board.clone();
    splice_move(&mut next.columns, source_index, target_index);
    Cow::Owned(next)
}

fn in_bounds(len: usize, source_index: usize, target_index: usize) -> bool {
    source_index < len && target_index < len
}

fn splice_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    let item = items.remove(from);
    items.insert(to, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn card(title: &str) -> Card {
        Card::new(title.to_string())
    }

    fn board_with(columns: Vec<(&str, Vec<&str>)>) -> Board {
        let mut board = Board::new("Test".to_string());
        board.columns = columns
            .into_iter()
            .map(|(title, cards)| {
                Column::new(title.to_string()).with_cards(cards.into_iter().map(card).collect())
            })
            .collect();
        board
    }

    fn titles(column: &Column) -> Vec<&str> {
        column.cards.iter().map(|c| c.title.as_str()).collect()
    }

    fn card_id(board: &Board, title: &str) -> CardId {
        board
            .columns
            .iter()
            .flat_map(|c| c.cards.iter())
            .find(|c| c.title == title)
            .map(|c| c.id)
            .unwrap()
    }

    fn assert_unique_ids(board: &Board) {
        let mut cards = HashSet::new();
        let mut columns = HashSet::new();
        for column in &board.columns {
            assert!(columns.insert(column.id), "duplicate column {}", column.id);
            for card in &column.cards {
                assert!(cards.insert(card.id), "duplicate card {}", card.id);
            }
        }
    }

    #[test]
    fn test_locate_column() {
        let board = board_with(vec![("To Do", vec![]), ("Done", vec![])]);
        let done = board.columns[1].id;
        assert_eq!(locate_column(&board, done).unwrap().title, "Done");
        assert!(locate_column(&board, Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_locate_card() {
        let board = board_with(vec![("A", vec!["c1"]), ("B", vec!["c2", "c3"])]);
        let c3 = card_id(&board, "c3");

        let location = locate_card(&board, c3).unwrap();
        assert_eq!(location.column_id, board.columns[1].id);
        assert_eq!(location.index, 1);
        assert_eq!(location.card.title, "c3");

        assert!(locate_card(&board, Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_move_card_between_columns() {
        let board = board_with(vec![("To Do", vec!["c1", "c2"]), ("Done", vec![])]);
        let (todo, done) = (board.columns[0].id, board.columns[1].id);
        let c1 = card_id(&board, "c1");
        let before = board.columns[0].cards[0].updated_at;

        let next = move_card(&board, c1, todo, done, None);
        assert!(matches!(next, Cow::Owned(_)));

        assert_eq!(titles(&next.columns[0]), vec!["c2"]);
        assert_eq!(titles(&next.columns[1]), vec!["c1"]);
        assert!(next.columns[1].cards[0].updated_at >= before);
        // input untouched
        assert_eq!(titles(&board.columns[0]), vec!["c1", "c2"]);
        assert_unique_ids(&next);
    }

    #[test]
    fn test_move_card_at_index() {
        let board = board_with(vec![("A", vec!["c1"]), ("B", vec!["x", "y"])]);
        let (a, b) = (board.columns[0].id, board.columns[1].id);
        let c1 = card_id(&board, "c1");

        let next = move_card(&board, c1, a, b, Some(1));
        assert_eq!(titles(&next.columns[1]), vec!["x", "c1", "y"]);

        let next = move_card(&board, c1, a, b, Some(2));
        assert_eq!(titles(&next.columns[1]), vec!["x", "y", "c1"]);
    }

    #[test]
    fn test_move_card_out_of_range_index_appends() {
        let board = board_with(vec![("A", vec!["c1"]), ("B", vec!["x"])]);
        let (a, b) = (board.columns[0].id, board.columns[1].id);
        let c1 = card_id(&board, "c1");

        let next = move_card(&board, c1, a, b, Some(17));
        assert_eq!(titles(&next.columns[1]), vec!["x", "c1"]);
    }

    #[test]
    fn test_move_card_within_same_column_uses_post_removal_index() {
        let board = board_with(vec![("A", vec!["c1", "c2", "c3"])]);
        let a = board.columns[0].id;
        let c1 = card_id(&board, "c1");

        let next = move_card(&board, c1, a, a, Some(2));
        assert_eq!(titles(&next.columns[0]), vec!["c2", "c3", "c1"]);

        let c3 = card_id(&board, "c3");
        let next = move_card(&board, c3, a, a, Some(0));
        assert_eq!(titles(&next.columns[0]), vec!["c3", "c1", "c2"]);
        assert_eq!(next.columns[0].cards.len(), 3);
    }

    #[test]
    fn test_move_card_unknown_ids_return_original() {
        let board = board_with(vec![("A", vec!["c1"]), ("B", vec![])]);
        let (a, b) = (board.columns[0].id, board.columns[1].id);
        let c1 = card_id(&board, "c1");

        let missing = Uuid::new_v4();
        for next in [
            move_card(&board, c1, missing, b, None),
            move_card(&board, c1, a, missing, None),
            move_card(&board, missing, a, b, None),
            // card exists, but not in the named source column
            move_card(&board, c1, b, a, None),
        ] {
            assert!(matches!(next, Cow::Borrowed(_)));
            assert_eq!(*next, board);
        }
    }

    #[test]
    fn test_move_card_round_trip_restores_order() {
        let board = board_with(vec![("A", vec!["c1", "c2", "c3"]), ("B", vec!["x"])]);
        let (a, b) = (board.columns[0].id, board.columns[1].id);
        let c2 = card_id(&board, "c2");

        let there = move_card(&board, c2, a, b, None).into_owned();
        assert_eq!(there.columns[0].cards.len(), 2);
        assert_eq!(there.columns[1].cards.len(), 2);

        let back = move_card(&there, c2, b, a, Some(1)).into_owned();
        assert_eq!(titles(&back.columns[0]), vec!["c1", "c2", "c3"]);
        assert_eq!(titles(&back.columns[1]), vec!["x"]);
    }

    #[test]
    fn test_reorder_cards() {
        let board = board_with(vec![("To Do", vec!["c1", "c2", "c3"])]);
        let todo = board.columns[0].id;

        let next = reorder_cards(&board, todo, 0, 2);
        assert_eq!(titles(&next.columns[0]), vec!["c2", "c3", "c1"]);

        let next = reorder_cards(&board, todo, 2, 0);
        assert_eq!(titles(&next.columns[0]), vec!["c3", "c1", "c2"]);
    }

    #[test]
    fn test_reorder_cards_noops() {
        let board = board_with(vec![("To Do", vec!["c1", "c2"])]);
        let todo = board.columns[0].id;

        for next in [
            reorder_cards(&board, todo, 1, 1),
            reorder_cards(&board, Uuid::new_v4(), 0, 1),
            reorder_cards(&board, todo, 0, 5),
            reorder_cards(&board, todo, 9, 0),
        ] {
            assert!(matches!(next, Cow::Borrowed(_)));
            assert_eq!(*next, board);
        }
    }

    #[test]
    fn test_reorder_columns() {
        let board = board_with(vec![("A", vec![]), ("B", vec![]), ("C", vec![])]);

        let next = reorder_columns(&board, 2, 0);
        let order: Vec<_> = next.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
        assert_unique_ids(&next);
    }

    #[test]
    fn test_reorder_columns_noops() {
        let board = board_with(vec![("A", vec![]), ("B", vec![])]);

        for next in [
            reorder_columns(&board, 0, 0),
            reorder_columns(&board, 0, 2),
            reorder_columns(&board, 3, 1),
        ] {
            assert!(matches!(next, Cow::Borrowed(_)));
            assert_eq!(*next, board);
        }
    }

    #[test]
    fn test_sequence_of_moves_preserves_ids_and_mass() {
        let mut board = board_with(vec![
            ("A", vec!["a1", "a2", "a3"]),
            ("B", vec!["b1"]),
            ("C", vec![]),
        ]);
        let ids: Vec<_> = board.columns.iter().map(|c| c.id).collect();
        let total = board.card_count();

        let a2 = card_id(&board, "a2");
        let b1 = card_id(&board, "b1");
        board = move_card(&board, a2, ids[0], ids[2], None).into_owned();
        board = move_card(&board, b1, ids[1], ids[2], Some(0)).into_owned();
        board = reorder_columns(&board, 0, 2).into_owned();
        board = reorder_cards(&board, ids[2], 0, 1).into_owned();

        assert_eq!(board.card_count(), total);
        assert_unique_ids(&board);

        let c = locate_column(&board, ids[2]).unwrap();
        assert_eq!(titles(c), vec!["a2", "b1"]);
    }
}
