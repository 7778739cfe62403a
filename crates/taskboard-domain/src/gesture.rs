//! Drag-and-drop gesture coordination.
//!
//! The presentation layer reports three phases of a pointer drag: start,
//! over (repeated while hovering), and end. [`GestureCoordinator`] tracks what
//! is being dragged, maps each phase onto a board transformation, and pushes
//! the resulting board to a [`BoardObserver`]. It never keeps a board between
//! calls; every handler works on the snapshot it is handed.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::Board;
use crate::card::{Card, CardId};
use crate::column::{Column, ColumnId};
use crate::transform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Card,
    Column,
}

/// A classified element under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragTarget {
    pub kind: EntityKind,
    pub id: Uuid,
}

impl DragTarget {
    pub fn card(id: CardId) -> Self {
        Self {
            kind: EntityKind::Card,
            id,
        }
    }

    pub fn column(id: ColumnId) -> Self {
        Self {
            kind: EntityKind::Column,
            id,
        }
    }
}

/// Denormalized copy of the entity picked up at drag-start.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    Card(Card),
    Column(Column),
}

impl DragPayload {
    pub fn target(&self) -> DragTarget {
        match self {
            DragPayload::Card(card) => DragTarget::card(card.id),
            DragPayload::Column(column) => DragTarget::column(column.id),
        }
    }
}

/// Drag-over and drag-end event body. `over` is `None` when the pointer is
/// not above any droppable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEvent {
    pub active: DragTarget,
    #[serde(default)]
    pub over: Option<DragTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingCard(CardId),
    DraggingColumn(ColumnId),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    pub fn dragged_card(&self) -> Option<CardId> {
        match self {
            DragState::DraggingCard(id) => Some(*id),
            _ => None,
        }
    }

    pub fn dragged_column(&self) -> Option<ColumnId> {
        match self {
            DragState::DraggingColumn(id) => Some(*id),
            _ => None,
        }
    }
}

/// Receives every board produced by an effective mutation.
#[cfg_attr(test, mockall::automock)]
pub trait BoardObserver {
    fn on_board_changed(&mut self, board: Board);
}

impl<F> BoardObserver for F
where
    F: FnMut(Board),
{
    fn on_board_changed(&mut self, board: Board) {
        self(board)
    }
}

/// Preview applied while hovering. Only a card over a column other than its
/// own does anything: the card is appended to that column. Hover reordering
/// is left to [`resolve_drop`].
pub fn preview<'a>(board: &'a Board, event: &DragEvent) -> Cow<'a, Board> {
    match (event.active.kind, event.over) {
        (
            EntityKind::Card,
            Some(DragTarget {
                kind: EntityKind::Column,
                id: column_id,
            }),
        ) => append_to_column(board, event.active.id, column_id),
        _ => Cow::Borrowed(board),
    }
}

/// Transformation applied when the pointer is released.
pub fn resolve_drop<'a>(board: &'a Board, event: &DragEvent) -> Cow<'a, Board> {
    let Some(over) = event.over else {
        return Cow::Borrowed(board);
    };
    let active = event.active;

    match (active.kind, over.kind) {
        (EntityKind::Card, EntityKind::Column) => append_to_column(board, active.id, over.id),
        (EntityKind::Card, EntityKind::Card) => drop_card_on_card(board, active.id, over.id),
        (EntityKind::Column, EntityKind::Column) => {
            let (Some(from), Some(to)) = (
                board.column_position(active.id),
                board.column_position(over.id),
            ) else {
                return Cow::Borrowed(board);
            };
            transform::reorder_columns(board, from, to)
        }
        (EntityKind::Column, EntityKind::Card) => Cow::Borrowed(board),
    }
}

fn append_to_column(board: &Board, card_id: CardId, column_id: ColumnId) -> Cow<'_, Board> {
    let Some(location) = transform::locate_card(board, card_id) else {
        return Cow::Borrowed(board);
    };
    if location.column_id == column_id {
        return Cow::Borrowed(board);
    }
    transform::move_card(board, card_id, location.column_id, column_id, None)
}

fn drop_card_on_card(board: &Board, active_id: CardId, over_id: CardId) -> Cow<'_, Board> {
    let (Some(active), Some(over)) = (
        transform::locate_card(board, active_id),
        transform::locate_card(board, over_id),
    ) else {
        return Cow::Borrowed(board);
    };

    if active.column_id == over.column_id {
        transform::reorder_cards(board, active.column_id, active.index, over.index)
    } else {
        transform::move_card(
            board,
            active_id,
            active.column_id,
            over.column_id,
            Some(over.index),
        )
    }
}

fn publish<O>(next: Cow<'_, Board>, observer: &mut O) -> bool
where
    O: BoardObserver + ?Sized,
{
    match next {
        Cow::Owned(board) => {
            observer.on_board_changed(board);
            true
        }
        Cow::Borrowed(_) => false,
    }
}

#[derive(Debug, Default)]
pub struct GestureCoordinator {
    state: DragState,
}

impl GestureCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn on_drag_start(&mut self, payload: &DragPayload) {
        self.state = match payload {
            DragPayload::Card(card) => DragState::DraggingCard(card.id),
            DragPayload::Column(column) => DragState::DraggingColumn(column.id),
        };
        tracing::debug!("Drag started: {:?}", self.state);
    }

    /// Returns whether a board was published.
    pub fn on_drag_over<O>(&mut self, board: &Board, event: &DragEvent, observer: &mut O) -> bool
    where
        O: BoardObserver + ?Sized,
    {
        let published = publish(preview(board, event), observer);
        if published {
            tracing::debug!("Drag over: previewed {:?} into {:?}", event.active, event.over);
        }
        published
    }

    /// Clears drag state unconditionally, then applies the drop. Returns
    /// whether a board was published.
    pub fn on_drag_end<O>(&mut self, board: &Board, event: &DragEvent, observer: &mut O) -> bool
    where
        O: BoardObserver + ?Sized,
    {
        self.state = DragState::Idle;

        if event.over.is_none() {
            tracing::debug!("Drag cancelled: {:?} dropped outside any surface", event.active);
            return false;
        }

        let published = publish(resolve_drop(board, event), observer);
        tracing::debug!(
            "Drag ended: {:?} over {:?} (changed: {})",
            event.active,
            event.over,
            published
        );
        published
    }
}
