use crate::cli::DragArgs;
use crate::context::CliContext;
use crate::output;
use serde::{Deserialize, Serialize};
use taskboard_domain::{
    transform, Board, DragEvent, DragPayload, DragTarget, EntityKind, GestureCoordinator,
};

/// One line of a recorded gesture.
#[derive(Debug, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum ScriptedEvent {
    Start { active: DragTarget },
    Over(DragEvent),
    End(DragEvent),
}

#[derive(Serialize)]
struct DragReport<'a> {
    events: usize,
    published: usize,
    board: &'a Board,
}

pub async fn handle(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(&args.script).await?;
    let events: Vec<ScriptedEvent> = serde_json::from_str(&content)?;

    let published = replay(&mut ctx.board, &events);
    output::output_success(DragReport {
        events: events.len(),
        published,
        board: &ctx.board,
    })
}

/// Feed each event to a fresh coordinator, always handing it the latest
/// board. Returns how many boards were published.
pub fn replay(board: &mut Board, events: &[ScriptedEvent]) -> usize {
    let mut coordinator = GestureCoordinator::new();
    let mut published = 0;

    for event in events {
        let mut latest = None;
        let changed = match event {
            ScriptedEvent::Start { active } => {
                match payload_for(board, active) {
                    Some(payload) => coordinator.on_drag_start(&payload),
                    None => tracing::warn!("Drag start on unknown {:?} {}", active.kind, active.id),
                }
                false
            }
            ScriptedEvent::Over(e) => {
                coordinator.on_drag_over(board, e, &mut |next: Board| latest = Some(next))
            }
            ScriptedEvent::End(e) => {
                coordinator.on_drag_end(board, e, &mut |next: Board| latest = Some(next))
            }
        };
        if let Some(next) = latest {
            *board = next;
        }
        if changed {
            published += 1;
        }
    }
    published
}

fn payload_for(board: &Board, target: &DragTarget) -> Option<DragPayload> {
    match target.kind {
        EntityKind::Card => {
            transform::locate_card(board, target.id).map(|l| DragPayload::Card(l.card.clone()))
        }
        EntityKind::Column => {
            transform::locate_column(board, target.id).map(|c| DragPayload::Column(c.clone()))
        }
    }
}
