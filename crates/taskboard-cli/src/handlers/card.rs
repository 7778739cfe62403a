use crate::cli::{CardAction, CardCreateArgs, CardUpdateArgs};
use crate::context::CliContext;
use crate::handlers::column::field_update;
use crate::output;
use serde::Serialize;
use taskboard_domain::commands::{CreateCard, DeleteCard, MoveCard, ReorderCards, UpdateCard};
use taskboard_domain::{transform, Card, CardUpdate, ColumnId};

#[derive(Serialize)]
struct CardLocationView<'a> {
    card: &'a Card,
    column_id: ColumnId,
    index: usize,
}

pub fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create(args) => {
            ctx.execute(&create_command(args))?;
        }
        CardAction::Update(args) => {
            ctx.execute(&update_command(args))?;
        }
        CardAction::Delete { id } => {
            ctx.execute(&DeleteCard { card_id: id })?;
        }
        CardAction::Move {
            id,
            column_id,
            position,
        } => {
            ctx.execute(&MoveCard {
                card_id: id,
                column_id,
                position,
            })?;
        }
        CardAction::Reorder {
            column_id,
            from,
            to,
        } => {
            ctx.execute(&ReorderCards {
                column_id,
                from,
                to,
            })?;
        }
        CardAction::Locate { id } => {
            let location = transform::locate_card(&ctx.board, id)
                .ok_or_else(|| anyhow::anyhow!("Card not found: {}", id))?;
            return output::output_success(CardLocationView {
                card: location.card,
                column_id: location.column_id,
                index: location.index,
            });
        }
    }
    output::output_success(&ctx.board)
}

fn create_command(args: CardCreateArgs) -> CreateCard {
    CreateCard {
        column_id: args.column_id,
        title: args.title,
        description: args.description,
        color: args.color,
    }
}

fn update_command(args: CardUpdateArgs) -> UpdateCard {
    UpdateCard {
        card_id: args.id,
        updates: CardUpdate {
            title: args.title,
            description: field_update(args.description, args.clear_description),
            color: field_update(args.color, args.clear_color),
            starts_at: field_update(args.starts_at, args.clear_schedule),
            ends_at: field_update(args.ends_at, args.clear_schedule),
        },
    }
}
