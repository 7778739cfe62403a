use crate::cli::{ColumnAction, ColumnUpdateArgs};
use crate::context::CliContext;
use crate::output;
use taskboard_domain::commands::{CreateColumn, DeleteColumn, ReorderColumns, UpdateColumn};
use taskboard_domain::{ColumnUpdate, FieldUpdate};

pub fn handle(ctx: &mut CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Create {
            title,
            color,
            card_limit,
        } => {
            ctx.execute(&CreateColumn {
                title,
                color,
                card_limit,
            })?;
        }
        ColumnAction::Update(args) => {
            ctx.execute(&update_command(args))?;
        }
        ColumnAction::Delete { id } => {
            ctx.execute(&DeleteColumn { column_id: id })?;
        }
        ColumnAction::Reorder { from, to } => {
            ctx.execute(&ReorderColumns { from, to })?;
        }
    }
    output::output_success(&ctx.board)
}

fn update_command(args: ColumnUpdateArgs) -> UpdateColumn {
    UpdateColumn {
        column_id: args.id,
        updates: ColumnUpdate {
            title: args.title,
            color: field_update(args.color, args.clear_color),
            card_limit: field_update(args.card_limit, args.clear_card_limit),
        },
    }
}

pub(crate) fn field_update<T>(value: Option<T>, clear: bool) -> FieldUpdate<T> {
    match (value, clear) {
        (Some(value), _) => FieldUpdate::Set(value),
        (None, true) => FieldUpdate::Clear,
        (None, false) => FieldUpdate::NoChange,
    }
}
