use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::output;
use taskboard_domain::commands::{AddTask, RemoveTask, ToggleTask};

pub fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add {
            card_id,
            description,
        } => ctx.execute(&AddTask {
            card_id,
            description,
        })?,
        TaskAction::Toggle { card_id, id } => ctx.execute(&ToggleTask {
            card_id,
            task_id: id,
        })?,
        TaskAction::Remove { card_id, id } => ctx.execute(&RemoveTask {
            card_id,
            task_id: id,
        })?,
    }
    output::output_success(&ctx.board)
}
