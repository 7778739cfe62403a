use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use taskboard_core::AppConfig;
use taskboard_domain::commands::UpdateBoard;
use taskboard_domain::Board;

/// `board create` needs no input file; every other action does.
pub fn handle_create(config: &AppConfig, title: Option<String>) -> anyhow::Result<()> {
    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| config.effective_default_board_title().to_string());
    let board = Board::with_column_titles(title, config.effective_default_columns());
    tracing::info!("Created board: {} (id: {})", board.title, board.id);
    output::output_success(&board)
}

pub fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { .. } => {
            anyhow::bail!("board create does not take an input file")
        }
        BoardAction::Show => {}
        BoardAction::Update { title } => {
            ctx.execute(&UpdateBoard { title })?;
        }
    }
    output::output_success(&ctx.board)
}
