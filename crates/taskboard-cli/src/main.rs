mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{BoardAction, BoardCommand, Cli, Commands};
use context::CliContext;
use taskboard_core::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "taskboard",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        Commands::Board(BoardCommand {
            action: BoardAction::Create { title },
        }) => {
            return handlers::board::handle_create(&AppConfig::load(), title);
        }
        _ => {}
    }

    let file_path = cli
        .file
        .ok_or_else(|| anyhow::anyhow!("--file is required for this command"))?;
    let mut ctx = CliContext::load(&file_path).await?;

    match cli.command {
        Commands::Board(board_cmd) => handlers::board::handle(&mut ctx, board_cmd.action)?,
        Commands::Column(column_cmd) => handlers::column::handle(&mut ctx, column_cmd.action)?,
        Commands::Card(card_cmd) => handlers::card::handle(&mut ctx, card_cmd.action)?,
        Commands::Task(task_cmd) => handlers::task::handle(&mut ctx, task_cmd.action)?,
        Commands::Drag(args) => handlers::drag::handle(&mut ctx, args).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
