use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "An in-memory task board with drag-and-drop moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a board JSON file (or set TASKBOARD_FILE env var). Never written to.
    #[arg(long, value_name = "FILE", env = "TASKBOARD_FILE", global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Board operations
    Board(BoardCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Card operations
    Card(CardCommand),
    /// Card checklist operations
    Task(TaskCommand),
    /// Replay a recorded drag gesture against the board
    Drag(DragArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// Board commands
#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Create a new board with the configured default columns
    Create {
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the board
    Show,
    /// Rename the board
    Update {
        #[arg(long)]
        title: String,
    },
}

// Column commands
#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Append a new column
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        card_limit: Option<u32>,
    },
    /// Update a column
    Update(ColumnUpdateArgs),
    /// Delete a column and its cards
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a column from one position to another
    Reorder {
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
}

#[derive(Args)]
pub struct ColumnUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_color")]
    pub color: Option<String>,
    #[arg(long)]
    pub clear_color: bool,
    #[arg(long, conflicts_with = "clear_card_limit")]
    pub card_limit: Option<u32>,
    #[arg(long)]
    pub clear_card_limit: bool,
}

// Card commands
#[derive(Args)]
pub struct CardCommand {
    #[command(subcommand)]
    pub action: CardAction,
}

#[derive(Subcommand)]
pub enum CardAction {
    /// Append a new card to a column
    Create(CardCreateArgs),
    /// Update a card
    Update(CardUpdateArgs),
    /// Delete a card
    Delete {
        #[arg(long)]
        id: Uuid,
    },
    /// Move a card to a column, optionally at a position
    Move {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        column_id: Uuid,
        #[arg(long)]
        position: Option<usize>,
    },
    /// Move a card within its column
    Reorder {
        #[arg(long)]
        column_id: Uuid,
        #[arg(long)]
        from: usize,
        #[arg(long)]
        to: usize,
    },
    /// Show a card and the column holding it
    Locate {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct CardCreateArgs {
    #[arg(long)]
    pub column_id: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args)]
pub struct CardUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,
    #[arg(long)]
    pub clear_description: bool,
    #[arg(long, conflicts_with = "clear_color")]
    pub color: Option<String>,
    #[arg(long)]
    pub clear_color: bool,
    /// RFC 3339 timestamp
    #[arg(long)]
    pub starts_at: Option<DateTime<Utc>>,
    /// RFC 3339 timestamp
    #[arg(long)]
    pub ends_at: Option<DateTime<Utc>>,
    /// Remove both start and end timestamps
    #[arg(long, conflicts_with_all = ["starts_at", "ends_at"])]
    pub clear_schedule: bool,
}

// Task commands
#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a checklist item to a card
    Add {
        #[arg(long)]
        card_id: Uuid,
        #[arg(long)]
        description: String,
    },
    /// Toggle a checklist item
    Toggle {
        #[arg(long)]
        card_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Remove a checklist item
    Remove {
        #[arg(long)]
        card_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct DragArgs {
    /// JSON array of drag events: {"phase": "start"|"over"|"end", "active": {...}, "over": {...}}
    #[arg(long, value_name = "SCRIPT")]
    pub script: PathBuf,
}
