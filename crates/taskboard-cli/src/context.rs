use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::commands::{execute_and_publish, Command};
use taskboard_domain::Board;

/// The board a single CLI invocation works on. Loaded once, never saved.
pub struct CliContext {
    pub board: Board,
}

impl CliContext {
    pub async fn load(file_path: &str) -> TaskboardResult<Self> {
        let content = tokio::fs::read_to_string(file_path).await?;
        let board = serde_json::from_str(&content)
            .map_err(|e| TaskboardError::Serialization(e.to_string()))?;
        tracing::debug!("Loaded board from {}", file_path);
        Ok(Self { board })
    }

    pub fn execute(&mut self, command: &dyn Command) -> TaskboardResult<()> {
        let mut published = None;
        execute_and_publish(command, &self.board, &mut |next: Board| {
            published = Some(next)
        })?;
        if let Some(next) = published {
            self.board = next;
        }
        Ok(())
    }
}
