use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskboardError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TaskboardError {
    pub fn card_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("card {}", id))
    }

    pub fn column_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("column {}", id))
    }

    pub fn task_not_found(id: impl std::fmt::Display) -> Self {
        Self::NotFound(format!("task {}", id))
    }
}
