use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field_update::FieldUpdate;
use crate::task::{Task, TaskId};

pub type CardId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a card. Fields left at their defaults are untouched.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
    pub color: FieldUpdate<String>,
    pub starts_at: FieldUpdate<DateTime<Utc>>,
    pub ends_at: FieldUpdate<DateTime<Utc>>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && !self.description.is_change()
            && !self.color.is_change()
            && !self.starts_at.is_change()
            && !self.ends_at.is_change()
    }
}

impl Card {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: None,
            color: None,
            starts_at: None,
            ends_at: None,
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn update(&mut self, updates: CardUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.description.apply_to(&mut self.description);
        updates.color.apply_to(&mut self.color);
        updates.starts_at.apply_to(&mut self.starts_at);
        updates.ends_at.apply_to(&mut self.ends_at);
        self.touch();
    }

    pub fn add_task(&mut self, description: String) -> TaskId {
        let task = Task::new(description);
        let id = task.id;
        self.tasks.push(task);
        self.touch();
        id
    }

    /// Flip a checklist item. Returns the new completed flag, or `None` if the task is unknown.
    pub fn toggle_task(&mut self, task_id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        task.toggle();
        let completed = task.completed;
        self.touch();
        Some(completed)
    }

    pub fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == task_id)?;
        let task = self.tasks.remove(index);
        self.touch();
        Some(task)
    }

    pub fn completed_task_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
