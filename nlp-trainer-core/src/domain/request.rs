use serde::{Deserialize, Serialize};

use super::{Backend, Task};

/// A fully-typed task invocation. Built by the HTTP layer after validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRequest {
    pub task: Task,
    pub backend: Backend,
    pub text: String,
    pub comparison_text: Option<String>,
}

impl TaskRequest {
    pub fn new(task: Task, backend: Backend, text: impl Into<String>) -> Self {
        Self {
            task,
            backend,
            text: text.into(),
            comparison_text: None,
        }
    }

    pub fn with_comparison(mut self, comparison_text: impl Into<String>) -> Self {
        self.comparison_text = Some(comparison_text.into());
        self
    }

    /// The comparison text, treating an empty string the same as absent.
    pub fn comparison(&self) -> Option<&str> {
        self.comparison_text.as_deref().filter(|t| !t.is_empty())
    }
}
