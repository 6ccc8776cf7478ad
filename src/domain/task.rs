use serde::{Deserialize, Serialize};

/// A developer a task can be handed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
}

impl Developer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A unit of work, assigned to at most one developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub assignee: Option<Developer>,
}

impl Task {
    /// New unassigned task.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee: None,
        }
    }

    /// Consume the task, attaching its single assignee.
    pub fn assigned_to(mut self, developer: Developer) -> Self {
        self.assignee = Some(developer);
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_unassigned() {
        let task = Task::new("Backfill audit table", "Replay events since March");
        assert!(!task.is_assigned());
        assert_eq!(task.title, "Backfill audit table");
    }

    #[test]
    fn test_assigned_to_attaches_developer() {
        let task = Task::new("Merge and Deploy", "Merge and deploy the sharing feature")
            .assigned_to(Developer::new("Developer1"));
        assert!(task.is_assigned());
        assert_eq!(task.assignee.unwrap().name, "Developer1");
    }
}
