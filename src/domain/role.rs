//! Role capabilities and the roles that hold them.
//!
//! Each capability is a single-operation trait. A role implements exactly the
//! subset it can perform, and callers bind to the narrowest capability they
//! need.

use crate::domain::task::{Developer, Task};

/// Capability to open sub-tasks.
pub trait TaskCreator {
    fn create_subtask(&self, title: &str, description: &str) -> Task;
}

/// Capability to hand a task to a developer.
pub trait TaskAssigner {
    fn assign_task(&self, task: Task, assignee: Developer) -> Task;
}

/// Capability to pick up and execute a task.
pub trait TaskWorker {
    fn work_on_task(&self, task: &Task);
}

/// Leads create, assign, and execute work themselves.
pub struct TeamLead {
    name: String,
}

impl TeamLead {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TaskCreator for TeamLead {
    fn create_subtask(&self, title: &str, description: &str) -> Task {
        tracing::debug!(lead = %self.name, title, "opening sub-task");
        Task::new(title, description)
    }
}

impl TaskAssigner for TeamLead {
    fn assign_task(&self, task: Task, assignee: Developer) -> Task {
        tracing::debug!(lead = %self.name, title = %task.title, to = %assignee.name, "assigning task");
        task.assigned_to(assignee)
    }
}

impl TaskWorker for TeamLead {
    fn work_on_task(&self, task: &Task) {
        tracing::debug!(lead = %self.name, title = %task.title, "picking up task");
    }
}

/// Managers create and assign work but never execute it.
///
/// `work_on_task` is absent from this type, so code that needs a worker
/// cannot be handed a `Manager`:
///
/// ```compile_fail
/// use sqlcrew::domain::role::Manager;
/// use sqlcrew::domain::task::Task;
///
/// let manager = Manager::new("Morgan");
/// let task = Task::new("Merge and Deploy", "Merge and deploy the sharing feature");
/// manager.work_on_task(&task);
/// ```
pub struct Manager {
    name: String,
}

impl Manager {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TaskCreator for Manager {
    fn create_subtask(&self, title: &str, description: &str) -> Task {
        tracing::debug!(manager = %self.name, title, "opening sub-task");
        Task::new(title, description)
    }
}

impl TaskAssigner for Manager {
    fn assign_task(&self, task: Task, assignee: Developer) -> Task {
        tracing::debug!(manager = %self.name, title = %task.title, to = %assignee.name, "delegating task");
        task.assigned_to(assignee)
    }
}
