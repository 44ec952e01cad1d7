//! Task List Filtering
//!
//! Client-side narrowing of the last fetched task list.

use crate::models::{Priority, Status, Task};

/// Select value meaning "no constraint"
pub const ALL: &str = "all";

/// Dashboard filter; `None` means all
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn status_value(&self) -> String {
        self.status.as_ref().map_or(ALL, |s| s.as_str()).to_string()
    }

    pub fn priority_value(&self) -> String {
        self.priority.as_ref().map_or(ALL, |p| p.as_str()).to_string()
    }

    /// Update from a `<select>` value
    pub fn set_status_value(&mut self, value: &str) {
        self.status = (value != ALL).then(|| Status::parse(value));
    }

    pub fn set_priority_value(&mut self, value: &str) {
        self.priority = (value != ALL).then(|| Priority::parse(value));
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.status.as_ref().map_or(true, |s| &task.status == s)
            && self.priority.as_ref().map_or(true, |p| &task.priority == p)
    }
}

/// Tasks passing both predicates, in source order
pub fn apply_filter(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}
