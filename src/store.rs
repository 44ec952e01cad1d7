//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use task_client::{Resync, Stats, Task, TaskFilter};

/// Dashboard view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Last fetched task list, replaced wholesale on every resync
    pub tasks: Vec<Task>,
    pub stats: Option<Stats>,
    /// True until the first task fetch settles
    pub loading: bool,
    pub filter: TaskFilter,
    /// Task form modal: `Some(None)` = creating, `Some(Some(task))` = editing
    pub form: Option<Option<Task>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Replace tasks/stats with whatever the resync fetched
pub fn store_apply_resync(store: &DashboardStore, resync: Resync) {
    if let Some(tasks) = resync.tasks {
        *store.tasks().write() = tasks;
    }
    if let Some(stats) = resync.stats {
        *store.stats().write() = Some(stats);
    }
    store.loading().set(false);
}

pub fn store_open_form(store: &DashboardStore, editing: Option<Task>) {
    *store.form().write() = Some(editing);
}

pub fn store_close_form(store: &DashboardStore) {
    *store.form().write() = None;
}
