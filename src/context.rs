//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_client::{ClientConfig, Resync, Session, Task, TaskPayload, User};

use crate::api::{session_store, task_board};
use crate::store::{store_apply_resync, store_close_form, store_open_form, DashboardStore};

/// The one place pages read and end the session
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session - read
    pub session: ReadSignal<Option<Session>>,
    /// Current session - write
    set_session: WriteSignal<Option<Session>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (session, set_session) = signal(session_store().read());
        Self { session, set_session }
    }

    /// Adopt a session the login flow just persisted
    pub fn init(&self, session: Session) {
        self.set_session.set(Some(session));
    }

    /// Re-read storage; `None` means the page must redirect to login
    pub fn require(&self) -> Option<Session> {
        let current = session_store().read();
        self.set_session.set(current.clone());
        current
    }

    pub fn user(&self) -> Option<User> {
        self.session.get().and_then(|s| s.user)
    }

    pub fn clear(&self) {
        session_store().clear();
        self.set_session.set(None);
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_config() -> ClientConfig {
    expect_context::<ClientConfig>()
}

/// Dashboard actions shared by the task card, form and page
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    config: StoredValue<ClientConfig>,
    /// Raised when the backend rejects the session
    set_expired: WriteSignal<bool>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, config: ClientConfig, set_expired: WriteSignal<bool>) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            set_expired,
        }
    }

    fn apply(&self, resync: Resync) {
        let expired = resync.session_expired;
        store_apply_resync(&self.store, resync);
        if expired {
            self.set_expired.set(true);
        }
    }

    /// Refetch tasks and stats from the backend
    pub fn reload(&self) {
        let ctx = *self;
        let board = task_board(&self.config.get_value());
        spawn_local(async move {
            ctx.apply(board.resync().await);
        });
    }

    /// Create or update; closes the form on success. Returns false on failure.
    pub async fn save(&self, editing: Option<u32>, payload: TaskPayload) -> bool {
        let board = task_board(&self.config.get_value());
        match board.save_task(editing, &payload).await {
            Ok(resync) => {
                self.apply(resync);
                store_close_form(&self.store);
                true
            }
            Err(_) => false,
        }
    }

    pub fn delete(&self, id: u32) {
        let ctx = *self;
        let board = task_board(&self.config.get_value());
        spawn_local(async move {
            if let Ok(resync) = board.delete_task(id).await {
                ctx.apply(resync);
            }
        });
    }

    pub fn mark_completed(&self, id: u32) {
        let ctx = *self;
        let board = task_board(&self.config.get_value());
        spawn_local(async move {
            if let Ok(resync) = board.mark_completed(id).await {
                ctx.apply(resync);
            }
        });
    }

    pub fn open_form(&self, editing: Option<Task>) {
        store_open_form(&self.store, editing);
    }

    pub fn close_form(&self) {
        store_close_form(&self.store);
    }
}

pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}
