//! Page Flows
//!
//! What happens when a page submits: validate, call the backend once, and
//! report an outcome the page renders. Pages own timers and navigation; the
//! flows own everything else.

use futures::join;

use crate::api::{ApiClient, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::{LoginRequest, RegisterRequest, Session, Stats, Task, TaskPayload, User};
use crate::routes::Route;
use crate::session::{KeyValueStore, SessionStore};
use crate::validation::{
    validate_login, validate_register, FormErrors, LoginForm, RegisterForm, FILL_ALL_FIELDS_MESSAGE,
    LOGIN_FAILED_MESSAGE, REGISTER_FAILED_MESSAGE,
};

// ========================
// Authentication
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Required fields missing; nothing was sent
    Invalid(FormErrors),
    /// Backend refused or was unreachable; the cause is not shown to the user
    Rejected(ApiError),
    Authenticated { session: Session, redirect: Route },
}

impl LoginOutcome {
    /// Error popup text, `None` on success
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            LoginOutcome::Invalid(_) => Some(FILL_ALL_FIELDS_MESSAGE),
            LoginOutcome::Rejected(_) => Some(LOGIN_FAILED_MESSAGE),
            LoginOutcome::Authenticated { .. } => None,
        }
    }
}

pub async fn login<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T>,
    sessions: &SessionStore<S>,
    form: &LoginForm,
) -> LoginOutcome {
    let errors = validate_login(form);
    if !errors.is_empty() {
        return LoginOutcome::Invalid(errors);
    }

    let request = LoginRequest {
        username: &form.username,
        password: &form.password,
    };
    match api.login(&request).await {
        Ok(tokens) => {
            let user = User {
                username: form.username.clone(),
            };
            log::info!("[LOGIN] Authenticated as {}", user.username);
            LoginOutcome::Authenticated {
                session: sessions.init(&tokens, &user),
                redirect: Route::Tasks,
            }
        }
        Err(e) => {
            log::error!("[LOGIN] Login failed: {}", e);
            LoginOutcome::Rejected(e)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    Invalid(FormErrors),
    Failed(ApiError),
    Registered { redirect: Route },
}

impl RegisterOutcome {
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            RegisterOutcome::Invalid(_) => Some(FILL_ALL_FIELDS_MESSAGE),
            RegisterOutcome::Failed(_) => Some(REGISTER_FAILED_MESSAGE),
            RegisterOutcome::Registered { .. } => None,
        }
    }
}

pub async fn register<T: Transport>(api: &ApiClient<T>, form: &RegisterForm) -> RegisterOutcome {
    let errors = validate_register(form);
    if !errors.is_empty() {
        return RegisterOutcome::Invalid(errors);
    }

    let request = RegisterRequest {
        username: &form.username,
        email: &form.email,
        password: &form.password,
    };
    match api.register(&request).await {
        Ok(()) => RegisterOutcome::Registered { redirect: Route::Login },
        Err(e) => {
            log::error!("[REGISTER] Registration failed: {}", e);
            RegisterOutcome::Failed(e)
        }
    }
}

// ========================
// Dashboard
// ========================

/// Fresh server state after a (re)load
///
/// `None` means that fetch failed and the previous value should stay.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resync {
    pub tasks: Option<Vec<Task>>,
    pub stats: Option<Stats>,
    /// The task fetch got a 401; the session has been cleared
    pub session_expired: bool,
}

/// Dashboard orchestration: every mutation is followed by a full refetch of
/// tasks and stats.
#[derive(Debug, Clone)]
pub struct TaskBoard<T, S> {
    api: ApiClient<T>,
    sessions: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> TaskBoard<T, S> {
    pub fn new(api: ApiClient<T>, sessions: SessionStore<S>) -> Self {
        Self { api, sessions }
    }

    pub fn session(&self) -> Option<Session> {
        self.sessions.read()
    }

    pub fn logout(&self) {
        self.sessions.clear();
    }

    fn token(&self) -> ApiResult<String> {
        self.sessions.access_token().ok_or(ApiError::Unauthorized)
    }

    /// Task list; a 401 ends the session
    pub async fn fetch_tasks(&self) -> ApiResult<Vec<Task>> {
        let result = match self.token() {
            Ok(token) => self.api.list_tasks(&token).await,
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            log::error!("[DASHBOARD] Failed to fetch tasks: {}", e);
            if e.is_unauthorized() {
                self.sessions.clear();
            }
        }
        result
    }

    pub async fn fetch_stats(&self) -> ApiResult<Stats> {
        let token = self.token()?;
        self.api
            .task_stats(&token)
            .await
            .inspect_err(|e| log::error!("[DASHBOARD] Failed to fetch stats: {}", e))
    }

    /// Fetch tasks and stats side by side; one failing does not affect the other
    pub async fn resync(&self) -> Resync {
        let (tasks, stats) = join!(self.fetch_tasks(), self.fetch_stats());
        let session_expired = matches!(&tasks, Err(e) if e.is_unauthorized());
        Resync {
            tasks: tasks.ok(),
            stats: stats.ok(),
            session_expired,
        }
    }

    /// Create (`editing == None`) or update a task, then resync
    pub async fn save_task(&self, editing: Option<u32>, payload: &TaskPayload) -> ApiResult<Resync> {
        let token = self.token()?;
        let saved = match editing {
            Some(id) => self.api.update_task(&token, id, payload).await,
            None => self.api.create_task(&token, payload).await,
        };
        saved.inspect_err(|e| log::error!("[DASHBOARD] Failed to save task: {}", e))?;
        Ok(self.resync().await)
    }

    pub async fn delete_task(&self, id: u32) -> ApiResult<Resync> {
        let token = self.token()?;
        self.api
            .delete_task(&token, id)
            .await
            .inspect_err(|e| log::error!("[DASHBOARD] Failed to delete task {}: {}", id, e))?;
        Ok(self.resync().await)
    }

    pub async fn mark_completed(&self, id: u32) -> ApiResult<Resync> {
        let token = self.token()?;
        self.api
            .mark_completed(&token, id)
            .await
            .inspect_err(|e| log::error!("[DASHBOARD] Failed to complete task {}: {}", id, e))?;
        Ok(self.resync().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::models::TokenPair;
    use crate::testing::{task_json, MemoryStore, MockTransport, STATS_JSON};
    use crate::validation::{Field, TaskFormFields};
    use chrono::Utc;

    fn api(mock: &MockTransport) -> ApiClient<MockTransport> {
        ApiClient::new(mock.clone(), "http://backend.test")
    }

    fn logged_in_board(mock: &MockTransport) -> (TaskBoard<MockTransport, MemoryStore>, SessionStore<MemoryStore>) {
        let sessions = SessionStore::new(MemoryStore::default());
        sessions.init(
            &TokenPair { access: "acc".into(), refresh: "ref".into() },
            &User { username: "alice".into() },
        );
        (TaskBoard::new(api(mock), sessions.clone()), sessions)
    }

    #[tokio::test]
    async fn test_login_empty_username_sends_nothing() {
        let mock = MockTransport::new();
        let sessions = SessionStore::new(MemoryStore::default());
        let form = LoginForm { username: String::new(), password: "secret".into() };

        match login(&api(&mock), &sessions, &form).await {
            LoginOutcome::Invalid(errors) => {
                assert!(errors.has(Field::Username));
                assert!(!errors.has(Field::Password));
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_stores_tokens_and_profile() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/login/", 200, r#"{"access":"A1","refresh":"R1"}"#);
        let sessions = SessionStore::new(MemoryStore::default());
        let form = LoginForm { username: "alice".into(), password: "secret".into() };

        let outcome = login(&api(&mock), &sessions, &form).await;
        let LoginOutcome::Authenticated { session, redirect } = outcome else {
            panic!("expected Authenticated");
        };
        assert_eq!(redirect, Route::Tasks);
        assert_eq!(session.access_token, "A1");
        assert_eq!(sessions.read().unwrap().user.unwrap().username, "alice");

        let body: serde_json::Value = serde_json::from_str(mock.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "username": "alice", "password": "secret" }));
    }

    #[tokio::test]
    async fn test_login_rejection_keeps_no_session() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/login/", 400, r#"{"error":"Invalid credentials"}"#);
        let sessions = SessionStore::new(MemoryStore::default());
        let form = LoginForm { username: "alice".into(), password: "wrong".into() };

        let outcome = login(&api(&mock), &sessions, &form).await;
        assert!(matches!(outcome, LoginOutcome::Rejected(_)));
        assert_eq!(
            outcome.error_message(),
            Some("Credenciais inválidas. Verifique seu usuário e senha e tente novamente.")
        );
        assert!(!sessions.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_success_redirects_to_login() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/register/", 201, r#"{"user_id":1,"username":"alice","email":"a@x.com"}"#);
        let form = RegisterForm {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "secret".into(),
        };

        let outcome = register(&api(&mock), &form).await;
        let RegisterOutcome::Registered { redirect } = outcome else {
            panic!("expected Registered");
        };
        assert_eq!(redirect.path(), "/login");

        let body: serde_json::Value = serde_json::from_str(mock.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({ "username": "alice", "email": "a@x.com", "password": "secret" }));
    }

    #[tokio::test]
    async fn test_register_failure_is_generic() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/register/", 400, r#"{"username":["taken"]}"#);
        let form = RegisterForm {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "secret".into(),
        };
        let outcome = register(&api(&mock), &form).await;
        assert!(matches!(outcome, RegisterOutcome::Failed(_)));
        assert_eq!(outcome.error_message(), Some("Erro no cadastro. Tente novamente."));
    }

    #[tokio::test]
    async fn test_resync_fetches_both() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/tasks/", 200, &format!("[{},{}]", task_json(1, "pending", "low"), task_json(2, "completed", "high")));
        mock.respond(Method::Get, "/api/task-stats/", 200, STATS_JSON);
        let (board, _) = logged_in_board(&mock);

        let resync = board.resync().await;
        assert_eq!(resync.tasks.map(|t| t.len()), Some(2));
        assert_eq!(resync.stats.map(|s| s.total), Some(2));
        assert!(!resync.session_expired);
    }

    #[tokio::test]
    async fn test_stats_failure_does_not_hide_tasks() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/tasks/", 200, "[]");
        mock.respond(Method::Get, "/api/task-stats/", 500, "oops");
        let (board, sessions) = logged_in_board(&mock);

        let resync = board.resync().await;
        assert_eq!(resync.tasks, Some(vec![]));
        assert!(resync.stats.is_none());
        assert!(sessions.is_authenticated());
    }

    #[tokio::test]
    async fn test_unauthorized_task_fetch_ends_session() {
        let mock = MockTransport::new();
        mock.respond(Method::Get, "/api/tasks/", 401, r#"{"detail":"expired"}"#);
        mock.respond(Method::Get, "/api/task-stats/", 401, r#"{"detail":"expired"}"#);
        let (board, sessions) = logged_in_board(&mock);

        let resync = board.resync().await;
        assert!(resync.session_expired);
        assert!(resync.tasks.is_none());
        assert!(!sessions.is_authenticated());
    }

    #[tokio::test]
    async fn test_missing_session_counts_as_expired() {
        let mock = MockTransport::new();
        let board = TaskBoard::new(api(&mock), SessionStore::new(MemoryStore::default()));

        assert!(board.resync().await.session_expired);
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_title_only_strips_optional_fields() {
        let mock = MockTransport::new();
        mock.respond(Method::Post, "/api/tasks/", 201, &task_json(5, "pending", "medium"));
        mock.respond(Method::Get, "/api/tasks/", 200, &format!("[{}]", task_json(5, "pending", "medium")));
        mock.respond(Method::Get, "/api/task-stats/", 200, STATS_JSON);
        let (board, _) = logged_in_board(&mock);

        let fields = TaskFormFields { title: "Buy milk".into(), ..Default::default() };
        let payload = fields.to_payload(false, &Utc);
        board.save_task(None, &payload).await.unwrap();

        let create = mock.requests().into_iter().find(|r| r.method == Method::Post).unwrap();
        assert_eq!(create.bearer.as_deref(), Some("acc"));
        let body: serde_json::Value = serde_json::from_str(create.body.as_deref().unwrap()).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"title"));
        assert!(!keys.contains(&"description"));
        assert!(!keys.contains(&"due_date"));
        assert!(!keys.contains(&"status"));
    }

    #[tokio::test]
    async fn test_every_mutation_refetches_everything() {
        let mock = MockTransport::new();
        mock.respond(Method::Put, "/api/tasks/1/", 200, &task_json(1, "in_progress", "low"));
        mock.respond(Method::Delete, "/api/tasks/1/", 204, "");
        mock.respond(Method::Patch, "/api/tasks/2/mark_completed/", 200, &task_json(2, "completed", "low"));
        mock.respond(Method::Get, "/api/tasks/", 200, "[]");
        mock.respond(Method::Get, "/api/task-stats/", 200, STATS_JSON);
        let (board, _) = logged_in_board(&mock);

        let payload = TaskPayload { title: "Edited".into(), ..Default::default() };
        board.save_task(Some(1), &payload).await.unwrap();
        board.delete_task(1).await.unwrap();
        board.mark_completed(2).await.unwrap();

        assert_eq!(mock.count(Method::Get, "/api/tasks/"), 3);
        assert_eq!(mock.count(Method::Get, "/api/task-stats/"), 3);
    }

    #[tokio::test]
    async fn test_failed_mutation_skips_refetch() {
        let mock = MockTransport::new();
        mock.respond(Method::Delete, "/api/tasks/8/", 500, "boom");
        let (board, _) = logged_in_board(&mock);

        assert!(board.delete_task(8).await.is_err());
        assert_eq!(mock.count(Method::Get, "/api/tasks/"), 0);
    }
}
