//! Form Validation
//!
//! Pure checks run before any network call. Errors are returned as a
//! field -> message map; an empty map means the form may be submitted.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};

use crate::derive::{parse_datetime_local, to_datetime_local, to_iso_string};
use crate::models::{Priority, Status, Task, TaskPayload};

pub const TITLE_MAX_CHARS: usize = 200;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

pub const REQUIRED_MESSAGE: &str = "Este campo é obrigatório";
pub const FILL_ALL_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos para continuar.";
pub const LOGIN_FAILED_MESSAGE: &str = "Credenciais inválidas. Verifique seu usuário e senha e tente novamente.";
pub const REGISTER_FAILED_MESSAGE: &str = "Erro no cadastro. Tente novamente.";

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    Title,
    Description,
    DueDate,
}

/// Per-field validation messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors(BTreeMap<Field, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error of a field the user just edited
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

fn require(errors: &mut FormErrors, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field, REQUIRED_MESSAGE);
    }
}

pub fn validate_login(form: &LoginForm) -> FormErrors {
    let mut errors = FormErrors::new();
    require(&mut errors, Field::Username, &form.username);
    require(&mut errors, Field::Password, &form.password);
    errors
}

pub fn validate_register(form: &RegisterForm) -> FormErrors {
    let mut errors = FormErrors::new();
    require(&mut errors, Field::Username, &form.username);
    require(&mut errors, Field::Email, &form.email);
    require(&mut errors, Field::Password, &form.password);
    errors
}

/// Raw state of the task form inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFormFields {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
    /// `<input type="datetime-local">` value, empty when unset
    pub due_date: String,
}

impl TaskFormFields {
    /// Prefill from an existing task for editing
    pub fn from_task<Tz: TimeZone>(task: &Task, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority.clone(),
            status: task.status.clone(),
            due_date: task.due_date.map(|d| to_datetime_local(&d, tz)).unwrap_or_default(),
        }
    }

    /// Request body with empty optional fields removed
    ///
    /// Status is only sent when editing; new tasks take the backend default.
    pub fn to_payload<Tz: TimeZone>(&self, editing: bool, tz: &Tz) -> TaskPayload {
        TaskPayload {
            title: self.title.clone(),
            description: Some(self.description.clone()).filter(|d| !d.is_empty()),
            priority: Some(self.priority.clone()),
            status: editing.then(|| self.status.clone()),
            due_date: parse_datetime_local(&self.due_date, tz).map(|d| to_iso_string(&d)),
        }
    }
}

/// Validate the task form against the current instant
pub fn validate_task_form<Tz: TimeZone>(fields: &TaskFormFields, now: DateTime<Utc>, tz: &Tz) -> FormErrors {
    let mut errors = FormErrors::new();

    if fields.title.trim().is_empty() {
        errors.insert(Field::Title, "Título é obrigatório");
    } else if fields.title.chars().count() > TITLE_MAX_CHARS {
        errors.insert(Field::Title, "Título deve ter no máximo 200 caracteres");
    }

    if fields.description.chars().count() > DESCRIPTION_MAX_CHARS {
        errors.insert(Field::Description, "Descrição deve ter no máximo 1000 caracteres");
    }

    if !fields.due_date.trim().is_empty() {
        match parse_datetime_local(&fields.due_date, tz) {
            Some(due) if due > now => {}
            Some(_) => errors.insert(Field::DueDate, "Data de vencimento deve ser no futuro"),
            None => errors.insert(Field::DueDate, "Data de vencimento inválida"),
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn titled(title: &str) -> TaskFormFields {
        TaskFormFields {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_title_length_boundary() {
        let now = Utc::now();
        assert!(validate_task_form(&titled(&"a".repeat(200)), now, &utc()).is_empty());

        let errors = validate_task_form(&titled(&"a".repeat(201)), now, &utc());
        assert!(errors.has(Field::Title));
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn test_title_required() {
        let errors = validate_task_form(&titled("   "), Utc::now(), &utc());
        assert_eq!(errors.get(Field::Title), Some("Título é obrigatório"));
    }

    #[test]
    fn test_description_limit() {
        let mut fields = titled("ok");
        fields.description = "d".repeat(1000);
        assert!(validate_task_form(&fields, Utc::now(), &utc()).is_empty());

        fields.description.push('d');
        assert!(validate_task_form(&fields, Utc::now(), &utc()).has(Field::Description));
    }

    #[test]
    fn test_due_date_must_be_future() {
        let tz = utc();
        let now = Utc::now();
        let mut fields = titled("ok");

        fields.due_date = to_datetime_local(&(now + Duration::hours(2)), &tz);
        assert!(validate_task_form(&fields, now, &tz).is_empty());

        fields.due_date = to_datetime_local(&(now - Duration::hours(2)), &tz);
        assert!(validate_task_form(&fields, now, &tz).has(Field::DueDate));

        fields.due_date = "not a date".to_string();
        assert!(validate_task_form(&fields, now, &tz).has(Field::DueDate));
    }

    #[test]
    fn test_login_marks_only_missing_fields() {
        let form = LoginForm {
            username: String::new(),
            password: "secret".to_string(),
        };
        let errors = validate_login(&form);
        assert!(errors.has(Field::Username));
        assert!(!errors.has(Field::Password));
    }

    #[test]
    fn test_register_whitespace_is_missing() {
        let form = RegisterForm {
            username: "alice".to_string(),
            email: "  ".to_string(),
            password: String::new(),
        };
        let errors = validate_register(&form);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, vec![Field::Email, Field::Password]);
    }

    #[test]
    fn test_clear_field_error() {
        let mut errors = validate_login(&LoginForm::default());
        errors.clear(Field::Username);
        assert!(!errors.has(Field::Username));
        assert!(errors.has(Field::Password));
    }

    #[test]
    fn test_payload_for_title_only_create() {
        let payload = titled("Buy milk").to_payload(false, &utc());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Buy milk", "priority": "medium" }));
    }

    #[test]
    fn test_payload_for_edit_includes_status_and_iso_due() {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let fields = TaskFormFields {
            title: "Ship".to_string(),
            description: "Release notes".to_string(),
            priority: Priority::Urgent,
            status: Status::InProgress,
            due_date: "2030-01-15T10:00".to_string(),
        };
        let payload = fields.to_payload(true, &tz);
        assert_eq!(payload.status, Some(Status::InProgress));
        assert_eq!(payload.description.as_deref(), Some("Release notes"));
        assert_eq!(payload.due_date.as_deref(), Some("2030-01-15T13:00:00.000Z"));
    }
}
