//! Client Models
//!
//! Data structures matching the backend REST payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority as sent by the backend
///
/// Unknown wire values are kept in `Other` so a newer backend never breaks
/// deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
    Other(String),
}

impl Priority {
    /// Known priorities, lowest first
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
            Priority::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            "urgent" => Priority::Urgent,
            other => Priority::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Other(_))
    }
}

impl From<String> for Priority {
    fn from(s: String) -> Self {
        Priority::parse(&s)
    }
}

impl From<Priority> for String {
    fn from(p: Priority) -> Self {
        match p {
            Priority::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Task lifecycle status as sent by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Other(String),
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Pending, Status::InProgress, Status::Completed, Status::Cancelled];

    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
            Status::Other(raw) => raw,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "pending" => Status::Pending,
            "in_progress" => Status::InProgress,
            "completed" => Status::Completed,
            "cancelled" => Status::Cancelled,
            other => Status::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Status::Other(_))
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        Status::parse(&s)
    }
}

impl From<Status> for String {
    fn from(s: Status) -> Self {
        match s {
            Status::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// Task data structure (matches backend)
///
/// Dashboard cards are keyed by the whole value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Computed by the backend, never derived locally
    #[serde(default)]
    pub is_overdue: bool,
}

/// Per-priority task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriorityCounts {
    #[serde(default)]
    pub urgent: u32,
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
}

impl PriorityCounts {
    pub fn get(&self, priority: &Priority) -> u32 {
        match priority {
            Priority::Urgent => self.urgent,
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
            Priority::Other(_) => 0,
        }
    }
}

/// Aggregate statistics from `/api/task-stats/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub pending: u32,
    #[serde(default)]
    pub in_progress: u32,
    #[serde(default)]
    pub cancelled: u32,
    #[serde(default)]
    pub overdue: u32,
    #[serde(default)]
    pub by_priority: PriorityCounts,
}

/// Profile persisted alongside the tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// Authenticated session as read back from storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user: Option<User>,
}

/// Token pair returned by `/api/login/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for task create (POST) and update (PUT)
///
/// `None` fields are left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TaskPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// ISO-8601, UTC with millisecond precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_task_identity_covers_server_flags() {
        let json = r#"{"id":3,"title":"Pay rent","created_at":"2025-02-01T08:00:00Z"}"#;
        let fresh: Task = serde_json::from_str(json).unwrap();
        let mut flagged = fresh.clone();
        flagged.is_overdue = true;
        let mut moved = fresh.clone();
        moved.due_date = Some("2025-02-10T08:00:00Z".parse().unwrap());

        assert_ne!(fresh, flagged);
        let keys: HashSet<Task> = [fresh.clone(), flagged, moved, fresh].into_iter().collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_task_deserialize_backend_shape() {
        let json = r#"{
            "id": 7,
            "title": "Write report",
            "description": null,
            "priority": "urgent",
            "status": "in_progress",
            "due_date": "2025-03-01T12:00:00Z",
            "created_at": "2025-02-01T08:30:00.123456Z",
            "updated_at": "2025-02-02T08:30:00Z",
            "completed_at": null,
            "is_overdue": true
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.status, Status::InProgress);
        assert!(task.description.is_none());
        assert!(task.due_date.is_some());
        assert!(task.is_overdue);
    }

    #[test]
    fn test_unknown_enum_values_survive() {
        let p: Priority = serde_json::from_str(r#""critical""#).unwrap();
        assert_eq!(p, Priority::Other("critical".to_string()));
        assert!(!p.is_known());
        assert_eq!(serde_json::to_string(&p).unwrap(), r#""critical""#);

        let s: Status = serde_json::from_str(r#""in_progress""#).unwrap();
        assert_eq!(s, Status::InProgress);
    }

    #[test]
    fn test_payload_skips_empty_fields() {
        let payload = TaskPayload {
            title: "Only title".to_string(),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"title":"Only title"}"#);
    }

    #[test]
    fn test_stats_tolerates_missing_counts() {
        let stats: Stats = serde_json::from_str(r#"{"total": 3, "completed": 1, "by_priority": {"high": 2}}"#).unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.by_priority.get(&Priority::High), 2);
        assert_eq!(stats.by_priority.get(&Priority::Low), 0);
    }
}
