//! Derived View State
//!
//! Labels, style classes, due-date predicates and percentages computed from
//! backend data. Everything here is pure; callers pass `now` and the time zone.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::models::{Priority, Stats, Status, Task};

/// Badge class for values without a mapping
pub const DEFAULT_BADGE_CLASS: &str = "text-gray-600 bg-gray-100";

/// Descriptions longer than this get a "Ver mais" toggle
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

impl Priority {
    /// Display label; unknown values are shown as received
    pub fn label(&self) -> &str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Média",
            Priority::High => "Alta",
            Priority::Urgent => "Urgente",
            Priority::Other(raw) => raw,
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Priority::Low => "text-green-600 bg-green-100",
            Priority::Medium => "text-yellow-600 bg-yellow-100",
            Priority::High => "text-orange-600 bg-orange-100",
            Priority::Urgent => "text-red-600 bg-red-100",
            Priority::Other(raw) => {
                log::warn!("[DERIVE] No color for priority {:?}", raw);
                DEFAULT_BADGE_CLASS
            }
        }
    }

    /// Dot/bar color in the priority distribution panel
    pub fn bar_class(&self) -> &'static str {
        match self {
            Priority::Low => "bg-green-500",
            Priority::Medium => "bg-yellow-500",
            Priority::High => "bg-orange-500",
            Priority::Urgent => "bg-red-500",
            Priority::Other(_) => "bg-gray-400",
        }
    }

    /// Option text in the task form select
    pub fn option_label(&self) -> String {
        let marker = match self {
            Priority::Low => "🟢",
            Priority::Medium => "🟡",
            Priority::High => "🟠",
            Priority::Urgent => "🔴",
            Priority::Other(_) => "⚪",
        };
        format!("{} {}", marker, self.label())
    }
}

impl Status {
    /// Display label; unknown values are shown as received
    pub fn label(&self) -> &str {
        match self {
            Status::Pending => "Pendente",
            Status::InProgress => "Em Progresso",
            Status::Completed => "Concluída",
            Status::Cancelled => "Cancelada",
            Status::Other(raw) => raw,
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Status::Pending => "text-gray-600 bg-gray-100",
            Status::InProgress => "text-blue-600 bg-blue-100",
            Status::Completed => "text-green-600 bg-green-100",
            Status::Cancelled => "text-red-600 bg-red-100",
            Status::Other(raw) => {
                log::warn!("[DERIVE] No color for status {:?}", raw);
                DEFAULT_BADGE_CLASS
            }
        }
    }

    pub fn option_label(&self) -> String {
        let marker = match self {
            Status::Pending => "⏳",
            Status::InProgress => "⚠️",
            Status::Completed => "✅",
            Status::Cancelled => "❌",
            Status::Other(_) => "•",
        };
        format!("{} {}", marker, self.label())
    }

    /// Fill class of the per-card progress bar
    pub fn progress_bar_class(&self) -> &'static str {
        match self {
            Status::Completed => "bg-green-500 w-full",
            Status::InProgress => "bg-blue-500 w-1/2",
            Status::Cancelled => "bg-red-500 w-full",
            _ => "bg-gray-400 w-1/4",
        }
    }
}

/// Overdue as flagged by the backend, never for completed tasks
pub fn is_overdue(task: &Task) -> bool {
    task.is_overdue && task.status != Status::Completed
}

/// Due within the next 24 hours (exclusive of now, inclusive of +24h)
pub fn is_near_due(task: &Task, now: DateTime<Utc>) -> bool {
    if task.status == Status::Completed {
        return false;
    }
    match task.due_date {
        Some(due) => {
            let remaining = due - now;
            remaining > Duration::zero() && remaining <= Duration::hours(24)
        }
        None => false,
    }
}

/// Left border accent of a task card
pub fn card_accent_class(task: &Task) -> &'static str {
    if is_overdue(task) {
        "border-l-red-500"
    } else if task.status == Status::Completed {
        "border-l-green-500"
    } else if task.priority == Priority::Urgent {
        "border-l-red-400"
    } else if task.priority == Priority::High {
        "border-l-orange-400"
    } else {
        "border-l-blue-400"
    }
}

/// Completed share of all tasks, rounded to a whole percent
pub fn progress_percentage(stats: &Stats) -> u32 {
    if stats.total == 0 {
        return 0;
    }
    ((stats.completed as f64 / stats.total as f64) * 100.0).round() as u32
}

/// Bar width for one priority bucket
pub fn priority_share(count: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

pub fn needs_expand_toggle(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_PREVIEW_CHARS
}

/// Avatar letter for the navigation bar
pub fn user_initial(username: &str) -> Option<String> {
    username.chars().next().map(|c| c.to_uppercase().collect())
}

/// `dd/mm/yyyy, HH:MM` in the given zone
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%d/%m/%Y, %H:%M").to_string()
}

/// Parse the value of an `<input type="datetime-local">` as wall time in `tz`
pub fn parse_datetime_local<Tz: TimeZone>(input: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let naive = NaiveDateTime::parse_from_str(input, DATETIME_LOCAL_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a timestamp as an `<input type="datetime-local">` value in `tz`
pub fn to_datetime_local<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format(DATETIME_LOCAL_FORMAT).to_string()
}

/// Wire format for `due_date`: `2025-01-31T18:00:00.000Z`
pub fn to_iso_string(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn make_task(status: Status, is_overdue: bool, due_date: Option<DateTime<Utc>>) -> Task {
        Task {
            id: 1,
            title: "Task".to_string(),
            description: None,
            priority: Priority::Medium,
            status,
            due_date,
            created_at: Utc::now(),
            updated_at: None,
            completed_at: None,
            is_overdue,
        }
    }

    #[test]
    fn test_completed_is_never_overdue() {
        let task = make_task(Status::Completed, true, None);
        assert!(!is_overdue(&task));

        let task = make_task(Status::Pending, true, None);
        assert!(is_overdue(&task));

        let task = make_task(Status::InProgress, false, None);
        assert!(!is_overdue(&task));
    }

    #[test]
    fn test_near_due_window() {
        let now = Utc::now();

        let past = make_task(Status::Pending, false, Some(now - Duration::seconds(1)));
        assert!(!is_near_due(&past, now));

        let soon = make_task(Status::Pending, false, Some(now + Duration::hours(23) + Duration::minutes(59)));
        assert!(is_near_due(&soon, now));

        let edge = make_task(Status::Pending, false, Some(now + Duration::hours(24)));
        assert!(is_near_due(&edge, now));

        let later = make_task(Status::Pending, false, Some(now + Duration::hours(24) + Duration::seconds(1)));
        assert!(!is_near_due(&later, now));

        let at_now = make_task(Status::Pending, false, Some(now));
        assert!(!is_near_due(&at_now, now));

        let done = make_task(Status::Completed, false, Some(now + Duration::hours(1)));
        assert!(!is_near_due(&done, now));

        let no_due = make_task(Status::Pending, false, None);
        assert!(!is_near_due(&no_due, now));
    }

    #[test]
    fn test_labels_pass_unknown_through() {
        assert_eq!(Priority::Urgent.label(), "Urgente");
        assert_eq!(Status::InProgress.label(), "Em Progresso");
        assert_eq!(Priority::Other("critical".into()).label(), "critical");
        assert_eq!(Status::Other("archived".into()).label(), "archived");
    }

    #[test]
    fn test_color_fallback() {
        assert_eq!(Priority::High.color_class(), "text-orange-600 bg-orange-100");
        assert_eq!(Status::Cancelled.color_class(), "text-red-600 bg-red-100");
        assert_eq!(Priority::Other("x".into()).color_class(), DEFAULT_BADGE_CLASS);
        assert_eq!(Status::Other("x".into()).color_class(), DEFAULT_BADGE_CLASS);
    }

    #[test]
    fn test_card_accent_precedence() {
        let mut task = make_task(Status::Pending, true, None);
        task.priority = Priority::Urgent;
        assert_eq!(card_accent_class(&task), "border-l-red-500");

        task.is_overdue = false;
        assert_eq!(card_accent_class(&task), "border-l-red-400");

        task.status = Status::Completed;
        assert_eq!(card_accent_class(&task), "border-l-green-500");

        let low = make_task(Status::Pending, false, None);
        assert_eq!(card_accent_class(&low), "border-l-blue-400");
    }

    #[test]
    fn test_percentages() {
        let empty = Stats::default();
        assert_eq!(progress_percentage(&empty), 0);
        assert_eq!(priority_share(3, 0), 0.0);

        let stats = Stats { total: 3, completed: 2, ..Default::default() };
        assert_eq!(progress_percentage(&stats), 67);
        assert_eq!(priority_share(1, 4), 25.0);
    }

    #[test]
    fn test_datetime_local_conversions() {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let parsed = parse_datetime_local("2025-06-10T09:30", &tz).unwrap();
        assert_eq!(to_iso_string(&parsed), "2025-06-10T12:30:00.000Z");
        assert_eq!(to_datetime_local(&parsed, &tz), "2025-06-10T09:30");
        assert_eq!(format_timestamp(&parsed, &tz), "10/06/2025, 09:30");

        assert!(parse_datetime_local("", &tz).is_none());
        assert!(parse_datetime_local("tomorrow", &tz).is_none());
    }

    #[test]
    fn test_small_helpers() {
        assert_eq!(user_initial("alice").as_deref(), Some("A"));
        assert_eq!(user_initial(""), None);
        assert!(!needs_expand_toggle(&"a".repeat(100)));
        assert!(needs_expand_toggle(&"a".repeat(101)));
    }
}
