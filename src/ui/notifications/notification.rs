// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (3s duration).
    #[default]
    Success,
    /// Informational message (3s duration).
    Info,
    /// Something external misbehaved but the app carries on (5s duration).
    Warning,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

/// A transient toast with a title and an optional description line.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    title: String,
    body: Option<String>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            title: title.into(),
            body: None,
            created_at: Instant::now(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Severity::Success, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Severity::Info, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Severity::Warning, title)
    }

    /// Adds the description line shown under the title.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Whether this notification has outlived its display window at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.severity.auto_dismiss_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let a = Notification::success("one");
        let b = Notification::success("two");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Info.color());
        assert_ne!(Severity::Info.color(), Severity::Warning.color());
        assert_ne!(Severity::Success.color(), Severity::Warning.color());
    }

    #[test]
    fn warnings_stay_longer_than_successes() {
        assert!(
            Severity::Warning.auto_dismiss_duration() > Severity::Success.auto_dismiss_duration()
        );
    }

    #[test]
    fn expiry_follows_severity_duration() {
        let n = Notification::info("soon gone");
        let now = Instant::now();
        assert!(!n.is_expired(now));
        assert!(n.is_expired(now + Duration::from_secs(4)));
    }

    #[test]
    fn builder_sets_body() {
        let n = Notification::success("Link copied").with_body("Now you can share it anywhere");
        assert_eq!(n.title(), "Link copied");
        assert_eq!(n.body(), Some("Now you can share it anywhere"));
    }
}
