//! Transient notices shown in the status bar

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub created: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created) >= lifetime
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let notice = Notification::new("Saved", Severity::Info);
        let lifetime = Duration::from_millis(3000);

        assert!(!notice.is_expired(notice.created, lifetime));
        assert!(!notice.is_expired(notice.created + Duration::from_millis(2999), lifetime));
        assert!(notice.is_expired(notice.created + lifetime, lifetime));
    }
}
