// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use time::{Duration, OffsetDateTime};

pub const ENTRANCE: Duration = Duration::milliseconds(300);
pub const DISPLAY: Duration = Duration::milliseconds(3000);
pub const EXIT: Duration = Duration::milliseconds(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub raised_at: OffsetDateTime,
}

impl Notification {
    pub fn phase(&self, now: OffsetDateTime) -> Option<NotificationPhase> {
        let age = now - self.raised_at;
        if age < ENTRANCE {
            Some(NotificationPhase::Entering)
        } else if age < DISPLAY {
            Some(NotificationPhase::Visible)
        } else if age < DISPLAY + EXIT {
            Some(NotificationPhase::Leaving)
        } else {
            None
        }
    }
}

/// Stacked transient messages. Entries are pushed by `notify` and dropped by
/// `prune` once their exit window passed; the caller prunes every frame with
/// its own clock, so the center stays free of timers and threads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationCenter {
    entries: Vec<Notification>,
}

impl NotificationCenter {
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: OffsetDateTime,
    ) {
        self.entries.push(Notification {
            message: message.into(),
            severity,
            raised_at: now,
        });
    }

    pub fn prune(&mut self, now: OffsetDateTime) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.phase(now).is_some());
        before - self.entries.len()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::{DISPLAY, ENTRANCE, EXIT, NotificationCenter, NotificationPhase, Severity};
    use time::{Duration, OffsetDateTime};

    fn start() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH
    }

    #[test]
    fn notification_moves_through_all_phases() {
        let mut center = NotificationCenter::default();
        center.notify("sample data loaded", Severity::Success, start());
        let entry = &center.entries()[0];

        assert_eq!(entry.phase(start()), Some(NotificationPhase::Entering));
        assert_eq!(
            entry.phase(start() + ENTRANCE),
            Some(NotificationPhase::Visible),
        );
        assert_eq!(
            entry.phase(start() + DISPLAY),
            Some(NotificationPhase::Leaving),
        );
        assert_eq!(entry.phase(start() + DISPLAY + EXIT), None);
    }

    #[test]
    fn prune_removes_only_expired_entries() {
        let mut center = NotificationCenter::default();
        center.notify("first", Severity::Info, start());
        center.notify("second", Severity::Error, start() + Duration::seconds(2));

        let removed = center.prune(start() + DISPLAY + EXIT);
        assert_eq!(removed, 1);
        assert_eq!(center.entries().len(), 1);
        assert_eq!(center.entries()[0].message, "second");
    }

    #[test]
    fn repeated_notifications_do_not_accumulate_past_their_window() {
        let mut center = NotificationCenter::default();
        for index in 0..20 {
            center.notify(
                format!("tick {index}"),
                Severity::Info,
                start() + Duration::seconds(index),
            );
        }
        center.prune(start() + Duration::seconds(30));
        assert!(center.entries().is_empty());
    }

    #[test]
    fn concurrent_notifications_stack_without_dedup() {
        let mut center = NotificationCenter::default();
        center.notify("same", Severity::Info, start());
        center.notify("same", Severity::Info, start());
        assert_eq!(center.entries().len(), 2);
    }
}
