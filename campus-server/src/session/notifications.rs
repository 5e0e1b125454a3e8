//! Notification preferences and the recent-notifications inbox.

use crate::theme::palette;

use super::toggles::{ToggleKey, ToggleSet};

/// Kinds of notification a user can opt in to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationTopic {
    RouteUpdates,
    FareChanges,
    NewRoutes,
    MaintenanceAlerts,
    Promotions,
    WeeklyReport,
}

impl ToggleKey for NotificationTopic {
    const ALL: &'static [Self] = &[
        NotificationTopic::RouteUpdates,
        NotificationTopic::FareChanges,
        NotificationTopic::NewRoutes,
        NotificationTopic::MaintenanceAlerts,
        NotificationTopic::Promotions,
        NotificationTopic::WeeklyReport,
    ];

    fn slug(&self) -> &'static str {
        match self {
            NotificationTopic::RouteUpdates => "route-updates",
            NotificationTopic::FareChanges => "fare-changes",
            NotificationTopic::NewRoutes => "new-routes",
            NotificationTopic::MaintenanceAlerts => "maintenance-alerts",
            NotificationTopic::Promotions => "promotions",
            NotificationTopic::WeeklyReport => "weekly-report",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            NotificationTopic::RouteUpdates => "Route Updates",
            NotificationTopic::FareChanges => "Fare Changes",
            NotificationTopic::NewRoutes => "New Routes",
            NotificationTopic::MaintenanceAlerts => "Maintenance Alerts",
            NotificationTopic::Promotions => "Promotions & Offers",
            NotificationTopic::WeeklyReport => "Weekly Report",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            NotificationTopic::RouteUpdates => "Get notified about route delays and changes",
            NotificationTopic::FareChanges => "Alerts when transport fares are updated",
            NotificationTopic::NewRoutes => "Be the first to know about new routes",
            NotificationTopic::MaintenanceAlerts => "Service interruptions and maintenance notices",
            NotificationTopic::Promotions => "Special deals and discount notifications",
            NotificationTopic::WeeklyReport => "Summary of your travel activity",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            NotificationTopic::RouteUpdates => "bus.fill",
            NotificationTopic::FareChanges => "creditcard.fill",
            NotificationTopic::NewRoutes => "plus.circle.fill",
            NotificationTopic::MaintenanceAlerts => "wrench.fill",
            NotificationTopic::Promotions => "tag.fill",
            NotificationTopic::WeeklyReport => "chart.bar.fill",
        }
    }

    fn default_value(&self) -> bool {
        !matches!(
            self,
            NotificationTopic::NewRoutes | NotificationTopic::Promotions
        )
    }
}

pub type NotificationPrefs = ToggleSet<NotificationTopic>;

/// What a received notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Alert,
    Info,
    Report,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Alert => "exclamationmark.triangle.fill",
            NotificationKind::Info => "info.circle.fill",
            NotificationKind::Report => "chart.bar.fill",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Alert => palette::ACCENT,
            NotificationKind::Info => palette::PRIMARY,
            NotificationKind::Report => palette::SECONDARY,
        }
    }
}

/// A notification shown in the inbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Relative age, e.g. "2 hours ago".
    pub age: String,
    pub kind: NotificationKind,
    pub read: bool,
}

/// Recent notifications, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inbox {
    items: Vec<Notification>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample notifications.
    pub fn demo() -> Self {
        let item = |id, title: &str, message: &str, age: &str, kind, read| Notification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            age: age.to_string(),
            kind,
            read,
        };

        Self {
            items: vec![
                item(
                    1,
                    "Route Delay Alert",
                    "Legon - Madina route is experiencing 10-minute delays",
                    "2 hours ago",
                    NotificationKind::Alert,
                    false,
                ),
                item(
                    2,
                    "New Route Available",
                    "Hostels Express now runs until 11:00 PM",
                    "1 day ago",
                    NotificationKind::Info,
                    true,
                ),
                item(
                    3,
                    "Weekly Travel Report",
                    "You saved ₵12.50 this week using optimal routes",
                    "3 days ago",
                    NotificationKind::Report,
                    true,
                ),
            ],
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Mark everything read. Returns how many changed.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for n in self.items.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        changed
    }
}
