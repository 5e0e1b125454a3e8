//! Per-user session state.
//!
//! Everything here is in-memory and lives as long as the process. The
//! catalog is never touched; sessions only hold route ids and toggles.

mod favorites;
mod history;
mod notifications;
mod settings;
mod toggles;

use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::detail::DetailPanel;
use crate::domain::RouteId;
use crate::help::Faq;

pub use favorites::Favorites;
pub use history::{TravelHistory, Trip, TripStatus, TripSummary, date_label, travel_time_label};
pub use notifications::{Inbox, Notification, NotificationKind, NotificationPrefs, NotificationTopic};
pub use settings::{AppSettings, Setting};
pub use toggles::{ToggleKey, ToggleSet};

/// State owned by one user session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub detail: DetailPanel,
    pub favorites: Favorites,
    pub history: TravelHistory,
    pub notification_prefs: NotificationPrefs,
    pub inbox: Inbox,
    pub settings: AppSettings,
    /// Which help answer is open.
    pub faq: Faq,
}

impl Session {
    /// An empty session with default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session seeded with sample favorites, trips and notifications.
    ///
    /// Favorite ids missing from `catalog` are skipped.
    pub fn demo(catalog: &Catalog, today: NaiveDate) -> Self {
        let mut favorites = Favorites::new();
        let seeded = ["main-campus-loop", "legon-accra-central"]
            .into_iter()
            .filter_map(|id| RouteId::parse(id).ok())
            .filter(|id| catalog.route(id).is_some());
        for id in seeded {
            favorites.add(id);
        }

        Self {
            detail: DetailPanel::new(),
            favorites,
            history: TravelHistory::demo(today),
            notification_prefs: NotificationPrefs::new(),
            inbox: Inbox::demo(),
            settings: AppSettings::new(),
            faq: Faq::new(),
        }
    }
}
