//! Askama templates for the web frontend.

use askama::Template;
use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::detail::RouteDetail;
use crate::domain::{Location, Route, RouteKind};
use crate::help::{ContactMethod, Faq, QuickAction};
use crate::search::SearchOutcome;
use crate::session::{
    Favorites, Inbox, Notification, Session, ToggleKey, ToggleSet, TravelHistory, Trip,
    TripSummary, date_label, travel_time_label,
};
use crate::theme::{category_color, palette};

/// Hint shown when a search finds nothing.
pub const NO_RESULTS_HINT: &str =
    "Try searching for routes like \"Main Campus\" or locations like \"Great Hall\"";

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page: search box, then either all routes by kind or search results.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub query: String,
    pub locations: Vec<LocationView>,
    pub sections: Vec<RouteSectionView>,
    pub no_results: bool,
    /// Browsing an empty catalog.
    pub no_routes: bool,
    pub hint: &'static str,
    /// The open detail sheet, if any.
    pub detail: Option<RouteDetail>,
}

impl IndexTemplate {
    /// Build the home page for a search outcome.
    pub fn from_outcome(
        query: &str,
        outcome: &SearchOutcome<'_>,
        favorites: &Favorites,
        detail: Option<RouteDetail>,
    ) -> Self {
        let cards = |routes: &[&Route]| -> Vec<RouteCardView> {
            routes
                .iter()
                .map(|r| RouteCardView::from_route(r, favorites))
                .collect()
        };

        let no_routes = matches!(outcome, SearchOutcome::Browse(buckets) if buckets.is_empty());
        let (locations, sections) = match outcome {
            SearchOutcome::Browse(buckets) => {
                let sections = RouteKind::ALL
                    .into_iter()
                    .map(|kind| RouteSectionView {
                        title: kind.section_title().to_string(),
                        routes: cards(buckets.get(kind)),
                    })
                    .collect();
                (Vec::new(), sections)
            }
            SearchOutcome::Matches(result) => {
                let locations = result
                    .locations
                    .iter()
                    .map(|l| LocationView::from_location(l))
                    .collect();
                let sections = if result.routes.is_empty() {
                    Vec::new()
                } else {
                    vec![RouteSectionView {
                        title: "Routes".to_string(),
                        routes: cards(&result.routes),
                    }]
                };
                (locations, sections)
            }
        };

        Self {
            query: query.to_string(),
            locations,
            sections,
            no_results: outcome.is_empty(),
            no_routes,
            hint: NO_RESULTS_HINT,
            detail,
        }
    }
}

/// Route detail sheet.
#[derive(Template)]
#[template(path = "route_detail.html")]
pub struct RouteDetailTemplate {
    pub detail: RouteDetail,
    pub is_favorite: bool,
}

/// Favorite routes.
#[derive(Template)]
#[template(path = "favorites.html")]
pub struct FavoritesTemplate {
    pub routes: Vec<RouteCardView>,
}

/// Travel history with monthly and all-time summaries.
#[derive(Template)]
#[template(path = "history.html")]
pub struct HistoryTemplate {
    pub month: SummaryView,
    pub all_time: SummaryView,
    pub trips: Vec<TripView>,
}

impl HistoryTemplate {
    /// Trips link to their route when the catalog still has it.
    pub fn new(history: &TravelHistory, catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            month: SummaryView::new(history.month_summary(today)),
            all_time: SummaryView::new(history.summary()),
            trips: history
                .trips()
                .iter()
                .map(|t| TripView::from_trip(t, catalog, today))
                .collect(),
        }
    }
}

/// Notification preferences and inbox.
#[derive(Template)]
#[template(path = "notifications.html")]
pub struct NotificationsTemplate {
    pub toggles: Vec<ToggleView>,
    /// Preferences switched on.
    pub enabled: usize,
    pub notifications: Vec<NotificationView>,
    pub unread: usize,
}

impl NotificationsTemplate {
    pub fn new<K: ToggleKey>(prefs: &ToggleSet<K>, inbox: &Inbox) -> Self {
        Self {
            toggles: ToggleView::collect(prefs),
            enabled: prefs.enabled_count(),
            notifications: inbox
                .items()
                .iter()
                .map(NotificationView::from_notification)
                .collect(),
            unread: inbox.unread_count(),
        }
    }
}

/// App settings.
#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub toggles: Vec<ToggleView>,
}

/// About page.
#[derive(Template)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub route_count: usize,
    pub location_count: usize,
    pub app: AppInfo,
    pub features: &'static [AboutItem],
    pub team: &'static [AboutItem],
    pub links: &'static [AboutLink],
}

impl AboutTemplate {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            route_count: catalog.routes().len(),
            location_count: catalog.locations().len(),
            app: APP_INFO,
            features: FEATURES,
            team: TEAM,
            links: ABOUT_LINKS,
        }
    }
}

/// Help & support: quick actions, contact options and the FAQ.
#[derive(Template)]
#[template(path = "help.html")]
pub struct HelpTemplate {
    pub actions: Vec<QuickActionView>,
    pub contacts: Vec<ContactView>,
    pub faqs: Vec<FaqView>,
}

impl HelpTemplate {
    pub fn new(faq: &Faq) -> Self {
        Self {
            actions: QuickAction::ALL
                .into_iter()
                .map(QuickActionView::from_action)
                .collect(),
            contacts: ContactMethod::ALL
                .into_iter()
                .map(ContactView::from_method)
                .collect(),
            faqs: faq
                .entries()
                .iter()
                .map(|e| FaqView {
                    id: e.id,
                    question: e.question,
                    answer: e.answer,
                    expanded: faq.is_expanded(e.id),
                })
                .collect(),
        }
    }
}

/// Profile hub linking the other screens.
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub user_name: &'static str,
    pub user_email: &'static str,
    pub routes_used: usize,
    pub total_spent: String,
    pub month_trips: usize,
    pub favorite_count: usize,
    pub unread: usize,
    pub links: &'static [ProfileLink],
}

impl ProfileTemplate {
    pub fn new(session: &Session, today: NaiveDate) -> Self {
        Self {
            user_name: "UG Student",
            user_email: "student@ug.edu.gh",
            routes_used: session.history.routes_used(),
            total_spent: session.history.summary().total_spent.to_string(),
            month_trips: session.history.month_summary(today).trip_count,
            favorite_count: session.favorites.len(),
            unread: session.inbox.unread_count(),
            links: PROFILE_LINKS,
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A titled list of route cards.
#[derive(Debug, Clone)]
pub struct RouteSectionView {
    pub title: String,
    pub routes: Vec<RouteCardView>,
}

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteCardView {
    pub id: String,
    pub name: String,
    pub kind_label: String,
    pub icon: String,
    pub color: String,
    pub fare_label: String,
    pub duration_label: String,
    pub frequency: String,
    /// "Origin → Terminus"
    pub endpoints: String,
    pub is_favorite: bool,
}

impl RouteCardView {
    pub fn from_route(route: &Route, favorites: &Favorites) -> Self {
        Self {
            id: route.id().to_string(),
            name: route.name().to_string(),
            kind_label: route.kind().label().to_string(),
            icon: route.kind().icon().to_string(),
            color: route.color().to_string(),
            fare_label: route.fare().to_string(),
            duration_label: format!("{} min", route.estimated_duration()),
            frequency: route.frequency().to_string(),
            endpoints: format!("{} → {}", route.origin().name, route.terminus().name),
            is_favorite: favorites.contains(route.id()),
        }
    }

    /// One-line summary, e.g. "Campus Shuttle • ₵1.00 • 30 min".
    pub fn details(&self) -> String {
        format!(
            "{} • {} • {}",
            self.kind_label, self.fare_label, self.duration_label
        )
    }
}

/// Location row view model.
#[derive(Debug, Clone)]
pub struct LocationView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub badge_color: String,
}

impl LocationView {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.clone(),
            category: location.category.to_string(),
            badge_color: category_color(location.category).to_string(),
        }
    }
}

/// Trip row view model.
#[derive(Debug, Clone)]
pub struct TripView {
    pub route_name: String,
    /// Link to the route, or empty when the catalog no longer has it.
    pub route_href: String,
    pub date_label: String,
    pub time_label: String,
    pub fare_label: String,
    pub duration_label: String,
    pub status_label: String,
    pub status_color: String,
}

impl TripView {
    pub fn from_trip(trip: &Trip, catalog: &Catalog, today: NaiveDate) -> Self {
        Self {
            route_name: trip.route_name.clone(),
            route_href: catalog
                .route_by_name(&trip.route_name)
                .map(|r| format!("/routes/{}", r.id()))
                .unwrap_or_default(),
            date_label: date_label(trip.date, today),
            time_label: trip.time_label(),
            fare_label: trip.fare.to_string(),
            duration_label: travel_time_label(trip.duration_mins),
            status_label: trip.status.label().to_string(),
            status_color: trip.status.color().to_string(),
        }
    }
}

/// A switch row on the notifications or settings page.
#[derive(Debug, Clone)]
pub struct ToggleView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub enabled: bool,
}

impl ToggleView {
    pub fn collect<K: ToggleKey>(set: &ToggleSet<K>) -> Vec<Self> {
        set.iter()
            .map(|(key, enabled)| ToggleView {
                slug: key.slug().to_string(),
                title: key.title().to_string(),
                description: key.description().to_string(),
                icon: key.icon().to_string(),
                enabled,
            })
            .collect()
    }
}

/// Inbox row view model.
#[derive(Debug, Clone)]
pub struct NotificationView {
    pub title: String,
    pub message: String,
    pub age: String,
    pub icon: String,
    pub color: String,
    pub read: bool,
}

impl NotificationView {
    pub fn from_notification(n: &Notification) -> Self {
        Self {
            title: n.title.clone(),
            message: n.message.clone(),
            age: n.age.clone(),
            icon: n.kind.icon().to_string(),
            color: n.kind.color().to_string(),
            read: n.read,
        }
    }
}

/// Trip totals as displayed.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub trips: usize,
    pub spent: String,
    pub travel_time: String,
}

impl SummaryView {
    pub fn new(summary: TripSummary) -> Self {
        Self {
            trips: summary.trip_count,
            spent: summary.total_spent.to_string(),
            travel_time: summary.travel_time_label(),
        }
    }
}

/// One FAQ row.
#[derive(Debug, Clone)]
pub struct FaqView {
    pub id: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
}

/// A way to contact support.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub title: &'static str,
    pub description: &'static str,
    pub value: &'static str,
    pub href: String,
    pub icon: &'static str,
    pub color: &'static str,
}

impl ContactView {
    pub fn from_method(method: ContactMethod) -> Self {
        Self {
            title: method.title(),
            description: method.description(),
            value: method.value(),
            href: method.href(),
            icon: method.icon(),
            color: method.color(),
        }
    }
}

/// A help-screen shortcut.
#[derive(Debug, Clone)]
pub struct QuickActionView {
    pub title: &'static str,
    pub description: &'static str,
    pub notice: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl QuickActionView {
    pub fn from_action(action: QuickAction) -> Self {
        Self {
            title: action.title(),
            description: action.description(),
            notice: action.notice(),
            icon: action.icon(),
            color: action.color(),
        }
    }
}

// ============================================================================
// Static page content
// ============================================================================

/// Version and ownership details for the about page.
#[derive(Debug, Clone, Copy)]
pub struct AppInfo {
    pub version: &'static str,
    pub build: &'static str,
    pub developer: &'static str,
    pub institution: &'static str,
}

pub const APP_INFO: AppInfo = AppInfo {
    version: env!("CARGO_PKG_VERSION"),
    build: "2024.01.15",
    developer: "UG Campus Navigator Team",
    institution: "University of Ghana",
};

/// A titled entry with an icon, used for features and team members.
#[derive(Debug, Clone, Copy)]
pub struct AboutItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[AboutItem] = &[
    AboutItem {
        title: "Route Information",
        description: "Stops, fares and running times for shuttle and trotro routes",
        icon: "clock.fill",
    },
    AboutItem {
        title: "Campus Search",
        description: "Find routes by name, stop or campus location",
        icon: "map.fill",
    },
    AboutItem {
        title: "Fare Calculator",
        description: "Know the cost before you travel",
        icon: "creditcard.fill",
    },
    AboutItem {
        title: "Offline Support",
        description: "Access basic route info without internet",
        icon: "wifi.slash",
    },
];

pub const TEAM: &[AboutItem] = &[
    AboutItem {
        title: "Development Team",
        description: "App Development & Design",
        icon: "laptopcomputer",
    },
    AboutItem {
        title: "Transport Office",
        description: "Route Data & Coordination",
        icon: "bus.fill",
    },
    AboutItem {
        title: "Student Union",
        description: "User Research & Testing",
        icon: "person.3.fill",
    },
];

/// An outbound link on the about page.
#[derive(Debug, Clone, Copy)]
pub struct AboutLink {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const ABOUT_LINKS: &[AboutLink] = &[
    AboutLink {
        title: "University of Ghana",
        url: "https://www.ug.edu.gh",
        icon: "globe",
    },
    AboutLink {
        title: "Privacy Policy",
        url: "https://www.ug.edu.gh/privacy",
        icon: "lock.fill",
    },
    AboutLink {
        title: "Terms of Service",
        url: "https://www.ug.edu.gh/terms",
        icon: "doc.text.fill",
    },
];

/// An entry on the profile hub.
#[derive(Debug, Clone, Copy)]
pub struct ProfileLink {
    pub href: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const PROFILE_LINKS: &[ProfileLink] = &[
    ProfileLink {
        href: "/favorites",
        title: "Favorite Routes",
        description: "Your saved routes",
        icon: "heart.fill",
        color: palette::ACCENT,
    },
    ProfileLink {
        href: "/history",
        title: "Travel History",
        description: "Recent routes and trips",
        icon: "clock.fill",
        color: palette::PRIMARY,
    },
    ProfileLink {
        href: "/notifications",
        title: "Notifications",
        description: "Route updates and alerts",
        icon: "bell.fill",
        color: palette::SECONDARY,
    },
    ProfileLink {
        href: "/settings",
        title: "Settings",
        description: "App preferences",
        icon: "gear",
        color: palette::TEXT_SECONDARY,
    },
    ProfileLink {
        href: "/help",
        title: "Help & Support",
        description: "FAQs and contact information",
        icon: "questionmark.circle.fill",
        color: palette::PRIMARY,
    },
    ProfileLink {
        href: "/about",
        title: "About",
        description: "App version and information",
        icon: "info.circle.fill",
        color: palette::TEXT_SECONDARY,
    },
];
