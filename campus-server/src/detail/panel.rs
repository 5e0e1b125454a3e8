//! Detail sheet visibility.

use tracing::debug;

use crate::domain::Route;

use super::view::RouteDetail;

/// Whether the route detail sheet is showing, and for which route.
///
/// `Hidden` is both the initial and the terminal state. Closing or
/// confirming always returns to `Hidden` and drops the route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailPanel {
    #[default]
    Hidden,
    Shown(Route),
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a route. Picking another route while shown replaces the subject.
    pub fn show(&mut self, route: Route) {
        debug!(route = route.name(), "detail shown");
        *self = DetailPanel::Shown(route);
    }

    /// Dismiss the sheet. No-op when hidden.
    pub fn close(&mut self) {
        *self = DetailPanel::Hidden;
    }

    /// Confirm the shown route.
    ///
    /// Hands the route to `on_select` exactly once and returns to `Hidden`.
    /// Returns false, without calling `on_select`, when nothing is shown.
    pub fn confirm<F>(&mut self, on_select: F) -> bool
    where
        F: FnOnce(&Route),
    {
        match std::mem::take(self) {
            DetailPanel::Hidden => false,
            DetailPanel::Shown(route) => {
                on_select(&route);
                true
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, DetailPanel::Shown(_))
    }

    /// The route being shown, if any.
    pub fn current(&self) -> Option<&Route> {
        match self {
            DetailPanel::Hidden => None,
            DetailPanel::Shown(route) => Some(route),
        }
    }

    /// The rendered detail, or nothing when hidden.
    pub fn view(&self) -> Option<RouteDetail> {
        RouteDetail::render(self.current())
    }
}
