//! Route detail view model.

use serde::Serialize;

use crate::domain::{Route, RouteStop};
use crate::theme::palette;

/// Time label for a stop: "Start" at zero minutes, otherwise "{n} min".
pub fn time_label(estimated_time: u32) -> String {
    if estimated_time == 0 {
        "Start".to_string()
    } else {
        format!("{estimated_time} min")
    }
}

/// One row of the rendered itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopView {
    pub id: String,
    pub name: String,
    pub time_label: String,
    /// First or last stop of the route.
    pub is_endpoint: bool,
    /// Route accent color for endpoints, neutral highlight otherwise.
    pub dot_color: String,
    /// Whether a connector line follows this stop.
    pub has_connector: bool,
}

impl StopView {
    fn from_stop(stop: &RouteStop, index: usize, count: usize, route: &Route) -> Self {
        let is_last = index + 1 == count;
        let is_endpoint = index == 0 || is_last;
        let dot_color = if is_endpoint {
            route.color().as_str().to_string()
        } else {
            palette::HIGHLIGHT.to_string()
        };

        Self {
            id: stop.id.as_str().to_string(),
            name: stop.name.clone(),
            time_label: time_label(stop.estimated_time),
            is_endpoint,
            dot_color,
            has_connector: !is_last,
        }
    }
}

/// Everything the detail sheet shows for one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDetail {
    pub id: String,
    pub name: String,
    pub kind_label: String,
    pub icon: String,
    pub color: String,
    pub fare_label: String,
    pub duration_label: String,
    pub frequency: String,
    pub operating_hours: String,
    pub stops: Vec<StopView>,
}

impl RouteDetail {
    /// Derive the detail view for a route.
    pub fn from_route(route: &Route) -> Self {
        let count = route.stops().len();
        let stops = route
            .stops()
            .iter()
            .enumerate()
            .map(|(i, s)| StopView::from_stop(s, i, count, route))
            .collect();

        Self {
            id: route.id().as_str().to_string(),
            name: route.name().to_string(),
            kind_label: route.kind().label().to_string(),
            icon: route.kind().icon().to_string(),
            color: route.color().as_str().to_string(),
            fare_label: route.fare().to_string(),
            duration_label: format!("{} min", route.estimated_duration()),
            frequency: route.frequency().to_string(),
            operating_hours: route.operating_hours().to_string(),
            stops,
        }
    }

    /// Render an optional selection. No selection renders nothing.
    pub fn render(route: Option<&Route>) -> Option<Self> {
        route.map(Self::from_route)
    }

    /// Number of stops flagged as endpoints.
    pub fn endpoint_count(&self) -> usize {
        self.stops.iter().filter(|s| s.is_endpoint).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteKind;
    use crate::domain::test_support::make_route;

    #[test]
    fn time_labels() {
        assert_eq!(time_label(0), "Start");
        assert_eq!(time_label(12), "12 min");
        assert_eq!(time_label(1), "1 min");
    }

    #[test]
    fn endpoints_are_first_and_last() {
        let route = make_route(
            "loop",
            "Main Campus Loop",
            RouteKind::Shuttle,
            &[("Gate", 0), ("Great Hall", 5), ("Library", 9), ("Gate", 12)],
        );
        let detail = RouteDetail::from_route(&route);

        let flags: Vec<bool> = detail.stops.iter().map(|s| s.is_endpoint).collect();
        assert_eq!(flags, vec![true, false, false, true]);
        assert_eq!(detail.stops[0].dot_color, "#2196F3");
        assert_eq!(detail.stops[1].dot_color, palette::HIGHLIGHT);
        assert_eq!(detail.stops[3].dot_color, "#2196F3");
    }

    #[test]
    fn single_stop_is_one_endpoint() {
        let route = make_route("one", "Stand", RouteKind::Trotro, &[("Gate", 0)]);
        let detail = RouteDetail::from_route(&route);
        assert_eq!(detail.stops.len(), 1);
        assert_eq!(detail.endpoint_count(), 1);
        assert!(!detail.stops[0].has_connector);
    }

    #[test]
    fn connectors_between_stops_only() {
        let route = make_route(
            "r",
            "R",
            RouteKind::Trotro,
            &[("Legon", 0), ("Okponglo", 8), ("Circle", 30)],
        );
        let detail = RouteDetail::from_route(&route);
        let connectors: Vec<bool> = detail.stops.iter().map(|s| s.has_connector).collect();
        assert_eq!(connectors, vec![true, true, false]);
    }

    #[test]
    fn derived_labels() {
        let route = make_route(
            "r",
            "Legon-Accra",
            RouteKind::Trotro,
            &[("Legon", 0), ("Circle", 30)],
        );
        let detail = RouteDetail::from_route(&route);
        assert_eq!(detail.kind_label, "Trotro Route");
        assert_eq!(detail.icon, "car.fill");
        assert_eq!(detail.fare_label, "₵1.00");
        assert_eq!(detail.duration_label, "30 min");
        assert_eq!(detail.stops[0].time_label, "Start");
        assert_eq!(detail.stops[1].time_label, "30 min");
    }

    #[test]
    fn no_selection_renders_nothing() {
        assert_eq!(RouteDetail::render(None), None);

        let route = make_route("r", "R", RouteKind::Shuttle, &[("Gate", 0)]);
        assert!(RouteDetail::render(Some(&route)).is_some());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::RouteKind;
    use crate::domain::test_support::make_route;
    use proptest::prelude::*;

    proptest! {
        /// Exactly the first and last stop are endpoints
        #[test]
        fn endpoint_derivation(n in 1usize..20) {
            let names: Vec<String> = (0..n).map(|i| format!("Stop {i}")).collect();
            let stops: Vec<(&str, u32)> =
                names.iter().enumerate().map(|(i, s)| (s.as_str(), i as u32)).collect();
            let route = make_route("r", "R", RouteKind::Shuttle, &stops);
            let detail = RouteDetail::from_route(&route);

            let expected = if n == 1 { 1 } else { 2 };
            prop_assert_eq!(detail.endpoint_count(), expected);
            prop_assert!(detail.stops[0].is_endpoint);
            prop_assert!(detail.stops[n - 1].is_endpoint);
            prop_assert_eq!(detail.stops.iter().filter(|s| s.has_connector).count(), n - 1);
        }

        /// Zero minutes is "Start", everything else is "{n} min"
        #[test]
        fn time_label_shape(m in 1u32..10_000) {
            prop_assert_eq!(time_label(0), "Start");
            prop_assert_eq!(time_label(m), format!("{m} min"));
        }
    }
}
