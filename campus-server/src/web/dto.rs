//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::detail::RouteDetail;
use crate::domain::{Location, Route};
use crate::search::SearchOutcome;
use crate::theme::category_color;

/// Query string for searches.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query; missing means browse.
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchRequest {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }
}

/// A route in list results.
#[derive(Debug, Serialize)]
pub struct RouteSummary {
    pub id: String,
    pub name: String,
    /// "shuttle" or "trotro"
    pub kind: String,
    pub kind_label: String,
    pub fare: f64,
    pub fare_label: String,
    pub duration_mins: u32,
    pub frequency: String,
    pub color: String,
    pub stop_count: usize,
}

impl RouteSummary {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id().to_string(),
            name: route.name().to_string(),
            kind: route.kind().to_string(),
            kind_label: route.kind().label().to_string(),
            fare: route.fare().as_cedis(),
            fare_label: route.fare().to_string(),
            duration_mins: route.estimated_duration(),
            frequency: route.frequency().to_string(),
            color: route.color().to_string(),
            stop_count: route.stops().len(),
        }
    }
}

/// A location in search results.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Badge color for the category.
    pub color: String,
}

impl LocationResult {
    pub fn from_location(location: &Location) -> Self {
        Self {
            id: location.id.to_string(),
            name: location.name.clone(),
            category: location.category.to_string(),
            color: category_color(location.category).to_string(),
        }
    }
}

/// Response for a search.
#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SearchResponse {
    /// Blank query: all routes by kind.
    Browse {
        shuttle: Vec<RouteSummary>,
        trotro: Vec<RouteSummary>,
    },
    /// Matching routes and locations.
    Matches {
        routes: Vec<RouteSummary>,
        locations: Vec<LocationResult>,
    },
}

impl SearchResponse {
    pub fn from_outcome(outcome: &SearchOutcome<'_>) -> Self {
        fn summaries(routes: &[&Route]) -> Vec<RouteSummary> {
            routes.iter().map(|r| RouteSummary::from_route(r)).collect()
        }

        match outcome {
            SearchOutcome::Browse(buckets) => SearchResponse::Browse {
                shuttle: summaries(&buckets.shuttle),
                trotro: summaries(&buckets.trotro),
            },
            SearchOutcome::Matches(result) => SearchResponse::Matches {
                routes: summaries(&result.routes),
                locations: result
                    .locations
                    .iter()
                    .map(|l| LocationResult::from_location(l))
                    .collect(),
            },
        }
    }
}

/// Response describing the detail sheet.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub visible: bool,
    pub route: Option<RouteDetail>,
}

impl DetailResponse {
    pub fn new(route: Option<RouteDetail>) -> Self {
        Self {
            visible: route.is_some(),
            route,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
