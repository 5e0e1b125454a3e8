//! Route and location filtering.

use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::{Location, Route, RouteKind};

use super::query::SearchQuery;

/// Routes and locations matching a query, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResult<'a> {
    pub routes: Vec<&'a Route>,
    pub locations: Vec<&'a Location>,
}

impl FilterResult<'_> {
    /// True when neither routes nor locations matched.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.locations.is_empty()
    }
}

/// Routes split by kind, catalog order preserved within each bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteBuckets<'a> {
    pub shuttle: Vec<&'a Route>,
    pub trotro: Vec<&'a Route>,
}

impl<'a> RouteBuckets<'a> {
    /// The bucket holding routes of `kind`.
    pub fn get(&self, kind: RouteKind) -> &[&'a Route] {
        match kind {
            RouteKind::Shuttle => &self.shuttle,
            RouteKind::Trotro => &self.trotro,
        }
    }

    pub fn len(&self) -> usize {
        self.shuttle.len() + self.trotro.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the home screen shows for a given query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SearchOutcome<'a> {
    /// Blank query: every route, grouped by kind.
    Browse(RouteBuckets<'a>),
    /// Non-blank query: matching routes and locations.
    Matches(FilterResult<'a>),
}

impl SearchOutcome<'_> {
    /// True for a non-blank query that matched nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            SearchOutcome::Browse(_) => false,
            SearchOutcome::Matches(result) => result.is_empty(),
        }
    }
}

/// Whether a route's name or any of its stop names contains the needle.
pub fn route_matches(route: &Route, query: &SearchQuery) -> bool {
    query.matches(route.name()) || route.stops().iter().any(|s| query.matches(&s.name))
}

/// Whether a location's name contains the needle.
pub fn location_matches(location: &Location, query: &SearchQuery) -> bool {
    query.matches(&location.name)
}

/// Filter routes and locations by a free-text query.
///
/// A blank query returns every route and no locations: routes are
/// browsable by default, locations only appear in search results.
/// Otherwise both lists are filtered by case-insensitive substring match.
pub fn filter<'a>(query: &str, routes: &'a [Route], locations: &'a [Location]) -> FilterResult<'a> {
    let query = SearchQuery::parse(query);

    if query.is_browse() {
        return FilterResult {
            routes: routes.iter().collect(),
            locations: Vec::new(),
        };
    }

    FilterResult {
        routes: routes.iter().filter(|r| route_matches(r, &query)).collect(),
        locations: locations
            .iter()
            .filter(|l| location_matches(l, &query))
            .collect(),
    }
}

/// Split routes by kind.
pub fn partition_by_kind<'a, I>(routes: I) -> RouteBuckets<'a>
where
    I: IntoIterator<Item = &'a Route>,
{
    let (shuttle, trotro) = routes
        .into_iter()
        .partition(|r| r.kind() == RouteKind::Shuttle);
    RouteBuckets { shuttle, trotro }
}

/// Run a home-screen search against the catalog.
pub fn search<'a>(catalog: &'a Catalog, raw: &str) -> SearchOutcome<'a> {
    let query = SearchQuery::parse(raw);
    let Some(needle) = query.needle() else {
        return SearchOutcome::Browse(partition_by_kind(catalog.routes()));
    };

    let result = filter(raw, catalog.routes(), catalog.locations());
    debug!(
        query = needle,
        routes = result.routes.len(),
        locations = result.locations.len(),
        "search"
    );
    SearchOutcome::Matches(result)
}
