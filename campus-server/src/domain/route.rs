//! Routes and their stops.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::{Fare, RouteColor, RouteId, StopId};

/// The kind of vehicle serving a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// University-run campus shuttle.
    Shuttle,
    /// Shared minibus.
    Trotro,
}

impl RouteKind {
    /// All kinds, in display order.
    pub const ALL: [RouteKind; 2] = [RouteKind::Shuttle, RouteKind::Trotro];

    /// Label shown next to a route's name.
    pub fn label(&self) -> &'static str {
        match self {
            RouteKind::Shuttle => "Campus Shuttle",
            RouteKind::Trotro => "Trotro Route",
        }
    }

    /// Heading for a list of routes of this kind.
    pub fn section_title(&self) -> &'static str {
        match self {
            RouteKind::Shuttle => "Campus Shuttles",
            RouteKind::Trotro => "Trotro Routes",
        }
    }

    /// Icon name for the route indicator.
    pub fn icon(&self) -> &'static str {
        match self {
            RouteKind::Shuttle => "bus.fill",
            RouteKind::Trotro => "car.fill",
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteKind::Shuttle => f.write_str("shuttle"),
            RouteKind::Trotro => f.write_str("trotro"),
        }
    }
}

/// A stop on a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    pub id: StopId,
    pub name: String,
    /// Minutes elapsed since the route's first stop.
    pub estimated_time: u32,
}

impl RouteStop {
    pub fn new(id: StopId, name: impl Into<String>, estimated_time: u32) -> Self {
        Self {
            id,
            name: name.into(),
            estimated_time,
        }
    }
}

/// A validated route.
///
/// Construction via [`Route::new`] guarantees:
/// - at least one stop
/// - stop times never decrease along the route
/// - the total duration covers the last stop
/// - stop ids are unique within the route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    id: RouteId,
    name: String,
    #[serde(rename = "type")]
    kind: RouteKind,
    fare: Fare,
    estimated_duration: u32,
    stops: Vec<RouteStop>,
    operating_hours: String,
    frequency: String,
    color: RouteColor,
}

/// Unvalidated route fields, passed to [`Route::new`].
#[derive(Debug, Clone)]
pub struct RouteParts {
    pub id: RouteId,
    pub name: String,
    pub kind: RouteKind,
    pub fare: Fare,
    pub estimated_duration: u32,
    pub stops: Vec<RouteStop>,
    pub operating_hours: String,
    pub frequency: String,
    pub color: RouteColor,
}

impl Route {
    /// Validate and assemble a route.
    pub fn new(parts: RouteParts) -> Result<Self, DomainError> {
        let RouteParts {
            id,
            name,
            kind,
            fare,
            estimated_duration,
            stops,
            operating_hours,
            frequency,
            color,
        } = parts;

        let Some(last) = stops.last() else {
            return Err(DomainError::NoStops(id));
        };
        let last_time = last.estimated_time;

        let mut seen = HashSet::with_capacity(stops.len());
        for stop in &stops {
            if !seen.insert(&stop.id) {
                return Err(DomainError::DuplicateStop {
                    route: id,
                    stop: stop.id.clone(),
                });
            }
        }

        if let Some(bad) = stops
            .windows(2)
            .find(|w| w[1].estimated_time < w[0].estimated_time)
        {
            return Err(DomainError::StopTimeDecreases {
                route: id,
                stop: bad[1].id.clone(),
                minutes: bad[1].estimated_time,
            });
        }

        if estimated_duration < last_time {
            return Err(DomainError::DurationTooShort {
                route: id,
                duration: estimated_duration,
                last_stop: last_time,
            });
        }

        Ok(Self {
            id,
            name,
            kind,
            fare,
            estimated_duration,
            stops,
            operating_hours,
            frequency,
            color,
        })
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RouteKind {
        self.kind
    }

    pub fn fare(&self) -> Fare {
        self.fare
    }

    /// Total route duration in minutes.
    pub fn estimated_duration(&self) -> u32 {
        self.estimated_duration
    }

    /// Stops in travel order. Never empty.
    pub fn stops(&self) -> &[RouteStop] {
        &self.stops
    }

    pub fn operating_hours(&self) -> &str {
        &self.operating_hours
    }

    pub fn frequency(&self) -> &str {
        &self.frequency
    }

    pub fn color(&self) -> RouteColor {
        self.color
    }

    /// The first stop.
    pub fn origin(&self) -> &RouteStop {
        // Non-empty by construction.
        &self.stops[0]
    }

    /// The last stop.
    pub fn terminus(&self) -> &RouteStop {
        &self.stops[self.stops.len() - 1]
    }
}
