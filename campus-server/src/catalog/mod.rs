//! The route and location catalog.
//!
//! Loaded once at startup, either from the embedded University of Ghana
//! data set or from a JSON file, and never mutated afterwards.

mod error;
mod raw;

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::domain::{Location, LocationId, Route, RouteId};

pub use error::CatalogError;
pub use raw::{RawCatalog, RawLocation, RawRoute, RawStop};

/// Embedded catalog for the Legon campus.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Immutable collection of routes and locations.
///
/// Record order is the file order; every filter preserves it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    routes: Vec<Route>,
    locations: Vec<Location>,
}

impl Catalog {
    /// Assemble a catalog, rejecting duplicate route or location ids.
    pub fn new(routes: Vec<Route>, locations: Vec<Location>) -> Result<Self, CatalogError> {
        let mut route_ids = HashSet::with_capacity(routes.len());
        for route in &routes {
            if !route_ids.insert(route.id()) {
                return Err(CatalogError::DuplicateRoute(route.id().clone()));
            }
        }

        let mut location_ids = HashSet::with_capacity(locations.len());
        for location in &locations {
            if !location_ids.insert(&location.id) {
                return Err(CatalogError::DuplicateLocation(location.id.clone()));
            }
        }

        Ok(Self { routes, locations })
    }

    /// Parse a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let (routes, locations) = raw.into_parts()?;
        Self::new(routes, locations)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            routes = catalog.routes.len(),
            locations = catalog.locations.len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    /// The embedded Legon campus catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// All routes in catalog order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// All locations in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a route by id.
    pub fn route(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == id)
    }

    /// Look up a location by id.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id == id)
    }

    /// Look up a route by its display name.
    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name() == name)
    }
}
