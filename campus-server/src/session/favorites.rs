//! Favorite routes.

use crate::catalog::Catalog;
use crate::domain::{Route, RouteId};

/// Ordered list of favorite routes, most recently added last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<RouteId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route. Returns false if it was already a favorite.
    pub fn add(&mut self, id: RouteId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove a route. Returns false if it was not a favorite.
    pub fn remove(&mut self, id: &RouteId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|f| f != id);
        self.ids.len() != before
    }

    pub fn contains(&self, id: &RouteId) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite routes present in the catalog, in favorite order.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Route> {
        self.ids.iter().filter_map(|id| catalog.route(id)).collect()
    }
}
