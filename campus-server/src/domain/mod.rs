//! Domain types for the campus navigator.
//!
//! This module contains the validated catalog record types. All types
//! enforce their invariants at construction time, so code that receives
//! these types can trust their validity.

mod color;
mod error;
mod fare;
mod ids;
mod location;
mod route;

pub use color::{InvalidColor, RouteColor};
pub use error::DomainError;
pub use fare::{CURRENCY_GLYPH, Fare, InvalidFare};
pub use ids::{InvalidId, LocationId, RouteId, StopId};
pub use location::{Location, LocationCategory};
pub use route::{Route, RouteKind, RouteParts, RouteStop};

#[cfg(test)]
pub(crate) use route::test_support;
