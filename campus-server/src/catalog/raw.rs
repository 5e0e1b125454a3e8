//! Raw catalog records as they appear in JSON.
//!
//! These types mirror the file format exactly and are converted into
//! validated domain types by [`RawCatalog::into_parts`].

use serde::Deserialize;

use crate::domain::{
    Fare, Location, LocationId, Route, RouteColor, RouteId, RouteKind, RouteParts, RouteStop,
    StopId,
};

use super::error::CatalogError;

/// Top-level catalog document.
#[derive(Debug, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub routes: Vec<RawRoute>,
    #[serde(default)]
    pub locations: Vec<RawLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRoute {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RouteKind,
    pub fare: f64,
    pub estimated_duration: u32,
    pub stops: Vec<RawStop>,
    pub operating_hours: String,
    pub frequency: String,
    pub color: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStop {
    pub id: String,
    pub name: String,
    pub estimated_time: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawLocation {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl RawCatalog {
    /// Convert into validated routes and locations, preserving file order.
    pub fn into_parts(self) -> Result<(Vec<Route>, Vec<Location>), CatalogError> {
        let routes = self
            .routes
            .into_iter()
            .map(RawRoute::into_route)
            .collect::<Result<Vec<_>, _>>()?;
        let locations = self
            .locations
            .into_iter()
            .map(RawLocation::into_location)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((routes, locations))
    }
}

impl RawRoute {
    fn into_route(self) -> Result<Route, CatalogError> {
        let invalid = |message: String| CatalogError::InvalidRecord {
            record: format!("route {:?}", self.id),
            message,
        };

        let id = RouteId::parse(&self.id).map_err(|e| invalid(e.to_string()))?;
        let fare = Fare::from_cedis(self.fare).map_err(|e| invalid(e.to_string()))?;
        let color = RouteColor::parse(&self.color).map_err(|e| invalid(e.to_string()))?;
        let stops = self
            .stops
            .iter()
            .map(|s| {
                StopId::parse(&s.id)
                    .map(|id| RouteStop::new(id, s.name.clone(), s.estimated_time))
                    .map_err(|e| invalid(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let route = Route::new(RouteParts {
            id,
            name: self.name,
            kind: self.kind,
            fare,
            estimated_duration: self.estimated_duration,
            stops,
            operating_hours: self.operating_hours,
            frequency: self.frequency,
            color,
        })?;
        Ok(route)
    }
}

impl RawLocation {
    fn into_location(self) -> Result<Location, CatalogError> {
        let invalid = |message: String| CatalogError::InvalidRecord {
            record: format!("location {:?}", self.id),
            message,
        };

        let id = LocationId::parse(&self.id).map_err(|e| invalid(e.to_string()))?;
        let category = crate::domain::LocationCategory::parse(&self.category)
            .ok_or_else(|| invalid(format!("unknown category {:?}", self.category)))?;
        Ok(Location::new(id, self.name, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_route(json: &str) -> RawRoute {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn converts_route() {
        let raw = raw_route(
            r##"{
                "id": "madina",
                "name": "Legon - Madina",
                "type": "trotro",
                "fare": 3.5,
                "estimatedDuration": 25,
                "stops": [
                    {"id": "1", "name": "Main Gate", "estimatedTime": 0},
                    {"id": "2", "name": "Madina Market", "estimatedTime": 25}
                ],
                "operatingHours": "5:30 AM - 9:00 PM",
                "frequency": "Every 10 minutes",
                "color": "#FF9800"
            }"##,
        );
        let route = raw.into_route().unwrap();
        assert_eq!(route.id().as_str(), "madina");
        assert_eq!(route.kind(), RouteKind::Trotro);
        assert_eq!(route.fare().to_string(), "₵3.50");
        assert_eq!(route.stops()[1].name, "Madina Market");
    }

    #[test]
    fn invalid_color_names_record() {
        let raw = raw_route(
            r##"{
                "id": "madina", "name": "Legon - Madina", "type": "trotro",
                "fare": 3.5, "estimatedDuration": 25, "stops": [],
                "operatingHours": "", "frequency": "", "color": "orange"
            }"##,
        );
        let err = raw.into_route().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("route \"madina\""), "{msg}");
        assert!(msg.contains("color"), "{msg}");
    }

    #[test]
    fn empty_stops_is_domain_error() {
        let raw = raw_route(
            r##"{
                "id": "madina", "name": "Legon - Madina", "type": "trotro",
                "fare": 3.5, "estimatedDuration": 25, "stops": [],
                "operatingHours": "", "frequency": "", "color": "#FF9800"
            }"##,
        );
        assert!(matches!(
            raw.into_route().unwrap_err(),
            CatalogError::Domain(_)
        ));
    }

    #[test]
    fn unknown_category_rejected() {
        let raw: RawLocation =
            serde_json::from_str(r#"{"id":"canteen","name":"Canteen","category":"food"}"#).unwrap();
        let err = raw.into_location().unwrap_err();
        assert!(err.to_string().contains("unknown category \"food\""));
    }

    #[test]
    fn unknown_route_type_rejected_at_parse() {
        let res: Result<RawRoute, _> = serde_json::from_str(
            r##"{
                "id": "x", "name": "X", "type": "ferry",
                "fare": 1, "estimatedDuration": 0, "stops": [],
                "operatingHours": "", "frequency": "", "color": "#000000"
            }"##,
        );
        assert!(res.is_err());
    }
}
