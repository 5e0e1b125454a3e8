//! Campus locations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::LocationId;

/// Closed set of location categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationCategory {
    Academic,
    Residential,
    Landmark,
    Entrance,
}

impl LocationCategory {
    pub const ALL: [LocationCategory; 4] = [
        LocationCategory::Academic,
        LocationCategory::Residential,
        LocationCategory::Landmark,
        LocationCategory::Entrance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationCategory::Academic => "academic",
            LocationCategory::Residential => "residential",
            LocationCategory::Landmark => "landmark",
            LocationCategory::Entrance => "entrance",
        }
    }

    /// Parse a category name. Unknown names are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for LocationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named place on campus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub category: LocationCategory,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, category: LocationCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_roundtrip() {
        for category in LocationCategory::ALL {
            assert_eq!(LocationCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(LocationCategory::parse("cafeteria"), None);
        assert_eq!(LocationCategory::parse("Academic"), None);
    }

    #[test]
    fn deserialize_rejects_unknown_category() {
        let ok: Result<Location, _> =
            serde_json::from_str(r#"{"id":"gh","name":"Great Hall","category":"landmark"}"#);
        assert_eq!(ok.unwrap().category, LocationCategory::Landmark);

        let bad: Result<Location, _> =
            serde_json::from_str(r#"{"id":"gh","name":"Great Hall","category":"shop"}"#);
        assert!(bad.is_err());
    }
}
