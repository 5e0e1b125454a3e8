//! Display color tokens and lookup tables.

use crate::domain::LocationCategory;

/// Named color tokens used across the UI.
pub mod palette {
    pub const PRIMARY: &str = "#1565C0";
    pub const SECONDARY: &str = "#2E7D32";
    pub const ACCENT: &str = "#F9A825";
    /// Neutral indicator for intermediate stops and unknown keys.
    pub const HIGHLIGHT: &str = "#CFD8DC";
    pub const TEXT_SECONDARY: &str = "#607D8B";
    pub const SUCCESS: &str = "#43A047";
    pub const ERROR: &str = "#E53935";
}

/// Badge color for a location category.
pub fn category_color(category: LocationCategory) -> &'static str {
    match category {
        LocationCategory::Academic => palette::PRIMARY,
        LocationCategory::Residential => palette::SECONDARY,
        LocationCategory::Landmark => palette::ACCENT,
        LocationCategory::Entrance => palette::TEXT_SECONDARY,
    }
}

/// Badge color for a category given by name; unknown names get the highlight color.
pub fn category_color_by_name(name: &str) -> &'static str {
    LocationCategory::parse(name).map_or(palette::HIGHLIGHT, category_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_distinct_color() {
        let colors: std::collections::HashSet<_> = LocationCategory::ALL
            .into_iter()
            .map(category_color)
            .collect();
        assert_eq!(colors.len(), LocationCategory::ALL.len());
        assert!(!colors.contains(palette::HIGHLIGHT));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(category_color_by_name("landmark"), palette::ACCENT);
        assert_eq!(category_color_by_name("entrance"), palette::TEXT_SECONDARY);
        assert_eq!(category_color_by_name("cafeteria"), palette::HIGHLIGHT);
    }
}
