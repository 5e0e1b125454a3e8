//! App settings.

use super::toggles::{ToggleKey, ToggleSet};

/// User-adjustable app behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    DarkMode,
    LocationServices,
    OfflineMode,
    AutoRefresh,
    HapticFeedback,
}

impl ToggleKey for Setting {
    const ALL: &'static [Self] = &[
        Setting::DarkMode,
        Setting::LocationServices,
        Setting::OfflineMode,
        Setting::AutoRefresh,
        Setting::HapticFeedback,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Setting::DarkMode => "dark-mode",
            Setting::LocationServices => "location-services",
            Setting::OfflineMode => "offline-mode",
            Setting::AutoRefresh => "auto-refresh",
            Setting::HapticFeedback => "haptic-feedback",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Setting::DarkMode => "Dark Mode",
            Setting::LocationServices => "Location Services",
            Setting::OfflineMode => "Offline Mode",
            Setting::AutoRefresh => "Auto Refresh",
            Setting::HapticFeedback => "Haptic Feedback",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Setting::DarkMode => "Use dark theme throughout the app",
            Setting::LocationServices => "Allow app to access your location",
            Setting::OfflineMode => "Download routes for offline use",
            Setting::AutoRefresh => "Automatically update route information",
            Setting::HapticFeedback => "Vibrate on interactions",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Setting::DarkMode => "moon.fill",
            Setting::LocationServices => "location.fill",
            Setting::OfflineMode => "wifi.slash",
            Setting::AutoRefresh => "arrow.clockwise",
            Setting::HapticFeedback => "hand.tap.fill",
        }
    }

    fn default_value(&self) -> bool {
        !matches!(self, Setting::DarkMode | Setting::OfflineMode)
    }
}

pub type AppSettings = ToggleSet<Setting>;
