//! Route detail sheet.
//!
//! Derives the rendered itinerary for a selected route (endpoint
//! highlighting, per-stop time labels, fare and type labels) and tracks
//! whether the sheet is showing.

mod panel;
mod view;

pub use panel::DetailPanel;
pub use view::{RouteDetail, StopView, time_label};
