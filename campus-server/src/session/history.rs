//! Travel history.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::domain::Fare;
use crate::theme::palette;

/// How a trip ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripStatus {
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Completed => "completed",
            TripStatus::Cancelled => "cancelled",
        }
    }

    /// Badge color for the status.
    pub fn color(&self) -> &'static str {
        match self {
            TripStatus::Completed => palette::SUCCESS,
            TripStatus::Cancelled => palette::ERROR,
        }
    }
}

/// A past trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: u32,
    pub route_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub fare: Fare,
    pub duration_mins: u32,
    pub status: TripStatus,
}

impl Trip {
    /// Departure time as shown in the list, e.g. "08:30 AM".
    pub fn time_label(&self) -> String {
        self.time.format("%I:%M %p").to_string()
    }
}

/// Aggregate figures over a set of trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripSummary {
    /// Completed trips.
    pub trip_count: usize,
    /// Fares paid on completed trips.
    pub total_spent: Fare,
    /// Minutes travelled on completed trips.
    pub travel_minutes: u32,
}

impl TripSummary {
    fn from_trips<'a>(trips: impl Iterator<Item = &'a Trip>) -> Self {
        trips
            .filter(|t| t.status == TripStatus::Completed)
            .fold(TripSummary::default(), |acc, t| TripSummary {
                trip_count: acc.trip_count + 1,
                total_spent: acc.total_spent + t.fare,
                travel_minutes: acc.travel_minutes.saturating_add(t.duration_mins),
            })
    }

    /// Travel time as "12h 30m", or "45m" under an hour.
    pub fn travel_time_label(&self) -> String {
        travel_time_label(self.travel_minutes)
    }
}

/// Format a minute count as "12h 30m", or "45m" under an hour.
pub fn travel_time_label(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Label a trip date relative to today.
///
/// "Today", "Yesterday", "Jan 15" within the current year, "Jan 15, 2023" otherwise.
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.pred_opt() == Some(date) {
        "Yesterday".to_string()
    } else if date.year() == today.year() {
        date.format("%b %-d").to_string()
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}

/// Trips taken this session, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelHistory {
    trips: Vec<Trip>,
}

impl TravelHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample history ending on `today`.
    pub fn demo(today: NaiveDate) -> Self {
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        let trips = [
            ("Legon - Madina", 0, at(8, 30), 350, 25),
            ("Main Campus Loop", 1, at(14, 15), 100, 15),
            ("Legon - Accra Central", 1, at(7, 45), 500, 48),
            ("Hostels Express", 2, at(11, 20), 100, 12),
            ("Legon - Circle", 3, at(17, 30), 400, 40),
        ];

        let mut history = Self::new();
        for (route_name, days_ago, time, pesewas, duration_mins) in trips.into_iter().rev() {
            history.record(
                route_name,
                today - Duration::days(days_ago),
                time,
                Fare::from_pesewas(pesewas),
                duration_mins,
                TripStatus::Completed,
            );
        }
        history
    }

    /// Record a trip, placing it first.
    pub fn record(
        &mut self,
        route_name: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        fare: Fare,
        duration_mins: u32,
        status: TripStatus,
    ) -> u32 {
        let id = self.trips.iter().map(|t| t.id).max().map_or(1, |m| m + 1);
        self.trips.insert(
            0,
            Trip {
                id,
                route_name: route_name.into(),
                date,
                time,
                fare,
                duration_mins,
                status,
            },
        );
        id
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Totals over every trip.
    pub fn summary(&self) -> TripSummary {
        TripSummary::from_trips(self.trips.iter())
    }

    /// Number of distinct routes travelled on completed trips.
    pub fn routes_used(&self) -> usize {
        self.trips
            .iter()
            .filter(|t| t.status == TripStatus::Completed)
            .map(|t| t.route_name.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Totals over trips in the same calendar month as `today`.
    pub fn month_summary(&self, today: NaiveDate) -> TripSummary {
        TripSummary::from_trips(
            self.trips
                .iter()
                .filter(|t| t.date.year() == today.year() && t.date.month() == today.month()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn date_labels() {
        let today = date(2024, 1, 15);
        assert_eq!(date_label(date(2024, 1, 15), today), "Today");
        assert_eq!(date_label(date(2024, 1, 14), today), "Yesterday");
        assert_eq!(date_label(date(2024, 1, 3), today), "Jan 3");
        assert_eq!(date_label(date(2023, 12, 31), today), "Dec 31, 2023");
    }

    #[test]
    fn yesterday_across_year_boundary() {
        assert_eq!(date_label(date(2023, 12, 31), date(2024, 1, 1)), "Yesterday");
    }

    #[test]
    fn travel_time_labels() {
        assert_eq!(travel_time_label(750), "12h 30m");
        assert_eq!(travel_time_label(45), "45m");
        assert_eq!(travel_time_label(60), "1h 0m");
        assert_eq!(travel_time_label(0), "0m");
    }

    #[test]
    fn trip_time_label() {
        let mut history = TravelHistory::new();
        history.record(
            "Loop",
            date(2024, 1, 15),
            time(14, 15),
            Fare::ZERO,
            10,
            TripStatus::Completed,
        );
        assert_eq!(history.trips()[0].time_label(), "02:15 PM");
    }

    #[test]
    fn record_puts_newest_first_with_fresh_ids() {
        let mut history = TravelHistory::new();
        let a = history.record("A", date(2024, 1, 1), time(8, 0), Fare::ZERO, 5, TripStatus::Completed);
        let b = history.record("B", date(2024, 1, 2), time(8, 0), Fare::ZERO, 5, TripStatus::Completed);
        assert_ne!(a, b);
        assert_eq!(history.trips()[0].route_name, "B");
    }

    #[test]
    fn summary_counts_completed_only() {
        let mut history = TravelHistory::new();
        history.record("A", date(2024, 1, 1), time(8, 0), Fare::from_pesewas(350), 25, TripStatus::Completed);
        history.record("B", date(2024, 1, 2), time(8, 0), Fare::from_pesewas(500), 40, TripStatus::Cancelled);
        history.record("C", date(2024, 1, 3), time(8, 0), Fare::from_pesewas(100), 15, TripStatus::Completed);

        let summary = history.summary();
        assert_eq!(summary.trip_count, 2);
        assert_eq!(summary.total_spent.to_string(), "₵4.50");
        assert_eq!(summary.travel_minutes, 40);
        assert_eq!(summary.travel_time_label(), "40m");
    }

    #[test]
    fn routes_used_counts_distinct_completed() {
        let mut history = TravelHistory::new();
        history.record("A", date(2024, 1, 1), time(8, 0), Fare::ZERO, 5, TripStatus::Completed);
        history.record("A", date(2024, 1, 2), time(8, 0), Fare::ZERO, 5, TripStatus::Completed);
        history.record("B", date(2024, 1, 3), time(8, 0), Fare::ZERO, 5, TripStatus::Cancelled);
        assert_eq!(history.routes_used(), 1);
    }

    #[test]
    fn month_summary_filters_by_month() {
        let mut history = TravelHistory::new();
        history.record("A", date(2023, 12, 30), time(8, 0), Fare::from_pesewas(350), 25, TripStatus::Completed);
        history.record("B", date(2024, 1, 2), time(8, 0), Fare::from_pesewas(100), 15, TripStatus::Completed);

        let summary = history.month_summary(date(2024, 1, 15));
        assert_eq!(summary.trip_count, 1);
        assert_eq!(summary.total_spent, Fare::from_pesewas(100));
    }

    #[test]
    fn demo_history_is_newest_first() {
        let today = date(2024, 1, 15);
        let history = TravelHistory::demo(today);
        assert_eq!(history.trips().len(), 5);
        assert_eq!(history.trips()[0].route_name, "Legon - Madina");
        assert_eq!(history.trips()[0].date, today);
        assert!(history.trips().windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn status_colors() {
        assert_eq!(TripStatus::Completed.color(), palette::SUCCESS);
        assert_eq!(TripStatus::Cancelled.color(), palette::ERROR);
        assert_eq!(TripStatus::Cancelled.label(), "cancelled");
    }
}
