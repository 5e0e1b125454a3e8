//! Domain error types.
//!
//! These errors represent validation failures when assembling catalog
//! records. They are distinct from I/O and parse errors.

use super::{RouteId, StopId};

/// Domain-level errors for route validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no stops
    #[error("route {0} must have at least one stop")]
    NoStops(RouteId),

    /// A stop's elapsed time is earlier than the stop before it
    #[error("route {route}: stop {stop} at {minutes} min is earlier than the previous stop")]
    StopTimeDecreases {
        route: RouteId,
        stop: StopId,
        minutes: u32,
    },

    /// Total duration is shorter than the last stop's elapsed time
    #[error("route {route}: duration {duration} min is shorter than last stop time {last_stop} min")]
    DurationTooShort {
        route: RouteId,
        duration: u32,
        last_stop: u32,
    },

    /// Two stops in one route share an id
    #[error("route {route}: duplicate stop id {stop}")]
    DuplicateStop { route: RouteId, stop: StopId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let route = RouteId::parse("loop").unwrap();
        let stop = StopId::parse("s2").unwrap();

        let err = DomainError::NoStops(route.clone());
        assert_eq!(err.to_string(), "route loop must have at least one stop");

        let err = DomainError::StopTimeDecreases {
            route: route.clone(),
            stop: stop.clone(),
            minutes: 3,
        };
        assert_eq!(
            err.to_string(),
            "route loop: stop s2 at 3 min is earlier than the previous stop"
        );

        let err = DomainError::DurationTooShort {
            route: route.clone(),
            duration: 10,
            last_stop: 12,
        };
        assert_eq!(
            err.to_string(),
            "route loop: duration 10 min is shorter than last stop time 12 min"
        );

        let err = DomainError::DuplicateStop { route, stop };
        assert_eq!(err.to_string(), "route loop: duplicate stop id s2");
    }
}
