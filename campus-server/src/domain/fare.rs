//! Fare amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Currency glyph used when displaying fares (Ghanaian cedi).
pub const CURRENCY_GLYPH: &str = "₵";

/// Error returned when a fare amount is not representable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid fare {value}: {reason}")]
pub struct InvalidFare {
    value: f64,
    reason: &'static str,
}

/// A non-negative fare, held in minor units (pesewas).
///
/// Displays with the currency glyph and exactly two decimal places.
///
/// # Examples
///
/// ```
/// use campus_server::domain::Fare;
///
/// assert_eq!(Fare::from_cedis(3.5).unwrap().to_string(), "₵3.50");
/// assert_eq!(Fare::from_cedis(1.0).unwrap().to_string(), "₵1.00");
/// assert!(Fare::from_cedis(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fare(u32);

impl Fare {
    /// A zero fare.
    pub const ZERO: Fare = Fare(0);

    /// Create a fare from a whole number of pesewas.
    pub const fn from_pesewas(pesewas: u32) -> Self {
        Fare(pesewas)
    }

    /// Create a fare from a decimal cedi amount, rounding to the nearest pesewa.
    pub fn from_cedis(cedis: f64) -> Result<Self, InvalidFare> {
        if !cedis.is_finite() {
            return Err(InvalidFare {
                value: cedis,
                reason: "must be a finite number",
            });
        }
        if cedis < 0.0 {
            return Err(InvalidFare {
                value: cedis,
                reason: "must not be negative",
            });
        }
        let pesewas = (cedis * 100.0).round();
        if pesewas > f64::from(u32::MAX) {
            return Err(InvalidFare {
                value: cedis,
                reason: "too large",
            });
        }
        Ok(Fare(pesewas as u32))
    }

    /// Returns the amount in pesewas.
    pub fn pesewas(&self) -> u32 {
        self.0
    }

    /// Returns the amount as a decimal cedi value.
    pub fn as_cedis(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{:02}", CURRENCY_GLYPH, self.0 / 100, self.0 % 100)
    }
}

impl Add for Fare {
    type Output = Fare;

    fn add(self, rhs: Fare) -> Fare {
        Fare(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Fare {
    fn sum<I: Iterator<Item = Fare>>(iter: I) -> Fare {
        iter.fold(Fare::ZERO, Add::add)
    }
}

impl Serialize for Fare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_cedis())
    }
}

impl<'de> Deserialize<'de> for Fare {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cedis = f64::deserialize(deserializer)?;
        Fare::from_cedis(cedis).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display always has the glyph and exactly two fractional digits
        #[test]
        fn display_shape(p in 0u32..10_000_000) {
            let s = Fare::from_pesewas(p).to_string();
            prop_assert!(s.starts_with(CURRENCY_GLYPH));
            let (_, frac) = s.rsplit_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
        }

        /// Whole pesewa amounts survive the decimal conversion
        #[test]
        fn cedis_roundtrip(p in 0u32..10_000_000) {
            let fare = Fare::from_pesewas(p);
            prop_assert_eq!(Fare::from_cedis(fare.as_cedis()).unwrap(), fare);
        }
    }
}
