//! Route color token type.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid color token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color token: {reason}")]
pub struct InvalidColor {
    reason: &'static str,
}

/// A `#RRGGBB` color token used to tint a route's indicator.
///
/// Hex digits are stored uppercase, so `#1e88e5` and `#1E88E5` compare equal.
///
/// # Examples
///
/// ```
/// use campus_server::domain::RouteColor;
///
/// let blue = RouteColor::parse("#1e88e5").unwrap();
/// assert_eq!(blue.as_str(), "#1E88E5");
///
/// // Missing hash is rejected
/// assert!(RouteColor::parse("1E88E5").is_err());
///
/// // Short form is rejected
/// assert!(RouteColor::parse("#FFF").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteColor([u8; 7]);

impl RouteColor {
    /// Parse a color token from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 7 {
            return Err(InvalidColor {
                reason: "must be exactly 7 characters (#RRGGBB)",
            });
        }

        if bytes[0] != b'#' {
            return Err(InvalidColor {
                reason: "must start with '#'",
            });
        }

        let mut out = [b'#'; 7];
        for (i, &b) in bytes.iter().enumerate().skip(1) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidColor {
                    reason: "must be hexadecimal digits",
                });
            }
            out[i] = b.to_ascii_uppercase();
        }

        Ok(RouteColor(out))
    }

    /// Returns the color token as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        std::str::from_utf8(&self.0).unwrap_or("#000000")
    }
}

impl fmt::Debug for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteColor({})", self.as_str())
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RouteColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RouteColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RouteColor::parse(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any six hex digits behind a hash parse, and come back uppercased
        #[test]
        fn roundtrip(s in "#[0-9a-fA-F]{6}") {
            let color = RouteColor::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.to_ascii_uppercase());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "#[0-9A-F]{0,5}|#[0-9A-F]{7,10}") {
            prop_assert!(RouteColor::parse(&s).is_err());
        }
    }
}
