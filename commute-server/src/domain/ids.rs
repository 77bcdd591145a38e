//! Identifier types for network entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

fn validate(kind: &'static str, s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            kind,
            reason: "cannot be empty",
        });
    }
    if s.trim() != s {
        return Err(InvalidId {
            kind,
            reason: "cannot have leading or trailing whitespace",
        });
    }
    Ok(())
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parse an identifier, rejecting empty or whitespace-padded input.
            pub fn parse(s: impl Into<String>) -> Result<Self, InvalidId> {
                let s = s.into();
                validate($kind, &s)?;
                Ok($name(s))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = InvalidId;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifier of a station.
    ///
    /// # Examples
    ///
    /// ```
    /// use commute_server::domain::StationId;
    ///
    /// let shinjuku = StationId::parse("shinjuku").unwrap();
    /// assert_eq!(shinjuku.as_str(), "shinjuku");
    ///
    /// assert!(StationId::parse("").is_err());
    /// assert!(StationId::parse(" shinjuku").is_err());
    /// ```
    StationId,
    "station"
);

string_id!(
    /// Identifier of a line (a named service pattern run by one operator).
    LineId,
    "line"
);

string_id!(
    /// Identifier of a single connection edge.
    ConnectionId,
    "connection"
);

string_id!(
    /// Identifier of a school.
    SchoolId,
    "school"
);
