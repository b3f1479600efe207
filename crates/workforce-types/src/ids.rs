//! Type-safe identifier wrappers.
//!
//! Employee identifiers are plain integers handed out by a monotonically
//! increasing sequence, but they are wrapped in a newtype so they can never
//! be confused with headcounts, years, or day counts at compile time.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around [`u64`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Wrap a raw sequence value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Return the inner sequence value.
            pub const fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an employee, stable across every yearly snapshot.
    EmployeeId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_order_by_sequence_value() {
        assert!(EmployeeId::new(1) < EmployeeId::new(2));
        assert_eq!(EmployeeId::from(7).into_inner(), 7);
    }

    #[test]
    fn id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&EmployeeId::new(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));
    }

    #[test]
    fn id_display_matches_raw_value() {
        assert_eq!(EmployeeId::new(1234).to_string(), "1234");
    }
}
