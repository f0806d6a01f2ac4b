//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `ProductId` where an
//! `InvoiceId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(BusinessId, "Unique identifier for a business (tenant).");
typed_id!(CustomerId, "Unique identifier for a customer.");
typed_id!(ProductId, "Unique identifier for a product.");
typed_id!(InvoiceId, "Unique identifier for a sales invoice.");
typed_id!(PurchaseId, "Unique identifier for a purchase invoice.");
typed_id!(ReturnId, "Unique identifier for a return note.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(InvoiceId::new(), InvoiceId::new());
        assert_ne!(ProductId::new(), ProductId::new());
    }

    #[test]
    fn test_id_round_trips_through_display() {
        let id = BusinessId::new();
        let parsed = BusinessId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_id_from_uuid_preserves_inner() {
        let uuid = Uuid::new_v4();
        let id = ProductId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = CustomerId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
    }

    #[test]
    fn test_id_rejects_malformed_input() {
        assert!(ReturnId::from_str("not-a-uuid").is_err());
    }
}
