//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around [`bson::oid::ObjectId`] with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_object_id()`
/// - `From<ObjectId>` and `Into<ObjectId>` implementations
/// - `From<$name> for Bson` so IDs can be used directly in `doc!` filters
///
/// # Example
///
/// ```rust
/// # use mercado_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new(bson::oid::ObjectId::new());
/// let order_id = OrderId::new(bson::oid::ObjectId::new());
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(::bson::oid::ObjectId);

        impl $name {
            /// Create a new ID from an `ObjectId` value.
            #[must_use]
            pub const fn new(id: ::bson::oid::ObjectId) -> Self {
                Self(id)
            }

            /// Get the underlying `ObjectId` value.
            #[must_use]
            pub const fn as_object_id(&self) -> ::bson::oid::ObjectId {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<::bson::oid::ObjectId> for $name {
            fn from(id: ::bson::oid::ObjectId) -> Self {
                Self(id)
            }
        }

        impl From<$name> for ::bson::oid::ObjectId {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<$name> for ::bson::Bson {
            fn from(id: $name) -> Self {
                Self::ObjectId(id.0)
            }
        }
    };
}

// Define standard entity IDs
define_id!(CategoryId);
define_id!(ProductId);
define_id!(UserId);
define_id!(OrderId);
define_id!(ReviewId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bson::oid::ObjectId;

    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let oid = ObjectId::new();
        let id = ProductId::new(oid);
        assert_eq!(id.as_object_id(), oid);
        assert_eq!(ObjectId::from(id), oid);
        assert_eq!(ProductId::from(oid), id);
    }

    #[test]
    fn test_id_serde_transparent() {
        let oid = ObjectId::new();
        let id = CategoryId::new(oid);

        let as_bson = bson::to_bson(&id).unwrap();
        assert_eq!(as_bson, bson::Bson::ObjectId(oid));

        let back: CategoryId = bson::from_bson(as_bson).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display_matches_object_id() {
        let oid = ObjectId::new();
        let id = UserId::new(oid);
        assert_eq!(id.to_string(), oid.to_hex());
    }

    #[test]
    fn test_id_into_bson_for_filters() {
        let oid = ObjectId::new();
        let id = ReviewId::new(oid);
        let filter = bson::doc! { "_id": id };
        assert_eq!(filter.get_object_id("_id").unwrap(), oid);
    }
}
