//! Composite identities for data-model entities.
//!
//! Annotating an entity struct with [`composite_id`] groups the fields that
//! form its primary key under a single key value with equality and hashing,
//! and (when an explicit `using(..)` list is given) generates conversions
//! between the flat entity and its keyed representation:
//!
//! ```
//! use composite_id::{composite_id, BelongsTo, Entity};
//!
//! struct Customer;
//!
//! impl Entity for Customer {
//!     type Key = i64;
//! }
//!
//! #[composite_id(using(customer, id))]
//! #[derive(Default)]
//! struct Order {
//!     #[belongs_to(key = "customer_id")]
//!     customer: BelongsTo<Customer>,
//!     #[id]
//!     id: Option<i64>,
//!     note: String,
//! }
//!
//! let order = Order {
//!     customer: BelongsTo::from_key(7),
//!     id: Some(42),
//!     note: "first".into(),
//! };
//!
//! assert!(order.composite_id() == OrderId::new(7, 42));
//! ```
//!
//! Generated conversions build fresh instances through `Default` and copy
//! plain fields through `Clone`, so the flat entity and its plainly stored
//! field types need to implement both.

pub use composite_id_macros::composite_id;

mod relation;
pub use relation::{BelongsTo, HasMany, Relation};

use std::hash::Hash;

/// An entity addressable by a key value. Implemented by hand for entities
/// with a scalar key, and generated by [`composite_id`] for entities with a
/// synthesized composite key.
pub trait Entity {
    /// The identity value for this entity.
    type Key: Clone + PartialEq + Hash;
}

/// Schema metadata for a synthesized composite key type.
pub trait CompositeKey {
    /// Storage keys of the key fields, in declaration order.
    fn storage_keys() -> &'static [&'static str];
}
