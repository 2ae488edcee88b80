//! End-to-end fixtures for the `#[composite_id]` macro, shared by the
//! integration tests.

use composite_id::{composite_id, BelongsTo, Entity, HasMany};

pub struct Customer;

impl Entity for Customer {
    type Key = i64;
}

pub struct Instance;

impl Entity for Instance {
    type Key = String;
}

/// Nested mode: explicit key set, flat shape kept, keyed shape derived.
#[composite_id(using(customer, id))]
#[derive(Default)]
pub struct Order {
    #[belongs_to(key = "customer_id")]
    pub customer: BelongsTo<Customer>,
    #[id(custom = "id")]
    pub id: Option<i64>,
    pub prop: String,
    #[has_many]
    pub items: HasMany<Instance>,
}

/// Wrap mode: no independent identifier; the `#[key]` fields are folded
/// into a single composite identifier on the entity itself.
#[composite_id]
#[derive(Default)]
pub struct Binding {
    #[key]
    #[belongs_to]
    pub customer: BelongsTo<Customer>,
    #[key]
    #[belongs_to]
    pub instance: BelongsTo<Instance>,
    pub note: String,
}
