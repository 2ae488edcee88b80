use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use composite_id::{BelongsTo, CompositeKey, Entity, Relation};
use pretty_assertions::assert_eq;
use tests::{Order, OrderComposite, OrderId};

fn order() -> Order {
    let mut order = Order::default();
    order.customer = BelongsTo::from_key(7);
    order.id = Some(42);
    order.prop = "first".to_string();
    order.items.push("mk-1".to_string());
    order
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn round_trip_restores_key_and_carry_over_fields() {
    let composite = order().composite();
    assert_eq!(composite.prop, "first");

    let flat = composite.flat();
    assert_eq!(flat.customer.key(), Some(&7));
    assert_eq!(flat.id, Some(42));
    assert_eq!(flat.prop, "first");
}

#[test]
fn round_trip_with_unset_identifier_keeps_relation_key() {
    let mut order = order();
    order.id = None;

    let flat = order.composite().flat();
    assert_eq!(flat.customer.key(), Some(&7));
    assert_eq!(flat.id, Some(0));
    assert_eq!(flat.prop, "first");
}

#[test]
fn collection_relations_stay_structural_only() {
    let composite = order().composite();

    // Present on the keyed shape, but never copied by the conversions.
    assert!(composite.items.keys().is_empty());
    assert!(composite.flat().items.keys().is_empty());
}

#[test]
fn composite_id_copies_current_key_values() {
    let id = order().composite_id();

    assert_eq!(id.customer.key(), Some(&7));
    assert_eq!(id.id, 42);
}

#[test]
fn unset_optional_identifier_leaves_the_default() {
    let mut order = order();
    order.id = None;

    assert_eq!(order.composite_id().id, 0);
}

#[test]
fn constructor_matches_field_by_field_construction() {
    let a = OrderId::new(7, 42);

    let mut b = OrderId::default();
    b.customer.set_key(Some(7));
    b.id = 42;

    assert!(a == b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn equality_follows_scalar_projections_in_order() {
    let id = OrderId::new(7, 42);

    assert!(id == order().composite_id());
    assert!(id != OrderId::new(8, 42));
    assert!(id != OrderId::new(7, 41));
}

#[test]
fn absent_composite_identifier_is_tolerated_by_flat() {
    let mut composite = OrderComposite::default();
    composite.prop = "late".to_string();

    let flat = composite.flat();
    assert_eq!(flat.customer.key(), None);
    assert_eq!(flat.id, None);
    assert_eq!(flat.prop, "late");
}

#[test]
fn storage_keys_follow_declaration_order() {
    assert_eq!(OrderId::storage_keys(), ["customer_id", "id"]);
}

#[test]
#[should_panic(expected = "relation key accessed before it was set")]
fn hashing_requires_a_resolved_relation_key() {
    hash_of(&OrderId::default());
}

#[test]
fn flat_and_keyed_shapes_share_the_key_type() {
    fn assert_key<T: Entity<Key = OrderId>>() {}

    assert_key::<Order>();
    assert_key::<OrderComposite>();
}
