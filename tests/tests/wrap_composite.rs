use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use composite_id::{CompositeKey, Entity, Relation};
use pretty_assertions::assert_eq;
use tests::{Binding, BindingId};

fn binding_id(customer: i64, instance: &str) -> BindingId {
    let mut id = BindingId::default();
    id.customer.set_key(Some(customer));
    id.instance.set_key(Some(instance.to_string()));
    id
}

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn key_fields_are_grouped_under_one_identifier() {
    // The key fields no longer exist on the flat shape; this literal is the
    // entity's entire rewritten surface.
    let binding = Binding {
        id: Some(binding_id(7, "mk-1")),
        note: "paired".to_string(),
    };

    let id = binding.id.as_ref().unwrap();
    assert_eq!(id.customer.key(), Some(&7));
    assert_eq!(id.instance.key(), Some(&"mk-1".to_string()));
    assert_eq!(binding.note, "paired");
}

#[test]
fn identifier_starts_unset() {
    assert!(Binding::default().id.is_none());
}

#[test]
fn key_values_compare_and_hash_by_scalar_projection() {
    let a = binding_id(7, "mk-1");
    let b = binding_id(7, "mk-1");
    let c = binding_id(7, "mk-2");

    assert!(a == b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert!(a != c);
}

#[test]
fn relation_storage_keys_default_to_field_id() {
    assert_eq!(BindingId::storage_keys(), ["customer_id", "instance_id"]);
}

#[test]
fn entity_is_addressable_by_its_composite_key() {
    fn assert_key<T: Entity<Key = BindingId>>() {}

    assert_key::<Binding>();
}
