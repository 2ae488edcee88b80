use crate::Entity;

/// Access to the referenced identity of a relation field. Generated
/// composite-key code projects relation fields through this trait.
pub trait Relation {
    type Key;

    /// The referenced identity, if it has been set.
    fn key(&self) -> Option<&Self::Key>;

    fn set_key(&mut self, key: Option<Self::Key>);

    /// The referenced identity. Composite-key projections require a
    /// resolved identity; panics when it has not been set.
    fn require_key(&self) -> &Self::Key;
}

/// A to-one relation to another entity, tracked by that entity's key.
pub struct BelongsTo<T: Entity> {
    key: Option<T::Key>,
}

impl<T: Entity> BelongsTo<T> {
    pub fn new() -> Self {
        Self { key: None }
    }

    pub fn from_key(key: T::Key) -> Self {
        Self { key: Some(key) }
    }
}

impl<T: Entity> Relation for BelongsTo<T> {
    type Key = T::Key;

    fn key(&self) -> Option<&T::Key> {
        self.key.as_ref()
    }

    fn set_key(&mut self, key: Option<T::Key>) {
        self.key = key;
    }

    fn require_key(&self) -> &T::Key {
        match &self.key {
            Some(key) => key,
            None => panic!("relation key accessed before it was set"),
        }
    }
}

// Manual impls: the entity type itself is never stored, so none of these
// should bound on `T`.

impl<T: Entity> Default for BelongsTo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for BelongsTo<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
        }
    }
}

/// A to-many relation, tracked by the referenced entities' keys. Carried
/// structurally on keyed shapes; never part of a composite key.
pub struct HasMany<T: Entity> {
    keys: Vec<T::Key>,
}

impl<T: Entity> HasMany<T> {
    pub fn new() -> Self {
        Self { keys: vec![] }
    }

    pub fn keys(&self) -> &[T::Key] {
        &self.keys
    }

    pub fn push(&mut self, key: T::Key) {
        self.keys.push(key);
    }
}

impl<T: Entity> Default for HasMany<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Clone for HasMany<T> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}
