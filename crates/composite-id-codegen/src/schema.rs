mod attr;
pub(crate) use attr::AttributeTag;

mod entity;
pub(crate) use entity::Entity;

mod error;
pub(crate) use error::{Diagnostic, ErrorSet};

mod field;
pub(crate) use field::Field;

mod key_set;
pub(crate) use key_set::{KeySet, Mode};

mod partition;
pub(crate) use partition::{partition, Partition};
