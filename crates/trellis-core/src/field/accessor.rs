use super::{BaseField, FieldIdentifier, FieldIdentity, Predicate, PredicateKind};
use crate::mapper::TypeMapper;
use crate::Result;

use std::fmt;
use std::sync::Arc;

/// Reads the language value of a field, `None` being null.
pub type Getter<E, V> = dyn Fn(&E) -> Option<V> + Send + Sync;

/// Writes the language value of a field.
pub type Setter<E, V> = dyn Fn(&mut E, V) + Send + Sync;

/// The accessor facet of a field.
pub trait FieldAccessor<E, D, V>: FieldIdentity {
    /// Reads the language value of this field from an entity. `None` is the
    /// null value.
    fn get(&self, entity: &E) -> Option<V>;

    /// Writes the language value of this field to an entity.
    fn set(&self, entity: &mut E, value: V);

    fn getter(&self) -> &Getter<E, V>;

    fn setter(&self) -> &Setter<E, V>;

    fn type_mapper(&self) -> &dyn TypeMapper<D, V>;

    /// Reads the field and converts it to its database value.
    fn get_database_value(&self, entity: &E) -> Result<Option<D>> {
        self.type_mapper()
            .to_database_value(self.get(entity).as_ref())
    }

    /// A setter that assigns `value` to this field of any entity it is applied
    /// to.
    fn set_to(&self, value: V) -> FieldSetter<E, D, V>;

    /// Matches entities whose value for this field is null.
    fn is_null(&self) -> Predicate<E, D, V>;

    /// Matches entities whose value for this field is not null.
    fn is_not_null(&self) -> Predicate<E, D, V>;
}

/// Accessor facet: wraps the identity facet with a getter, a setter and the
/// type mapper of the field.
///
/// Cloning is cheap; every predicate and comparator built from a field shares
/// the same accessor.
pub struct AccessorField<E, D, V> {
    inner: Arc<Accessor<E, D, V>>,
}

struct Accessor<E, D, V> {
    base: BaseField,
    getter: Box<Getter<E, V>>,
    setter: Box<Setter<E, V>>,
    type_mapper: Box<dyn TypeMapper<D, V>>,
}

impl<E, D, V> AccessorField<E, D, V> {
    pub fn new(
        base: BaseField,
        getter: impl Fn(&E) -> Option<V> + Send + Sync + 'static,
        setter: impl Fn(&mut E, V) + Send + Sync + 'static,
        type_mapper: impl TypeMapper<D, V> + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Accessor {
                base,
                getter: Box::new(getter),
                setter: Box::new(setter),
                type_mapper: Box::new(type_mapper),
            }),
        }
    }

    pub(super) fn predicate(&self, kind: PredicateKind<V>) -> Predicate<E, D, V> {
        Predicate::new(self.clone(), kind)
    }
}

impl<E, D, V> FieldIdentity for AccessorField<E, D, V> {
    fn identifier(&self) -> &FieldIdentifier {
        self.inner.base.identifier()
    }

    fn is_unique(&self) -> bool {
        self.inner.base.is_unique()
    }
}

impl<E, D, V> FieldAccessor<E, D, V> for AccessorField<E, D, V> {
    fn get(&self, entity: &E) -> Option<V> {
        (self.inner.getter)(entity)
    }

    fn set(&self, entity: &mut E, value: V) {
        (self.inner.setter)(entity, value)
    }

    fn getter(&self) -> &Getter<E, V> {
        self.inner.getter.as_ref()
    }

    fn setter(&self) -> &Setter<E, V> {
        self.inner.setter.as_ref()
    }

    fn type_mapper(&self) -> &dyn TypeMapper<D, V> {
        self.inner.type_mapper.as_ref()
    }

    fn set_to(&self, value: V) -> FieldSetter<E, D, V> {
        FieldSetter {
            field: self.clone(),
            value,
        }
    }

    fn is_null(&self) -> Predicate<E, D, V> {
        self.predicate(PredicateKind::IsNull)
    }

    fn is_not_null(&self) -> Predicate<E, D, V> {
        self.predicate(PredicateKind::IsNotNull)
    }
}

impl<E, D, V> Clone for AccessorField<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E, D, V> fmt::Debug for AccessorField<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorField")
            .field("identifier", self.identifier())
            .field("unique", &self.is_unique())
            .field("language_type", &self.type_mapper().language_type())
            .finish()
    }
}

/// Assigns a fixed value to one field of an entity.
pub struct FieldSetter<E, D, V> {
    field: AccessorField<E, D, V>,
    value: V,
}

impl<E, D, V: Clone> FieldSetter<E, D, V> {
    pub fn identifier(&self) -> &FieldIdentifier {
        self.field.identifier()
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn apply(&self, entity: &mut E) {
        self.field.set(entity, self.value.clone());
    }
}

impl<E, D, V: fmt::Debug> fmt::Debug for FieldSetter<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSetter")
            .field("identifier", self.field.identifier())
            .field("value", &self.value)
            .finish()
    }
}
