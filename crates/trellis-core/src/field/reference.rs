use super::{
    AccessorField, BaseField, FieldAccessor, FieldIdentifier, FieldIdentity, FieldSetter, Getter,
    Predicate, Setter,
};
use crate::mapper::TypeMapper;
use crate::Result;

use std::fmt;

/// A field without a comparison facet, for values that have no total order
/// such as floating point numbers.
///
/// Supports the null checks and setters but no ordering predicates or
/// comparators.
pub struct ReferenceField<E, D, V> {
    identity: BaseField,
    accessor: AccessorField<E, D, V>,
}

impl<E, D, V> ReferenceField<E, D, V> {
    pub fn new(
        identifier: FieldIdentifier,
        getter: impl Fn(&E) -> Option<V> + Send + Sync + 'static,
        setter: impl Fn(&mut E, V) + Send + Sync + 'static,
        type_mapper: impl TypeMapper<D, V> + 'static,
        unique: bool,
    ) -> Result<Self> {
        let identity = BaseField::new(identifier, unique)?;
        let accessor = AccessorField::new(identity.clone(), getter, setter, type_mapper);
        Ok(Self { identity, accessor })
    }

    pub fn accessor(&self) -> &AccessorField<E, D, V> {
        &self.accessor
    }
}

impl<E, D, V> FieldIdentity for ReferenceField<E, D, V> {
    fn identifier(&self) -> &FieldIdentifier {
        self.identity.identifier()
    }

    fn is_unique(&self) -> bool {
        self.identity.is_unique()
    }
}

impl<E, D, V> FieldAccessor<E, D, V> for ReferenceField<E, D, V> {
    fn get(&self, entity: &E) -> Option<V> {
        self.accessor.get(entity)
    }

    fn set(&self, entity: &mut E, value: V) {
        self.accessor.set(entity, value)
    }

    fn getter(&self) -> &Getter<E, V> {
        self.accessor.getter()
    }

    fn setter(&self) -> &Setter<E, V> {
        self.accessor.setter()
    }

    fn type_mapper(&self) -> &dyn TypeMapper<D, V> {
        self.accessor.type_mapper()
    }

    fn set_to(&self, value: V) -> FieldSetter<E, D, V> {
        self.accessor.set_to(value)
    }

    fn is_null(&self) -> Predicate<E, D, V> {
        self.accessor.is_null()
    }

    fn is_not_null(&self) -> Predicate<E, D, V> {
        self.accessor.is_not_null()
    }
}

impl<E, D, V> Clone for ReferenceField<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<E, D, V> fmt::Debug for ReferenceField<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceField")
            .field("identifier", self.identifier())
            .field("unique", &self.is_unique())
            .finish()
    }
}
