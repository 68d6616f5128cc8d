use super::{
    AccessorField, BaseField, ComparisonField, FieldAccessor, FieldComparator, FieldComparison,
    FieldIdentifier, FieldIdentity, FieldSetter, Getter, Inclusion, Predicate, Setter,
};
use crate::mapper::TypeMapper;
use crate::Result;

use std::fmt;

/// A field whose values have a total order.
///
/// Holds the identity, accessor and comparison facets and implements each of
/// them by delegating to the facet.
pub struct ComparableField<E, D, V> {
    identity: BaseField,
    accessor: AccessorField<E, D, V>,
    comparison: ComparisonField<E, D, V>,
}

impl<E, D, V: Ord> ComparableField<E, D, V> {
    /// Builds a field from its parts.
    ///
    /// Fails with an invalid argument error if any part of `identifier` is
    /// empty.
    pub fn new(
        identifier: FieldIdentifier,
        getter: impl Fn(&E) -> Option<V> + Send + Sync + 'static,
        setter: impl Fn(&mut E, V) + Send + Sync + 'static,
        type_mapper: impl TypeMapper<D, V> + 'static,
        unique: bool,
    ) -> Result<Self> {
        let identity = BaseField::new(identifier, unique)?;
        let accessor = AccessorField::new(identity.clone(), getter, setter, type_mapper);
        let comparison = ComparisonField::new(accessor.clone());

        Ok(Self {
            identity,
            accessor,
            comparison,
        })
    }
}

impl<E, D, V> ComparableField<E, D, V> {
    pub fn accessor(&self) -> &AccessorField<E, D, V> {
        &self.accessor
    }
}

impl<E, D, V> FieldIdentity for ComparableField<E, D, V> {
    fn identifier(&self) -> &FieldIdentifier {
        self.identity.identifier()
    }

    fn is_unique(&self) -> bool {
        self.identity.is_unique()
    }
}

impl<E, D, V> FieldAccessor<E, D, V> for ComparableField<E, D, V> {
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

impl<E, D, V: Ord> FieldComparison<E, D, V> for ComparableField<E, D, V> {
    fn comparator(&self) -> FieldComparator<E, D, V> {
        self.comparison.comparator()
    }

    fn comparator_nulls_first(&self) -> FieldComparator<E, D, V> {
        self.comparison.comparator_nulls_first()
    }

    fn comparator_nulls_last(&self) -> FieldComparator<E, D, V> {
        self.comparison.comparator_nulls_last()
    }

    fn equal(&self, value: impl Into<Option<V>>) -> Predicate<E, D, V> {
        self.comparison.equal(value)
    }

    fn not_equal(&self, value: impl Into<Option<V>>) -> Predicate<E, D, V> {
        self.comparison.not_equal(value)
    }

    fn less_than(&self, value: V) -> Predicate<E, D, V> {
        self.comparison.less_than(value)
    }

    fn less_or_equal(&self, value: V) -> Predicate<E, D, V> {
        self.comparison.less_or_equal(value)
    }

    fn greater_than(&self, value: V) -> Predicate<E, D, V> {
        self.comparison.greater_than(value)
    }

    fn greater_or_equal(&self, value: V) -> Predicate<E, D, V> {
        self.comparison.greater_or_equal(value)
    }

    fn between_with(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E, D, V> {
        self.comparison.between_with(start, end, inclusion)
    }

    fn not_between_with(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E, D, V> {
        self.comparison.not_between_with(start, end, inclusion)
    }

    fn in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E, D, V> {
        self.comparison.in_set(values)
    }

    fn not_in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E, D, V> {
        self.comparison.not_in_set(values)
    }
}

impl<E, D, V> Clone for ComparableField<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            identity: self.identity.clone(),
            accessor: self.accessor.clone(),
            comparison: self.comparison.clone(),
        }
    }
}

impl<E, D, V> fmt::Debug for ComparableField<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparableField")
            .field("identifier", self.identifier())
            .field("unique", &self.is_unique())
            .field("language_type", &self.type_mapper().language_type())
            .finish()
    }
}
