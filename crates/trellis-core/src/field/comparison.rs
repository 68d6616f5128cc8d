use super::{
    AccessorField, FieldAccessor, FieldComparator, FieldIdentifier, FieldIdentity, FieldSetter,
    Getter, Inclusion, NullOrder, Predicate, PredicateKind, Setter,
};
use crate::mapper::TypeMapper;

use std::fmt;

/// The comparison facet of a field: every operation that depends on the order
/// of the field's values.
pub trait FieldComparison<E, D, V: Ord>: FieldAccessor<E, D, V> {
    /// Orders entities by the natural order of this field. Where null values
    /// sort is unspecified.
    fn comparator(&self) -> FieldComparator<E, D, V>;

    fn comparator_nulls_first(&self) -> FieldComparator<E, D, V>;

    fn comparator_nulls_last(&self) -> FieldComparator<E, D, V>;

    /// Matches entities whose value equals `value`. Passing `None` matches
    /// null values.
    fn equal(&self, value: impl Into<Option<V>>) -> Predicate<E, D, V>;

    fn not_equal(&self, value: impl Into<Option<V>>) -> Predicate<E, D, V>;

    fn less_than(&self, value: V) -> Predicate<E, D, V>;

    fn less_or_equal(&self, value: V) -> Predicate<E, D, V>;

    fn greater_than(&self, value: V) -> Predicate<E, D, V>;

    fn greater_or_equal(&self, value: V) -> Predicate<E, D, V>;

    /// Matches values in `start..=end`.
    fn between(&self, start: V, end: V) -> Predicate<E, D, V> {
        self.between_with(start, end, Inclusion::default())
    }

    fn between_with(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E, D, V>;

    /// Matches values outside `start..=end`.
    fn not_between(&self, start: V, end: V) -> Predicate<E, D, V> {
        self.not_between_with(start, end, Inclusion::default())
    }

    /// Matches values outside the range described by `start`, `end` and
    /// `inclusion`. A value on an exclusive boundary is outside the range.
    fn not_between_with(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E, D, V>;

    /// Matches values in `values`. Duplicates are ignored.
    fn in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E, D, V>;

    fn not_in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E, D, V>;
}

/// Comparison facet: wraps the accessor facet of a field whose values have a
/// total order.
pub struct ComparisonField<E, D, V> {
    accessor: AccessorField<E, D, V>,
}

impl<E, D, V> ComparisonField<E, D, V> {
    pub fn new(accessor: AccessorField<E, D, V>) -> Self {
        Self { accessor }
    }

    pub fn accessor(&self) -> &AccessorField<E, D, V> {
        &self.accessor
    }
}

impl<E, D, V> FieldIdentity for ComparisonField<E, D, V> {
    fn identifier(&self) -> &FieldIdentifier {
        self.accessor.identifier()
    }

    fn is_unique(&self) -> bool {
        self.accessor.is_unique()
    }
}

impl<E, D, V> FieldAccessor<E, D, V> for ComparisonField<E, D, V> {
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

impl<E, D, V: Ord> FieldComparison<E, D, V> for ComparisonField<E, D, V> {
    fn comparator(&self) -> FieldComparator<E, D, V> {
        FieldComparator::new(self.accessor.clone(), NullOrder::Natural)
    }

    fn comparator_nulls_first(&self) -> FieldComparator<E, D, V> {
        FieldComparator::new(self.accessor.clone(), NullOrder::First)
    }

    fn comparator_nulls_last(&self) -> FieldComparator<E, D, V> {
        FieldComparator::new(self.accessor.clone(), NullOrder::Last)
    }

    fn equal(&self, value: impl Into<Option<V>>) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::Equal(value.into()))
    }

    fn not_equal(&self, value: impl Into<Option<V>>) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::NotEqual(value.into()))
    }

    fn less_than(&self, value: V) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::LessThan(value))
    }

    fn less_or_equal(&self, value: V) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::LessOrEqual(value))
    }

    fn greater_than(&self, value: V) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::GreaterThan(value))
    }

    fn greater_or_equal(&self, value: V) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::GreaterOrEqual(value))
    }

    fn between_with(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::Between {
            start,
            end,
            inclusion,
        })
    }

    fn not_between_with(&self, start: V, end: V, inclusion: Inclusion) -> Predicate<E, D, V> {
        self.accessor.predicate(PredicateKind::NotBetween {
            start,
            end,
            inclusion,
        })
    }

    fn in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E, D, V> {
        self.accessor
            .predicate(PredicateKind::In(values.into_iter().collect()))
    }

    fn not_in_set(&self, values: impl IntoIterator<Item = V>) -> Predicate<E, D, V> {
        self.accessor
            .predicate(PredicateKind::NotIn(values.into_iter().collect()))
    }
}

impl<E, D, V> Clone for ComparisonField<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            accessor: self.accessor.clone(),
        }
    }
}

impl<E, D, V> fmt::Debug for ComparisonField<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparisonField")
            .field("accessor", &self.accessor)
            .finish()
    }
}
