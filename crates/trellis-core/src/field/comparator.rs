use super::{AccessorField, FieldAccessor, FieldIdentifier, FieldIdentity};

use std::cmp::Ordering;
use std::fmt;

/// Where null values sort relative to non-null values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullOrder {
    /// The natural order of `Option`: nulls sort before every non-null value,
    /// the same as [`NullOrder::First`].
    #[default]
    Natural,

    /// Nulls sort before every non-null value.
    First,

    /// Nulls sort after every non-null value.
    Last,
}

/// Orders entities by the value of one field.
///
/// Two null values compare equal, so sorting with a stable sort keeps their
/// relative input order. No other tie-break is provided.
pub struct FieldComparator<E, D, V> {
    field: AccessorField<E, D, V>,
    nulls: NullOrder,
    reversed: bool,
}

impl<E, D, V> FieldComparator<E, D, V> {
    pub(super) fn new(field: AccessorField<E, D, V>, nulls: NullOrder) -> Self {
        Self {
            field,
            nulls,
            reversed: false,
        }
    }

    pub fn identifier(&self) -> &FieldIdentifier {
        self.field.identifier()
    }

    pub fn null_order(&self) -> NullOrder {
        self.nulls
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The same comparator with the order of non-null values reversed. The
    /// position of nulls is unaffected.
    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }
}

impl<E, D, V: Ord> FieldComparator<E, D, V> {
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        let a = self.field.get(a);
        let b = self.field.get(b);

        match (a, b, self.nulls) {
            (None, None, _) => Ordering::Equal,
            (None, Some(_), NullOrder::Natural | NullOrder::First) => Ordering::Less,
            (Some(_), None, NullOrder::Natural | NullOrder::First) => Ordering::Greater,
            (None, Some(_), NullOrder::Last) => Ordering::Greater,
            (Some(_), None, NullOrder::Last) => Ordering::Less,
            (a, b, _) => {
                let ordering = a.cmp(&b);
                if self.reversed {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
        }
    }
}

impl<E, D, V> Clone for FieldComparator<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            nulls: self.nulls,
            reversed: self.reversed,
        }
    }
}

impl<E, D, V> fmt::Debug for FieldComparator<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldComparator")
            .field("identifier", self.identifier())
            .field("nulls", &self.nulls)
            .field("reversed", &self.reversed)
            .finish()
    }
}
