use super::{AccessorField, FieldAccessor, FieldIdentifier, FieldIdentity, Inclusion, ValueSet};

use std::fmt;

/// A condition on one field of an entity.
///
/// Built from a field, e.g. `field.between(10, 20)`, and evaluated against
/// entities with [`Predicate::test`].
pub struct Predicate<E, D, V> {
    field: AccessorField<E, D, V>,
    kind: PredicateKind<V>,
    negated: bool,
}

/// The operator and operands of a [`Predicate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredicateKind<V> {
    /// Equal to the operand; a `None` operand matches null values only.
    Equal(Option<V>),

    /// Not equal to the operand.
    NotEqual(Option<V>),

    LessThan(V),
    LessOrEqual(V),
    GreaterThan(V),
    GreaterOrEqual(V),

    Between {
        start: V,
        end: V,
        inclusion: Inclusion,
    },

    NotBetween {
        start: V,
        end: V,
        inclusion: Inclusion,
    },

    /// Member of the set.
    In(ValueSet<V>),

    /// Not a member of the set.
    NotIn(ValueSet<V>),

    IsNull,
    IsNotNull,
}

impl<E, D, V> Predicate<E, D, V> {
    pub(super) fn new(field: AccessorField<E, D, V>, kind: PredicateKind<V>) -> Self {
        Self {
            field,
            kind,
            negated: false,
        }
    }

    pub fn identifier(&self) -> &FieldIdentifier {
        self.field.identifier()
    }

    pub fn kind(&self) -> &PredicateKind<V> {
        &self.kind
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// The logical negation of this predicate.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }
}

impl<E, D, V: PartialOrd> Predicate<E, D, V> {
    /// Evaluates the predicate against `entity`.
    pub fn test(&self, entity: &E) -> bool {
        let value = self.field.get(entity);
        self.kind.matches(value.as_ref()) != self.negated
    }
}

impl<V: PartialOrd> PredicateKind<V> {
    /// Evaluates the operator against a field value, `None` being null.
    ///
    /// Ordering operators never match null. Equality and membership treat null
    /// as a value distinct from every operand.
    pub fn matches(&self, value: Option<&V>) -> bool {
        use PredicateKind::*;

        match self {
            IsNull => value.is_none(),
            IsNotNull => value.is_some(),
            Equal(operand) => value == operand.as_ref(),
            NotEqual(operand) => value != operand.as_ref(),
            In(set) => value.is_some_and(|value| set.contains(value)),
            NotIn(set) => !value.is_some_and(|value| set.contains(value)),
            LessThan(operand) => value.is_some_and(|value| value < operand),
            LessOrEqual(operand) => value.is_some_and(|value| value <= operand),
            GreaterThan(operand) => value.is_some_and(|value| value > operand),
            GreaterOrEqual(operand) => value.is_some_and(|value| value >= operand),
            Between {
                start,
                end,
                inclusion,
            } => value.is_some_and(|value| inclusion.contains(start, end, value)),
            NotBetween {
                start,
                end,
                inclusion,
            } => value.is_some_and(|value| !inclusion.contains(start, end, value)),
        }
    }
}

impl<E, D, V: Clone> Clone for Predicate<E, D, V> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            kind: self.kind.clone(),
            negated: self.negated,
        }
    }
}

impl<E, D, V: PartialEq> PartialEq for Predicate<E, D, V> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier() == other.identifier()
            && self.kind == other.kind
            && self.negated == other.negated
    }
}

impl<E, D, V: fmt::Debug> fmt::Debug for Predicate<E, D, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("identifier", self.identifier())
            .field("kind", &self.kind)
            .field("negated", &self.negated)
            .finish()
    }
}
