use std::collections::BTreeSet;
use std::fmt;

/// The operands of a membership predicate.
///
/// Duplicates collapse on construction. The lookup is bound when the set is
/// built, so membership can be tested for any `V` once a set exists.
pub struct ValueSet<V> {
    values: BTreeSet<V>,
    contains: fn(&BTreeSet<V>, &V) -> bool,
}

fn ordered_contains<V: Ord>(values: &BTreeSet<V>, value: &V) -> bool {
    values.contains(value)
}

impl<V: Ord> ValueSet<V> {
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self::from(values.into_iter().collect::<BTreeSet<_>>())
    }
}

impl<V> ValueSet<V> {
    pub fn contains(&self, value: &V) -> bool {
        (self.contains)(&self.values, value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        self.values.iter()
    }

    pub fn as_set(&self) -> &BTreeSet<V> {
        &self.values
    }
}

impl<V: Ord> From<BTreeSet<V>> for ValueSet<V> {
    fn from(values: BTreeSet<V>) -> Self {
        Self {
            values,
            contains: ordered_contains::<V>,
        }
    }
}

impl<V: Ord> FromIterator<V> for ValueSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<V: Clone> Clone for ValueSet<V> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            contains: self.contains,
        }
    }
}

impl<V: PartialEq> PartialEq for ValueSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<V: Eq> Eq for ValueSet<V> {}

impl<V: fmt::Debug> fmt::Debug for ValueSet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.iter()).finish()
    }
}
