//! Typed fields and the predicates and comparators built from them.
//!
//! A field is composed from three facets over one [`FieldIdentifier`]:
//!
//! * identity ([`FieldIdentity`]): the identifier and whether the column is
//!   unique,
//! * accessor ([`FieldAccessor`]): the getter, setter and type mapper, plus the
//!   null checks,
//! * comparison ([`FieldComparison`]): comparators and every predicate that
//!   depends on the value order.
//!
//! [`ComparableField`] carries all three. [`ReferenceField`] omits the
//! comparison facet and is used for values without a total order.

mod accessor;
pub use accessor::{AccessorField, FieldAccessor, FieldSetter, Getter, Setter};

mod comparable;
pub use comparable::ComparableField;

mod comparator;
pub use comparator::{FieldComparator, NullOrder};

mod comparison;
pub use comparison::{ComparisonField, FieldComparison};

mod identifier;
pub use identifier::FieldIdentifier;

mod identity;
pub use identity::{BaseField, FieldIdentity};

mod inclusion;
pub use inclusion::Inclusion;

mod predicate;
pub use predicate::{Predicate, PredicateKind};

mod value_set;
pub use value_set::ValueSet;

mod reference;
pub use reference::ReferenceField;
