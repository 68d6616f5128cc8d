//! Conversion between the value a column holds in the database and the value
//! an entity exposes.

mod clob;
pub use clob::{ClobToStringMapper, MAX_CLOB_LENGTH};

mod identity;
pub use identity::IdentityMapper;

mod int_bool;
pub use int_bool::IntToBoolMapper;

mod registry;
pub use registry::{MapperInfo, MapperRegistry};

use crate::Result;

/// Converts the values of one column between the database type `D` and the
/// language type `V`.
///
/// `None` is the null value; null always maps to null in both directions.
/// Conversions fail with a type conversion error instead of truncating.
pub trait TypeMapper<D, V>: Send + Sync {
    /// Name of the language type, for diagnostics.
    fn language_type(&self) -> &'static str;

    /// Name of the database type, for diagnostics.
    fn database_type(&self) -> &'static str;

    fn to_language_value(&self, value: Option<&D>) -> Result<Option<V>>;

    fn to_database_value(&self, value: Option<&V>) -> Result<Option<D>>;

    /// `true` when both representations are identical and callers may skip
    /// the conversion.
    fn is_identity_mapper(&self) -> bool {
        false
    }
}
