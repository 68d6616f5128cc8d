use super::TypeMapper;
use crate::Result;

use std::fmt;
use std::marker::PhantomData;

/// Passes values through unchanged.
pub struct IdentityMapper<T> {
    _p: PhantomData<fn() -> T>,
}

impl<T> IdentityMapper<T> {
    pub const fn new() -> Self {
        Self { _p: PhantomData }
    }
}

impl<T: Clone> TypeMapper<T, T> for IdentityMapper<T> {
    fn language_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn database_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn to_language_value(&self, value: Option<&T>) -> Result<Option<T>> {
        Ok(value.cloned())
    }

    fn to_database_value(&self, value: Option<&T>) -> Result<Option<T>> {
        Ok(value.cloned())
    }

    fn is_identity_mapper(&self) -> bool {
        true
    }
}

impl<T> Default for IdentityMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IdentityMapper<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for IdentityMapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IdentityMapper<{}>", std::any::type_name::<T>())
    }
}
