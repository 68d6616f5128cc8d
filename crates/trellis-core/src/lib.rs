mod component;
pub use component::{ProjectComponent, TableRef};

pub mod connection;

mod error;
pub use error::{Error, IntoError};

pub mod field;

mod manager;
pub use manager::{Manager, TypeToken};

pub mod mapper;

pub mod naming;

pub mod schema;
pub use schema::Project;

/// A Result type alias that uses trellis' [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        connection::ClobRef,
        field::{
            ComparableField, FieldAccessor, FieldComparison, FieldIdentifier, FieldIdentity,
            ReferenceField,
        },
        mapper::{ClobToStringMapper, IdentityMapper, IntToBoolMapper, TypeMapper},
        Error, Manager, ProjectComponent, Result, TableRef, TypeToken,
    };
    pub use std::{option::Option, string::String, sync::OnceLock, vec::Vec};
}
