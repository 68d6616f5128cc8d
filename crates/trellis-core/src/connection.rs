//! Values bound to a live database connection.
//!
//! Only the boundary lives here: the capability a connection offers for
//! creating large objects, arrays and structured values, plus in-memory
//! large objects for values that are built outside a connection. No driver is
//! provided.

mod lob;
pub use lob::{Blob, BlobRef, ByteBlob, Clob, ClobRef, SqlXml, StringClob, StringSqlXml};

mod value;
pub use value::{SqlArray, SqlStruct, SqlValue};

use crate::Result;

use std::fmt::Debug;

/// Creates connection-bound values.
///
/// Every method fails with a driver capability error when the driver does not
/// support the requested value or the connection is closed. Implementations
/// surface the driver's error as is; see [`crate::Error::driver`],
/// [`crate::Error::unsupported_feature`] and
/// [`crate::Error::connection_closed`].
pub trait CreateFromConnection: Debug + Send + Sync {
    /// Creates an empty character large object.
    fn create_clob(&self) -> Result<ClobRef>;

    /// Creates an empty binary large object.
    fn create_blob(&self) -> Result<BlobRef>;

    /// Creates an empty national character large object.
    fn create_nclob(&self) -> Result<ClobRef>;

    /// Creates an empty XML value.
    fn create_sqlxml(&self) -> Result<Box<dyn SqlXml>>;

    /// Creates an array whose elements have the database type `type_name`.
    fn create_array_of(&self, type_name: &str, elements: Vec<SqlValue>) -> Result<SqlArray>;

    /// Creates a value of the structured database type `type_name`.
    fn create_struct(&self, type_name: &str, attributes: Vec<SqlValue>) -> Result<SqlStruct>;
}
