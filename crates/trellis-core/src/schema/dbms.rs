use super::{Attributes, SchemaId};

use std::fmt;

/// Root node of the document tree: one database management system.
#[derive(Debug, Clone)]
pub struct Dbms {
    /// Uniquely identifies the dbms in the project
    pub id: DbmsId,

    pub name: String,

    /// Kind of database, e.g. `postgresql`. Selects the naming convention.
    pub type_name: String,

    /// Schemas of this dbms, in document order
    pub schemas: Vec<SchemaId>,

    pub attributes: Attributes,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct DbmsId(pub usize);

impl fmt::Debug for DbmsId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "DbmsId({})", self.0)
    }
}
