use super::{Attributes, DbmsId, TableId};

use std::fmt;

/// A database schema, child of a [`Dbms`](super::Dbms).
#[derive(Debug, Clone)]
pub struct Schema {
    pub id: SchemaId,

    /// The owning dbms
    pub dbms: DbmsId,

    pub name: String,

    /// Tables of this schema, in document order
    pub tables: Vec<TableId>,

    pub attributes: Attributes,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct SchemaId(pub usize);

impl fmt::Debug for SchemaId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "SchemaId({})", self.0)
    }
}
