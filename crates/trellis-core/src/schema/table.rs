use super::{Attributes, Column, ColumnId, PrimaryKey, SchemaId};

use std::fmt;

/// A database table
#[derive(Debug, Clone)]
pub struct Table {
    /// Uniquely identifies a table
    pub id: TableId,

    /// The owning schema
    pub schema: SchemaId,

    /// Name of the table
    pub name: String,

    /// The table's columns, in declaration order
    pub columns: Vec<Column>,

    pub primary_key: PrimaryKey,

    pub attributes: Attributes,
}

/// Uniquely identifies a table
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct TableId(pub usize);

impl Table {
    pub fn column(&self, id: impl Into<ColumnId>) -> Option<&Column> {
        let id = id.into();
        if id.table != self.id {
            return None;
        }
        self.columns.get(id.index)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub(crate) fn new(id: TableId, schema: SchemaId, name: String) -> Self {
        Self {
            id,
            schema,
            name,
            columns: vec![],
            primary_key: PrimaryKey::default(),
            attributes: Attributes::default(),
        }
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "TableId({})", self.0)
    }
}
