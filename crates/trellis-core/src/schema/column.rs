use super::{Attributes, TableId};

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the project. Also carries the id of
    /// the owning table.
    pub id: ColumnId,

    /// The name of the column in the database.
    pub name: String,

    /// Name of the type mapper converting between the database value and the
    /// language value of this column.
    pub type_mapper: String,

    /// The database storage type, as reported by the database.
    pub database_type: Option<String>,

    /// Whether or not the column is nullable
    pub nullable: bool,

    pub attributes: Attributes,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl From<&Column> for ColumnId {
    fn from(value: &Column) -> Self {
        value.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({}/{})", self.table.0, self.index)
    }
}
