use super::{Attributes, TableId};

use std::fmt;

/// The primary key of a table.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PrimaryKey {
    /// Columns composing the primary key, in declaration order. For composite
    /// keys this order is the order of the key tuple.
    pub columns: Vec<PrimaryKeyColumn>,
}

impl PrimaryKey {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn is_composite(&self) -> bool {
        self.columns.len() > 1
    }
}

/// One column of a primary key. References a [`Column`](super::Column) of the
/// same table by name.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryKeyColumn {
    pub id: PrimaryKeyColumnId,

    /// Name of the referenced column
    pub name: String,

    pub attributes: Attributes,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct PrimaryKeyColumnId {
    pub table: TableId,
    pub index: usize,
}

impl fmt::Debug for PrimaryKeyColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "PrimaryKeyColumnId({}/{})", self.table.0, self.index)
    }
}
