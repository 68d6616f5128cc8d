use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Names a field by its schema, table and column, independent of any document
/// tree. Used as a map key and as the stable handle in generated code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldIdentifier {
    schema: String,
    table: String,
    column: String,
}

impl FieldIdentifier {
    pub fn new(
        schema: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn column_name(&self) -> &str {
        &self.column
    }

    /// Fails unless every part of the identifier is non-empty.
    pub fn validate(&self) -> Result<()> {
        for (part, value) in [
            ("schema", &self.schema),
            ("table", &self.table),
            ("column", &self.column),
        ] {
            if value.is_empty() {
                return Err(Error::invalid_argument(format!(
                    "field identifier `{self}` has an empty {part} name"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for FieldIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.schema, self.table, self.column)
    }
}
