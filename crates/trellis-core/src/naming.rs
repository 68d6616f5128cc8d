//! How the full name of a database entity is written.

mod sql;
pub use sql::{Dialect, SqlNamingConvention};

use crate::field::FieldIdentifier;
use crate::schema::{Column, PrimaryKeyColumn, Project, Table};
use crate::Result;

use indexmap::IndexSet;

/// Builds qualified names and quotes names and values for one database
/// dialect.
///
/// The node based methods walk the document tree to the parent names and then
/// call the string forms. A missing parent is a resolution error.
pub trait NamingConvention: Send + Sync {
    /// Full name of a column, typically `schema.table.column` with each part
    /// enclosed.
    fn full_name(&self, schema: &str, table: &str, column: &str) -> String;

    /// Full name of a table, typically `schema.table` with each part enclosed.
    fn full_table_name(&self, schema: &str, table: &str) -> String;

    /// Quotes a value, such as a string literal.
    fn quote_field(&self, value: &str) -> String;

    /// Encloses a database name, such as a table or column name.
    fn enclose_field(&self, name: &str) -> String;

    /// Schema names to skip when enumerating the schemas of a dbms, typically
    /// system catalogs.
    fn schema_exclude_set(&self) -> IndexSet<String>;

    fn full_name_of_identifier(&self, identifier: &FieldIdentifier) -> String {
        self.full_name(
            identifier.schema_name(),
            identifier.table_name(),
            identifier.column_name(),
        )
    }

    fn full_name_of_column(&self, project: &Project, column: &Column) -> Result<String> {
        let table = project.table_of(column)?;
        let schema = project.schema_of(table)?;
        Ok(self.full_name(&schema.name, &table.name, &column.name))
    }

    fn full_name_of_table(&self, project: &Project, table: &Table) -> Result<String> {
        let schema = project.schema_of(table)?;
        Ok(self.full_table_name(&schema.name, &table.name))
    }

    fn full_name_of_primary_key_column(
        &self,
        project: &Project,
        pk_column: &PrimaryKeyColumn,
    ) -> Result<String> {
        let column = project.resolve_primary_key_column(pk_column)?;
        self.full_name_of_column(project, column)
    }

    fn is_schema_excluded(&self, schema: &str) -> bool {
        self.schema_exclude_set().contains(schema)
    }
}
