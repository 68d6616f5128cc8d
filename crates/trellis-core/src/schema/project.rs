use super::{
    builder::BuildProject, Attributes, Column, ColumnId, Dbms, DbmsId, PrimaryKeyColumn,
    ProjectDef, Schema, SchemaId, Table, TableId,
};
use crate::field::FieldIdentifier;
use crate::{Error, Result};

/// A loaded document tree.
///
/// Nodes live in flat arenas indexed by their ids. Children know their parent
/// through a parent id, never through a reference, so a project can be
/// replaced wholesale on reload without leaving dangling pointers behind.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,

    pub dbmses: Vec<Dbms>,

    pub schemas: Vec<Schema>,

    pub tables: Vec<Table>,

    pub attributes: Attributes,
}

impl Project {
    pub fn from_def(def: ProjectDef) -> Result<Project> {
        let name = def.name.clone();
        let project = BuildProject::new(name).build(def)?;

        tracing::debug!(
            project = %project.name,
            dbmses = project.dbmses.len(),
            schemas = project.schemas.len(),
            tables = project.tables.len(),
            "indexed project document"
        );

        Ok(project)
    }

    pub fn from_json(src: &str) -> Result<Project> {
        ProjectDef::from_json(src)
            .map_err(|err| err.context(Error::invalid_schema("project document is not valid")))?
            .build()
    }

    pub fn dbms(&self, id: DbmsId) -> Result<&Dbms> {
        self.dbmses
            .get(id.0)
            .ok_or_else(|| Error::resolution(format!("no dbms with id {id:?}")))
    }

    pub fn schema(&self, id: SchemaId) -> Result<&Schema> {
        self.schemas
            .get(id.0)
            .ok_or_else(|| Error::resolution(format!("no schema with id {id:?}")))
    }

    pub fn table(&self, id: TableId) -> Result<&Table> {
        self.tables
            .get(id.0)
            .ok_or_else(|| Error::resolution(format!("no table with id {id:?}")))
    }

    pub fn column(&self, id: impl Into<ColumnId>) -> Result<&Column> {
        let id = id.into();
        self.table(id.table)?
            .column(id)
            .ok_or_else(|| Error::resolution(format!("no column with id {id:?}")))
    }

    /// The table owning `column`.
    pub fn table_of(&self, column: &Column) -> Result<&Table> {
        let table = self.table(column.id.table).map_err(|err| {
            err.context(Error::resolution(format!(
                "column `{}` has no parent table",
                column.name
            )))
        })?;

        match table.column(column.id) {
            Some(candidate) if candidate.name == column.name => Ok(table),
            _ => Err(Error::resolution(format!(
                "column `{}` is not a child of table `{}`",
                column.name, table.name
            ))),
        }
    }

    /// The schema owning `table`.
    pub fn schema_of(&self, table: &Table) -> Result<&Schema> {
        let schema = self.schema(table.schema).map_err(|err| {
            err.context(Error::resolution(format!(
                "table `{}` has no parent schema",
                table.name
            )))
        })?;

        if !schema.tables.contains(&table.id) {
            return Err(Error::resolution(format!(
                "table `{}` is not a child of schema `{}`",
                table.name, schema.name
            )));
        }

        Ok(schema)
    }

    /// The dbms owning `schema`.
    pub fn dbms_of(&self, schema: &Schema) -> Result<&Dbms> {
        let dbms = self.dbms(schema.dbms).map_err(|err| {
            err.context(Error::resolution(format!(
                "schema `{}` has no parent dbms",
                schema.name
            )))
        })?;

        if !dbms.schemas.contains(&schema.id) {
            return Err(Error::resolution(format!(
                "schema `{}` is not a child of dbms `{}`",
                schema.name, dbms.name
            )));
        }

        Ok(dbms)
    }

    /// Resolves the column a primary key column refers to.
    pub fn resolve_primary_key_column(&self, pk_column: &PrimaryKeyColumn) -> Result<&Column> {
        let table = self.table(pk_column.id.table)?;
        table.column_by_name(&pk_column.name).ok_or_else(|| {
            Error::resolution(format!(
                "cannot find column for primary key column `{}` of table `{}`",
                pk_column.name, table.name
            ))
        })
    }

    /// The columns of `table`'s primary key, in declaration order.
    pub fn primary_key_columns<'a>(&'a self, table: &'a Table) -> Result<Vec<&'a Column>> {
        table
            .primary_key
            .columns
            .iter()
            .map(|pk_column| self.resolve_primary_key_column(pk_column))
            .collect()
    }

    /// Name of `table` relative to the project: `dbms.schema.table`.
    pub fn relative_name(&self, table: &Table) -> Result<String> {
        let schema = self.schema_of(table)?;
        let dbms = self.dbms_of(schema)?;
        Ok(format!("{}.{}.{}", dbms.name, schema.name, table.name))
    }

    /// Finds a table by the name returned from [`Project::relative_name`].
    pub fn find_table_by_name(&self, relative_name: &str) -> Result<&Table> {
        let [dbms_name, schema_name, table_name] = split_relative_name(relative_name)?;

        self.dbmses
            .iter()
            .filter(|dbms| dbms.name == dbms_name)
            .flat_map(|dbms| dbms.schemas.iter())
            .filter_map(|id| self.schemas.get(id.0))
            .filter(|schema| schema.name == schema_name)
            .flat_map(|schema| schema.tables.iter())
            .filter_map(|id| self.tables.get(id.0))
            .find(|table| table.name == table_name)
            .ok_or_else(|| Error::resolution(format!("no table named `{relative_name}`")))
    }

    /// Finds the column a field identifier refers to, searching every dbms.
    pub fn resolve_field(&self, identifier: &FieldIdentifier) -> Result<&Column> {
        self.schemas
            .iter()
            .filter(|schema| schema.name == identifier.schema_name())
            .flat_map(|schema| schema.tables.iter())
            .filter_map(|id| self.tables.get(id.0))
            .filter(|table| table.name == identifier.table_name())
            .find_map(|table| table.column_by_name(identifier.column_name()))
            .ok_or_else(|| Error::resolution(format!("no column for field `{identifier}`")))
    }
}

fn split_relative_name(relative_name: &str) -> Result<[&str; 3]> {
    let mut parts = relative_name.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(dbms), Some(schema), Some(table), None) => Ok([dbms, schema, table]),
        _ => Err(Error::resolution(format!(
            "`{relative_name}` is not a `dbms.schema.table` name"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, DbmsDef, SchemaDef, TableDef};

    fn project() -> Project {
        ProjectDef::new("shop")
            .dbms(
                DbmsDef::new("main", "postgresql").schema(
                    SchemaDef::new("public")
                        .table(
                            TableDef::new("user")
                                .column(ColumnDef::new("id", "identity:i64"))
                                .column(ColumnDef::new("email", "identity:string"))
                                .primary_key("id"),
                        )
                        .table(
                            TableDef::new("order_line")
                                .column(ColumnDef::new("order_id", "identity:i64"))
                                .column(ColumnDef::new("line_no", "identity:i32"))
                                .primary_key("order_id")
                                .primary_key("line_no"),
                        ),
                ),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn relative_name_walks_parents() {
        let project = project();
        let table = &project.tables[1];
        assert_eq!(
            project.relative_name(table).unwrap(),
            "main.public.order_line"
        );
    }

    #[test]
    fn find_table_by_relative_name() {
        let project = project();
        let table = project.find_table_by_name("main.public.user").unwrap();
        assert_eq!(table.name, "user");

        assert!(project
            .find_table_by_name("main.public.missing")
            .unwrap_err()
            .is_resolution());
        assert!(project
            .find_table_by_name("public.user")
            .unwrap_err()
            .is_resolution());
    }

    #[test]
    fn primary_key_columns_in_declaration_order() {
        let project = project();
        let names: Vec<_> = project
            .primary_key_columns(&project.tables[1])
            .unwrap()
            .into_iter()
            .map(|column| column.name.as_str())
            .collect();
        assert_eq!(names, ["order_id", "line_no"]);
    }

    #[test]
    fn detached_column_does_not_resolve() {
        let project = project();
        let mut column = project.tables[0].columns[0].clone();
        column.id.table = TableId(42);

        assert!(project.table_of(&column).unwrap_err().is_resolution());
    }

    #[test]
    fn column_claiming_the_wrong_parent() {
        let project = project();
        let mut column = project.tables[0].columns[1].clone();
        column.id.table = project.tables[1].id;

        let err = project.table_of(&column).unwrap_err();
        assert!(err.is_resolution());
        assert_eq!(
            err.to_string(),
            "malformed schema: column `email` is not a child of table `order_line`"
        );
    }
}
