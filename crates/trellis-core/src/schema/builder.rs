use super::{
    Attributes, Column, ColumnDef, ColumnId, Dbms, DbmsDef, DbmsId, PrimaryKeyColumn,
    PrimaryKeyColumnId, Project, ProjectDef, Schema, SchemaDef, SchemaId, Table, TableDef,
    TableId,
};
use crate::{Error, Result};

use std::collections::HashSet;

/// Used to track state while a definition is indexed into a project
pub(super) struct BuildProject {
    project: Project,
}

impl BuildProject {
    pub(super) fn new(name: String) -> Self {
        Self {
            project: Project {
                name,
                dbmses: vec![],
                schemas: vec![],
                tables: vec![],
                attributes: Attributes::default(),
            },
        }
    }

    pub(super) fn build(mut self, def: ProjectDef) -> Result<Project> {
        self.project.attributes = def.attributes;

        let mut names = HashSet::new();
        for dbms in def.dbmses {
            check_name("dbms", &dbms.name)?;
            if !names.insert(dbms.name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate dbms `{}` in project `{}`",
                    dbms.name, self.project.name
                )));
            }
            self.build_dbms(dbms)?;
        }

        Ok(self.project)
    }

    fn build_dbms(&mut self, def: DbmsDef) -> Result<()> {
        let id = DbmsId(self.project.dbmses.len());
        self.project.dbmses.push(Dbms {
            id,
            name: def.name,
            type_name: def.type_name,
            schemas: vec![],
            attributes: def.attributes,
        });

        let mut names = HashSet::new();
        for schema in def.schemas {
            check_name("schema", &schema.name)?;
            if !names.insert(schema.name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate schema `{}` in dbms `{}`",
                    schema.name, self.project.dbmses[id.0].name
                )));
            }
            let schema_id = self.build_schema(id, schema)?;
            self.project.dbmses[id.0].schemas.push(schema_id);
        }

        Ok(())
    }

    fn build_schema(&mut self, dbms: DbmsId, def: SchemaDef) -> Result<SchemaId> {
        let id = SchemaId(self.project.schemas.len());
        self.project.schemas.push(Schema {
            id,
            dbms,
            name: def.name,
            tables: vec![],
            attributes: def.attributes,
        });

        let mut names = HashSet::new();
        for table in def.tables {
            check_name("table", &table.name)?;
            if !names.insert(table.name.clone()) {
                return Err(Error::invalid_schema(format!(
                    "duplicate table `{}` in schema `{}`",
                    table.name, self.project.schemas[id.0].name
                )));
            }
            let table_id = self.build_table(id, table)?;
            self.project.schemas[id.0].tables.push(table_id);
        }

        Ok(id)
    }

    fn build_table(&mut self, schema: SchemaId, def: TableDef) -> Result<TableId> {
        let id = TableId(self.project.tables.len());
        let mut table = Table::new(id, schema, def.name);
        table.attributes = def.attributes;

        for column in def.columns {
            if table.column_by_name(&column.name).is_some() {
                return Err(Error::invalid_schema(format!(
                    "duplicate column `{}` in table `{}`",
                    column.name, table.name
                )));
            }
            let column = build_column(&table, column);
            table.columns.push(column);
        }

        // Key columns are resolved against the table lazily; a key column
        // naming a missing column is reported when something resolves it.
        for pk_column in def.primary_key_columns {
            if table
                .primary_key
                .columns
                .iter()
                .any(|existing| existing.name == pk_column.name)
            {
                return Err(Error::invalid_schema(format!(
                    "column `{}` appears twice in the primary key of `{}`",
                    pk_column.name, table.name
                )));
            }

            let index = table.primary_key.columns.len();
            table.primary_key.columns.push(PrimaryKeyColumn {
                id: PrimaryKeyColumnId { table: id, index },
                name: pk_column.name,
                attributes: pk_column.attributes,
            });
        }

        self.project.tables.push(table);
        Ok(id)
    }
}

/// Dbms, schema and table names are joined with `.` into relative names, so
/// none of them may contain one.
fn check_name(kind: &str, name: &str) -> Result<()> {
    if name.contains('.') {
        return Err(Error::invalid_schema(format!(
            "{kind} name `{name}` contains `.`"
        )));
    }
    Ok(())
}

fn build_column(table: &Table, def: ColumnDef) -> Column {
    Column {
        id: ColumnId {
            table: table.id,
            index: table.columns.len(),
        },
        name: def.name,
        type_mapper: def.type_mapper,
        database_type: def.database_type,
        nullable: def.nullable,
        attributes: def.attributes,
    }
}
