//! Serializable definitions of a project document.
//!
//! These mirror the JSON layout of a project file. They are also the way to
//! describe a project in code:
//!
//! ```
//! use trellis_core::schema::{ColumnDef, DbmsDef, ProjectDef, SchemaDef, TableDef};
//!
//! let project = ProjectDef::new("shop")
//!     .dbms(DbmsDef::new("main", "postgresql").schema(
//!         SchemaDef::new("public").table(
//!             TableDef::new("user")
//!                 .column(ColumnDef::new("id", "identity:i64"))
//!                 .column(ColumnDef::new("name", "identity:string").nullable(true))
//!                 .primary_key("id"),
//!         ),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(project.tables.len(), 1);
//! ```

use super::{Attributes, Project};
use crate::Result;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDef {
    pub name: String,

    #[serde(default)]
    pub dbmses: Vec<DbmsDef>,

    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbmsDef {
    pub name: String,

    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub schemas: Vec<SchemaDef>,

    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDef {
    pub name: String,

    #[serde(default)]
    pub tables: Vec<TableDef>,

    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,

    #[serde(default)]
    pub columns: Vec<ColumnDef>,

    #[serde(default)]
    pub primary_key_columns: Vec<PrimaryKeyColumnDef>,

    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,

    pub type_mapper: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,

    #[serde(default)]
    pub nullable: bool,

    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryKeyColumnDef {
    pub name: String,

    #[serde(flatten)]
    pub attributes: Attributes,
}

impl ProjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dbmses: vec![],
            attributes: Attributes::default(),
        }
    }

    pub fn dbms(mut self, dbms: DbmsDef) -> Self {
        self.dbmses.push(dbms);
        self
    }

    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Indexes the definition into a [`Project`].
    pub fn build(self) -> Result<Project> {
        Project::from_def(self)
    }
}

impl DbmsDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            schemas: vec![],
            attributes: Attributes::default(),
        }
    }

    pub fn schema(mut self, schema: SchemaDef) -> Self {
        self.schemas.push(schema);
        self
    }
}

impl SchemaDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: vec![],
            attributes: Attributes::default(),
        }
    }

    pub fn table(mut self, table: TableDef) -> Self {
        self.tables.push(table);
        self
    }
}

impl TableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            primary_key_columns: vec![],
            attributes: Attributes::default(),
        }
    }

    pub fn column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    /// Appends a column to the primary key. Call once per key column, in key
    /// order.
    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key_columns.push(PrimaryKeyColumnDef {
            name: column.into(),
            attributes: Attributes::default(),
        });
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, type_mapper: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_mapper: type_mapper.into(),
            database_type: None,
            nullable: false,
            attributes: Attributes::default(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn database_type(mut self, database_type: impl Into<String>) -> Self {
        self.database_type = Some(database_type.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes.insert(key, value);
        self
    }
}
