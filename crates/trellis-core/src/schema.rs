mod attributes;
pub use attributes::Attributes;

mod builder;

mod column;
pub use column::{Column, ColumnId};

mod dbms;
pub use dbms::{Dbms, DbmsId};

mod def;
pub use def::{ColumnDef, DbmsDef, PrimaryKeyColumnDef, ProjectDef, SchemaDef, TableDef};

mod pk;
pub use pk::{PrimaryKey, PrimaryKeyColumn, PrimaryKeyColumnId};

mod project;
pub use project::Project;

#[allow(clippy::module_inception)]
mod schema;
pub use schema::{Schema, SchemaId};

mod table;
pub use table::{Table, TableId};
