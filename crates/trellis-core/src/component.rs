use crate::schema::{Project, Table, TableId};
use crate::Result;

use parking_lot::RwLock;
use std::ops::Deref;
use std::sync::Arc;

/// Holds the current project for managers to resolve their tables against.
///
/// Managers look tables up on every call instead of caching them, so a
/// [`reload`](ProjectComponent::reload) takes effect everywhere at once.
#[derive(Debug)]
pub struct ProjectComponent {
    project: RwLock<Arc<Project>>,
}

/// A table of a specific project snapshot.
///
/// Keeps the snapshot alive, so the table stays valid after the component is
/// reloaded.
#[derive(Debug, Clone)]
pub struct TableRef {
    project: Arc<Project>,
    id: TableId,
}

impl ProjectComponent {
    pub fn new(project: Project) -> Self {
        Self {
            project: RwLock::new(Arc::new(project)),
        }
    }

    /// The current project.
    pub fn project(&self) -> Arc<Project> {
        self.project.read().clone()
    }

    /// Replaces the project, returning the previous one.
    pub fn reload(&self, project: Project) -> Arc<Project> {
        tracing::debug!(project = %project.name, tables = project.tables.len(), "reloading project");
        std::mem::replace(&mut *self.project.write(), Arc::new(project))
    }

    /// Finds a table of the current project by its `dbms.schema.table` name.
    pub fn find_table_by_name(&self, relative_name: &str) -> Result<TableRef> {
        let project = self.project();
        let id = project.find_table_by_name(relative_name)?.id;
        Ok(TableRef { project, id })
    }
}

impl TableRef {
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn id(&self) -> TableId {
        self.id
    }
}

impl Deref for TableRef {
    type Target = Table;

    fn deref(&self) -> &Table {
        &self.project.tables[self.id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, DbmsDef, ProjectDef, SchemaDef, TableDef};

    fn project(column: &str) -> Project {
        ProjectDef::new("shop")
            .dbms(DbmsDef::new("main", "sqlite").schema(
                SchemaDef::new("main").table(
                    TableDef::new("user")
                        .column(ColumnDef::new(column, "identity:i64"))
                        .primary_key(column),
                ),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn reload_is_visible_to_new_lookups_only() {
        let component = ProjectComponent::new(project("id"));
        let before = component.find_table_by_name("main.main.user").unwrap();

        component.reload(project("user_id"));
        let after = component.find_table_by_name("main.main.user").unwrap();

        assert_eq!(before.columns[0].name, "id");
        assert_eq!(after.columns[0].name, "user_id");
    }

    #[test]
    fn missing_table() {
        let component = ProjectComponent::new(project("id"));
        assert!(component
            .find_table_by_name("main.main.order")
            .unwrap_err()
            .is_resolution());
    }
}
