use super::NamingConvention;
use crate::{Error, Result};

use indexmap::IndexSet;

/// SQL dialects with built in naming rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Postgresql,
    Mysql,
    Sqlite,
}

/// Naming rules of the supported SQL dialects.
///
/// Names are enclosed in `"` (PostgreSQL, SQLite) or `` ` `` (MySQL); values
/// are quoted with `'`. An embedded delimiter is doubled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlNamingConvention {
    dialect: Dialect,
}

impl SqlNamingConvention {
    pub fn postgresql() -> Self {
        Self {
            dialect: Dialect::Postgresql,
        }
    }

    pub fn mysql() -> Self {
        Self {
            dialect: Dialect::Mysql,
        }
    }

    pub fn sqlite() -> Self {
        Self {
            dialect: Dialect::Sqlite,
        }
    }

    /// The convention for the `type` of a dbms node.
    pub fn for_dbms_type(type_name: &str) -> Result<Self> {
        match type_name.to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(Self::postgresql()),
            "mysql" | "mariadb" => Ok(Self::mysql()),
            "sqlite" => Ok(Self::sqlite()),
            _ => Err(Error::invalid_schema(format!(
                "no naming convention for dbms type `{type_name}`"
            ))),
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    fn delimiter(&self) -> char {
        match self.dialect {
            Dialect::Mysql => '`',
            Dialect::Postgresql | Dialect::Sqlite => '"',
        }
    }
}

impl NamingConvention for SqlNamingConvention {
    fn full_name(&self, schema: &str, table: &str, column: &str) -> String {
        format!(
            "{}.{}",
            self.full_table_name(schema, table),
            self.enclose_field(column)
        )
    }

    fn full_table_name(&self, schema: &str, table: &str) -> String {
        format!("{}.{}", self.enclose_field(schema), self.enclose_field(table))
    }

    fn quote_field(&self, value: &str) -> String {
        delimit('\'', value)
    }

    fn enclose_field(&self, name: &str) -> String {
        delimit(self.delimiter(), name)
    }

    fn schema_exclude_set(&self) -> IndexSet<String> {
        let names: &[&str] = match self.dialect {
            Dialect::Mysql => &["MySQL", "information_schema", "performance_schema", "sys"],
            Dialect::Postgresql => &["information_schema", "pg_catalog", "pg_toast"],
            Dialect::Sqlite => &["temp"],
        };
        names.iter().map(|name| name.to_string()).collect()
    }
}

fn delimit(delimiter: char, value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for ch in value.chars() {
        if ch == delimiter {
            out.push(delimiter);
        }
        out.push(ch);
    }
    out.push(delimiter);
    out
}
