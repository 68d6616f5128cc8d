use super::TypeMapper;
use crate::connection::{ClobRef, CreateFromConnection, StringClob};
use crate::{Error, Result};

use std::sync::Arc;

/// Clobs of this many characters or more cannot be read into a `String`.
pub const MAX_CLOB_LENGTH: u64 = i32::MAX as u64;

/// Maps character large objects to `String`.
///
/// Without a connection, strings are written back as in-memory clobs. With a
/// connection, the clob is created by the connection and any capability error
/// it raises is returned unchanged.
#[derive(Debug, Default, Clone)]
pub struct ClobToStringMapper {
    connection: Option<Arc<dyn CreateFromConnection>>,
}

impl ClobToStringMapper {
    pub fn new() -> Self {
        Self { connection: None }
    }

    pub fn with_connection(connection: Arc<dyn CreateFromConnection>) -> Self {
        Self {
            connection: Some(connection),
        }
    }
}

impl TypeMapper<ClobRef, String> for ClobToStringMapper {
    fn language_type(&self) -> &'static str {
        "String"
    }

    fn database_type(&self) -> &'static str {
        "Clob"
    }

    fn to_language_value(&self, value: Option<&ClobRef>) -> Result<Option<String>> {
        let Some(clob) = value else {
            return Ok(None);
        };

        let length = clob.length().map_err(read_failed)?;
        if length >= MAX_CLOB_LENGTH {
            return Err(too_long());
        }

        let value = clob.sub_string(1, length as usize).map_err(read_failed)?;
        Ok(Some(value))
    }

    fn to_database_value(&self, value: Option<&String>) -> Result<Option<ClobRef>> {
        let Some(value) = value else {
            return Ok(None);
        };

        if value.len() as u64 >= MAX_CLOB_LENGTH
            && value.chars().count() as u64 >= MAX_CLOB_LENGTH
        {
            return Err(too_long());
        }

        match &self.connection {
            Some(connection) => {
                let mut clob = connection.create_clob()?;
                clob.set_string(1, value)?;
                Ok(Some(clob))
            }
            None => Ok(Some(Box::new(StringClob::new(value.as_str())))),
        }
    }
}

fn read_failed(err: Error) -> Error {
    err.context(Error::type_conversion("unable to convert Clob to String"))
}

fn too_long() -> Error {
    Error::type_conversion(format!(
        "the provided Clob contains too many characters (limit {MAX_CLOB_LENGTH})"
    ))
}
