/// A database value passed to or read from a connection.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
    Bytes(Vec<u8>),
    Array(SqlArray),
    Struct(SqlStruct),
}

/// An array of values of one database type.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlArray {
    pub element_type: String,
    pub elements: Vec<SqlValue>,
}

/// A value of a user defined structured type.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStruct {
    pub type_name: String,
    pub attributes: Vec<SqlValue>,
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl SqlArray {
    pub fn new(element_type: impl Into<String>, elements: Vec<SqlValue>) -> Self {
        Self {
            element_type: element_type.into(),
            elements,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl SqlStruct {
    pub fn new(type_name: impl Into<String>, attributes: Vec<SqlValue>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes,
        }
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<SqlArray> for SqlValue {
    fn from(value: SqlArray) -> Self {
        Self::Array(value)
    }
}

impl From<SqlStruct> for SqlValue {
    fn from(value: SqlStruct) -> Self {
        Self::Struct(value)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
