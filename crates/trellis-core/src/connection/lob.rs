use crate::{Error, Result};

use std::fmt::Debug;

/// A character large object. Positions are 1-based and count characters.
pub trait Clob: Debug + Send + Sync {
    /// Number of characters in the object.
    fn length(&self) -> Result<u64>;

    /// Up to `len` characters starting at `pos`.
    fn sub_string(&self, pos: u64, len: usize) -> Result<String>;

    /// Writes `value` starting at `pos`, overwriting existing characters and
    /// extending the object as needed. Returns the number of characters
    /// written.
    fn set_string(&mut self, pos: u64, value: &str) -> Result<usize>;
}

/// A binary large object. Positions are 1-based and count bytes.
pub trait Blob: Debug + Send + Sync {
    fn length(&self) -> Result<u64>;

    fn bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>>;

    fn set_bytes(&mut self, pos: u64, value: &[u8]) -> Result<usize>;
}

/// An XML value.
pub trait SqlXml: Debug + Send + Sync {
    fn get_string(&self) -> Result<String>;

    fn set_string(&mut self, value: &str) -> Result<()>;
}

pub type ClobRef = Box<dyn Clob>;

pub type BlobRef = Box<dyn Blob>;

/// A [`Clob`] held in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringClob {
    value: String,
}

/// A [`Blob`] held in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ByteBlob {
    value: Vec<u8>,
}

/// A [`SqlXml`] held in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StringSqlXml {
    value: String,
}

impl StringClob {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Clob for StringClob {
    fn length(&self) -> Result<u64> {
        Ok(self.value.chars().count() as u64)
    }

    fn sub_string(&self, pos: u64, len: usize) -> Result<String> {
        let start = start_index(pos, self.value.chars().count())?;
        Ok(self.value.chars().skip(start).take(len).collect())
    }

    fn set_string(&mut self, pos: u64, value: &str) -> Result<usize> {
        let mut chars: Vec<char> = self.value.chars().collect();
        let start = start_index(pos, chars.len())?;
        let replacement: Vec<char> = value.chars().collect();
        let end = chars.len().min(start + replacement.len());
        let written = replacement.len();

        chars.splice(start..end, replacement);
        self.value = chars.into_iter().collect();
        Ok(written)
    }
}

impl ByteBlob {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }
}

impl Blob for ByteBlob {
    fn length(&self) -> Result<u64> {
        Ok(self.value.len() as u64)
    }

    fn bytes(&self, pos: u64, len: usize) -> Result<Vec<u8>> {
        let start = start_index(pos, self.value.len())?;
        let end = self.value.len().min(start + len);
        Ok(self.value[start..end].to_vec())
    }

    fn set_bytes(&mut self, pos: u64, value: &[u8]) -> Result<usize> {
        let start = start_index(pos, self.value.len())?;
        let end = self.value.len().min(start + value.len());
        self.value.splice(start..end, value.iter().copied());
        Ok(value.len())
    }
}

impl StringSqlXml {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl SqlXml for StringSqlXml {
    fn get_string(&self) -> Result<String> {
        Ok(self.value.clone())
    }

    fn set_string(&mut self, value: &str) -> Result<()> {
        self.value = value.to_string();
        Ok(())
    }
}

/// Converts a 1-based position into an index. A position one past the end is
/// valid and appends.
fn start_index(pos: u64, len: usize) -> Result<usize> {
    match usize::try_from(pos) {
        Ok(pos) if pos >= 1 && pos <= len + 1 => Ok(pos - 1),
        _ => Err(Error::invalid_argument(format!(
            "position {pos} is outside of 1..={}",
            len + 1
        ))),
    }
}
