use super::FieldIdentifier;
use crate::Result;

/// The identity facet of a field.
pub trait FieldIdentity {
    fn identifier(&self) -> &FieldIdentifier;

    /// `true` if no two rows may share a value for this field.
    fn is_unique(&self) -> bool;
}

/// Identity facet: the identifier and the uniqueness flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseField {
    identifier: FieldIdentifier,
    unique: bool,
}

impl BaseField {
    pub fn new(identifier: FieldIdentifier, unique: bool) -> Result<Self> {
        identifier.validate()?;
        Ok(Self { identifier, unique })
    }
}

impl FieldIdentity for BaseField {
    fn identifier(&self) -> &FieldIdentifier {
        &self.identifier
    }

    fn is_unique(&self) -> bool {
        self.unique
    }
}
