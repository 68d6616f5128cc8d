use super::Error;

/// Error when a value cannot be represented in the target type.
///
/// Type mappers raise this instead of truncating. When a lower level failure
/// caused the conversion to fail, it is attached as the cause with
/// [`Error::context`].
#[derive(Debug)]
pub(super) struct TypeConversionError {
    message: Box<str>,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert value: {}", self.message)
    }
}

impl Error {
    /// Creates a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
