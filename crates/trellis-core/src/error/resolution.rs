use super::Error;

/// Error when a node of the document tree cannot be resolved.
///
/// This occurs when:
/// - A node's parent id does not point at a node of the project
/// - A primary key column names a column its table does not have
/// - A field identifier or relative name does not match any node
///
/// A well-formed project never produces this error; it signals a defect in
/// whatever loaded the document tree. It is never recovered from internally.
#[derive(Debug)]
pub(super) struct ResolutionError {
    message: Box<str>,
}

impl std::error::Error for ResolutionError {}

impl core::fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "malformed schema: {}", self.message)
    }
}

impl Error {
    /// Creates a resolution error.
    pub fn resolution(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Resolution(ResolutionError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a resolution error.
    pub fn is_resolution(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Resolution(_))
    }
}
