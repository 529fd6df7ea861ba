use super::Error;

/// Error when a driver response has an unexpected structure.
///
/// This occurs when:
/// - An operation returns a row count where rows were expected (or the reverse)
/// - An insert does not return the generated identity
/// - An introspection row is missing one of its well-known columns
#[derive(Debug)]
pub(super) struct InvalidResult {
    message: Box<str>,
}

impl std::error::Error for InvalidResult {}

impl core::fmt::Display for InvalidResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid result error.
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResult(InvalidResult {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid result error.
    pub fn is_invalid_result(&self) -> bool {
        matches!(self.classified(), super::ErrorKind::InvalidResult(_))
    }
}
