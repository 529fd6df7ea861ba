use super::Error;

/// Error when the declared model and the store schema do not line up.
///
/// This occurs when:
/// - The mapped table does not exist, or has no columns
/// - A model has no field for a column it is asked to read or write
/// - A foreign-key edge touching the table has no declared navigation
///
/// These are configuration mistakes. They are reported immediately and are
/// never retried.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Creates an invalid schema error for a field the model does not have.
    ///
    /// Hand-written `Model::set` implementations return this for names they
    /// do not recognize.
    pub fn unknown_field(model: &str, field: &str) -> Error {
        Error::invalid_schema(format!("model `{model}` has no field `{field}`"))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.classified(), super::ErrorKind::InvalidSchema(_))
    }
}
