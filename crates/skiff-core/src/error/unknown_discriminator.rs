use super::Error;

/// Error when a row's discriminator names a variant the model never
/// registered.
#[derive(Debug)]
pub(super) struct UnknownDiscriminator {
    model: Box<str>,
    discriminator: Box<str>,
}

impl std::error::Error for UnknownDiscriminator {}

impl core::fmt::Display for UnknownDiscriminator {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown discriminator `{}` for model `{}`",
            self.discriminator, self.model
        )
    }
}

impl Error {
    /// Creates an unknown discriminator error.
    pub fn unknown_discriminator(model: &str, discriminator: &str) -> Error {
        Error::from(super::ErrorKind::UnknownDiscriminator(UnknownDiscriminator {
            model: model.into(),
            discriminator: discriminator.into(),
        }))
    }

    /// Returns `true` if this error is an unknown discriminator error.
    pub fn is_unknown_discriminator(&self) -> bool {
        matches!(self.classified(), super::ErrorKind::UnknownDiscriminator(_))
    }
}
