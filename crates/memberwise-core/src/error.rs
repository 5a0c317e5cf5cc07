use thiserror::Error as ThisError;

///
/// Error
///
/// Raised only when rendering tokens: the model stores names as plain
/// strings, and a name the host failed to validate cannot become an `Ident`.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("'{name}' is not a valid identifier")]
    InvalidIdentifier { name: String },
}

impl Error {
    pub(crate) fn invalid_identifier(name: impl Into<String>) -> Self {
        Self::InvalidIdentifier { name: name.into() }
    }
}
