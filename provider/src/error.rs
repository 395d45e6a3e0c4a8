use std::fmt::{Debug, Display, Formatter};

/// This struct can serve as an `Error` type when you want to provide an error message, but have no
/// underlying error type. It allows a string to serve as an error. This can be useful for custom
/// (i.e. mock) implementations of a [`ManifestResource`] spec.
///
/// # Example
///
/// ```
/// # use crdform_provider::error::ErrorMessage;
/// // Create a std::error::Error from a string.
/// let _error: ErrorMessage = "Something bad happened".into();
/// ```
///
#[derive(Debug)]
pub struct ErrorMessage {
    message: String,
}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.message, f)
    }
}

impl<S: Into<String>> From<S> for ErrorMessage {
    fn from(s: S) -> Self {
        Self { message: s.into() }
    }
}

impl std::error::Error for ErrorMessage {}
