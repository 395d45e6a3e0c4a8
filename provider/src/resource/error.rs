use crdform_model::Diagnostic;
use std::fmt::{Display, Formatter};

/// The error type returned by [`Resource`] operations. It becomes an error [`Diagnostic`] with
/// `summary` as its summary and the inner error as its detail.
#[derive(Debug)]
pub struct ProviderError {
    /// A short description of what failed, e.g. "Could not generate YAML".
    summary: String,

    /// The error that caused this error.
    inner: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

/// The result type returned by [`Resource`] operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

impl ProviderError {
    pub fn new_with_source<S, E>(summary: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self {
            summary: summary.into(),
            inner: Some(source.into()),
        }
    }

    pub fn new<S>(summary: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            summary: summary.into(),
            inner: None,
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn inner(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.inner.as_ref().map(|some| some.as_ref())
    }

    /// Converts the error into the diagnostic reported to the user.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(
            &self.summary,
            self.inner().map(|e| e.to_string()).unwrap_or_default(),
        )
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary)?;
        if let Some(inner) = self.inner() {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}

// Make `ProviderError` function as a standard error.
impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<ProviderError> for Diagnostic {
    fn from(e: ProviderError) -> Self {
        e.to_diagnostic()
    }
}

/// A trait that makes it possible to convert error types to `ProviderError` using a familiar
/// `context` function.
pub trait IntoProviderError<T> {
    /// Convert `self` into a `ProviderError` with the given diagnostic summary.
    fn context<S>(self, summary: S) -> ProviderResult<T>
    where
        S: Into<String>;
}

// Implement `IntoProviderError` for all standard `Error + Send + Sync + 'static` types.
impl<T, E> IntoProviderError<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<S>(self, summary: S) -> ProviderResult<T>
    where
        S: Into<String>,
    {
        self.map_err(|e| ProviderError::new_with_source(summary, e))
    }
}

// Implement `IntoProviderError` for options where `None` is converted into an error.
impl<T> IntoProviderError<T> for std::option::Option<T> {
    fn context<S>(self, summary: S) -> ProviderResult<T>
    where
        S: Into<String>,
    {
        self.ok_or_else(|| ProviderError::new(summary))
    }
}

#[cfg(test)]
mod test {
    use super::{IntoProviderError, ProviderError};
    use crate::error::ErrorMessage;
    use crdform_model::Severity;

    #[test]
    fn diagnostic_from_error() {
        let result: Result<(), ErrorMessage> = Err("disk on fire".into());
        let error = result.context("Could not generate YAML").unwrap_err();
        assert_eq!(error.to_string(), "Could not generate YAML: disk on fire");
        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.summary, "Could not generate YAML");
        assert_eq!(diagnostic.detail, "disk on fire");
    }

    #[test]
    fn none_becomes_error() {
        let error = None::<i64>.context("Could not generate ID").unwrap_err();
        assert!(error.inner().is_none());
        assert_eq!(ProviderError::new("x").to_diagnostic().detail, "");
        assert_eq!(error.summary(), "Could not generate ID");
    }
}
