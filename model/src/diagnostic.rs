use serde::{Deserialize, Serialize};
use serde_plain::derive_display_from_serialize;
use std::fmt::{Display, Formatter};

/// How serious a [`Diagnostic`] is. Any `Error` diagnostic aborts the operation that produced it.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Error,
    Warning,
}

derive_display_from_serialize!(Severity);

/// One step of an [`AttributePath`].
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub enum PathStep {
    Attribute(String),
    Index(usize),
    Key(String),
}

/// The location of an attribute within a configuration, e.g. `spec.rules[0].when[1].key` or
/// `metadata.labels["app"]`.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn attribute<S: Into<String>>(&self, name: S) -> Self {
        self.with(PathStep::Attribute(name.into()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.with(PathStep::Index(index))
    }

    pub fn key<S: Into<String>>(&self, key: S) -> Self {
        self.with(PathStep::Key(key.into()))
    }

    fn with(&self, step: PathStep) -> Self {
        let mut steps = self.0.clone();
        steps.push(step);
        Self(steps)
    }
}

impl Display for AttributePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::Index(index) => write!(f, "[{}]", index)?,
                PathStep::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

/// A problem reported back to the user, modeled after the diagnostics of the plugin protocol.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// The attribute the diagnostic is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributePath>,
}

impl Diagnostic {
    pub fn error<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn warning<S1, S2>(summary: S1, detail: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            severity: Severity::Warning,
            ..Self::error(summary, detail)
        }
    }

    pub fn with_attribute(mut self, path: AttributePath) -> Self {
        self.attribute = Some(path);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if let Some(path) = &self.attribute {
            write!(f, " (at {})", path)?;
        }
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// An ordered collection of [`Diagnostic`]s.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic)
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.is_error())
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for diagnostic in &self.0 {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

#[test]
fn attribute_path_display() {
    let path = AttributePath::root()
        .attribute("spec")
        .attribute("rules")
        .index(0)
        .attribute("when")
        .index(1)
        .attribute("key");
    assert_eq!(path.to_string(), "spec.rules[0].when[1].key");

    let path = AttributePath::root().attribute("metadata").attribute("labels").key("app");
    assert_eq!(path.to_string(), r#"metadata.labels["app"]"#);
}

#[test]
fn diagnostics_error_detection() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::warning("careful", ""));
    assert!(!diagnostics.has_error());
    diagnostics.push(Diagnostic::error("broken", "details"));
    assert!(diagnostics.has_error());
    assert_eq!(diagnostics.errors().count(), 1);
    assert_eq!(
        diagnostics.iter().last().unwrap().to_string(),
        "error: broken: details"
    );
}
