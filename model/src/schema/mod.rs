/*!

The `schema` module describes the attribute tree of a resource: every attribute's type, whether it
is required, optional or computed, and the validators that restrict its values. Schemas are plain
data built with the constructor and builder functions on [`Attribute`], so each CRD is declared as
a table rather than with code.

!*/

mod validate;
mod validator;

pub use validate::validate_config;
pub use validator::Validator;

use serde::Serialize;
use serde_plain::derive_display_from_serialize;
use std::collections::BTreeMap;

/// Nested attributes, keyed by attribute name.
pub type Attributes = BTreeMap<String, Attribute>;

/// The schema of one resource type.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The version of the schema, bumped when the shape of stored state changes.
    pub version: i64,
    pub description: String,
    pub attributes: Attributes,
}

impl Schema {
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            version: 0,
            description: description.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn attribute<S: Into<String>>(mut self, name: S, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Finds the attribute at a dotted path such as `spec.issuer_ref.name`. Lists of nested
    /// attributes are traversed transparently.
    pub fn find(&self, path: &str) -> Option<&Attribute> {
        let mut parts = path.split('.');
        let mut current = self.attributes.get(parts.next()?)?;
        for part in parts {
            current = current.kind.nested()?.get(part)?;
        }
        Some(current)
    }
}

/// Whether an attribute must be, may be, or cannot be set in configuration. Modeling this as a
/// single enum makes Required, Optional and Computed mutually exclusive.
#[derive(Serialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Required,
    Optional,
    /// Set by the provider, never by the user.
    Computed,
}

derive_display_from_serialize!(Mode);

/// The primitive types that lists and maps may contain.
#[derive(Serialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    String,
    Int64,
    Float64,
    Bool,
}

derive_display_from_serialize!(ElementType);

/// The type of an attribute.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeKind {
    String,
    Int64,
    Float64,
    Bool,
    List(ElementType),
    Map(ElementType),
    /// A single nested object.
    Object(Attributes),
    /// A list of nested objects.
    ObjectList(Attributes),
    /// A map of nested objects.
    ObjectMap(Attributes),
}

impl AttributeKind {
    /// The nested attributes of object-like kinds.
    pub fn nested(&self) -> Option<&Attributes> {
        match self {
            AttributeKind::Object(attributes)
            | AttributeKind::ObjectList(attributes)
            | AttributeKind::ObjectMap(attributes) => Some(attributes),
            _ => None,
        }
    }

    fn nested_mut(&mut self) -> Option<&mut Attributes> {
        match self {
            AttributeKind::Object(attributes)
            | AttributeKind::ObjectList(attributes)
            | AttributeKind::ObjectMap(attributes) => Some(attributes),
            _ => None,
        }
    }

    /// A short human readable name used in diagnostics.
    pub fn type_name(&self) -> String {
        match self {
            AttributeKind::String => "string".to_string(),
            AttributeKind::Int64 => "number (int64)".to_string(),
            AttributeKind::Float64 => "number".to_string(),
            AttributeKind::Bool => "bool".to_string(),
            AttributeKind::List(element) => format!("list of {}", element),
            AttributeKind::Map(element) => format!("map of {}", element),
            AttributeKind::Object(_) => "object".to_string(),
            AttributeKind::ObjectList(_) => "list of object".to_string(),
            AttributeKind::ObjectMap(_) => "map of object".to_string(),
        }
    }
}

/// One node of the attribute tree.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub description: String,
    pub kind: AttributeKind,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    /// Creates an optional attribute of the given kind. Use [`Attribute::required`] or
    /// [`Attribute::computed`] to change the mode.
    pub fn new<S: Into<String>>(description: S, kind: AttributeKind) -> Self {
        Self {
            description: description.into(),
            kind,
            mode: Mode::Optional,
            validators: Vec::new(),
        }
    }

    pub fn string<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::String)
    }

    pub fn int64<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::Int64)
    }

    pub fn float64<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::Float64)
    }

    pub fn bool<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::Bool)
    }

    pub fn string_list<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::List(ElementType::String))
    }

    pub fn string_map<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::Map(ElementType::String))
    }

    pub fn object<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::Object(Attributes::new()))
    }

    pub fn object_list<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::ObjectList(Attributes::new()))
    }

    pub fn object_map<S: Into<String>>(description: S) -> Self {
        Self::new(description, AttributeKind::ObjectMap(Attributes::new()))
    }

    pub fn required(mut self) -> Self {
        self.mode = Mode::Required;
        self
    }

    pub fn computed(mut self) -> Self {
        self.mode = Mode::Computed;
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Adds a nested attribute. Only object-like kinds have nested attributes, calling this on any
    /// other kind is a programming error and panics.
    #[allow(clippy::panic)]
    pub fn attribute<S: Into<String>>(mut self, name: S, attribute: Attribute) -> Self {
        let name = name.into();
        match self.kind.nested_mut() {
            Some(attributes) => {
                attributes.insert(name, attribute);
            }
            None => panic!(
                "attribute '{}' cannot be nested in a {}",
                name,
                self.kind.type_name()
            ),
        }
        self
    }

    pub fn is_required(&self) -> bool {
        self.mode == Mode::Required
    }

    pub fn is_computed(&self) -> bool {
        self.mode == Mode::Computed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Schema {
        Schema::new("sample").attribute(
            "spec",
            Attribute::object("spec")
                .required()
                .attribute("name", Attribute::string("name").required())
                .attribute(
                    "rules",
                    Attribute::object_list("rules")
                        .attribute("action", Attribute::string("action")),
                ),
        )
    }

    #[test]
    fn find_nested_attributes() {
        let schema = sample();
        assert!(schema.find("spec.name").unwrap().is_required());
        assert_eq!(
            schema.find("spec.rules.action").unwrap().kind,
            AttributeKind::String
        );
        assert!(schema.find("spec.missing").is_none());
        assert!(schema.find("spec.name.deeper").is_none());
    }

    #[test]
    fn modes_are_exclusive() {
        let attribute = Attribute::string("x").required().computed();
        assert!(attribute.is_computed());
        assert!(!attribute.is_required());
    }

    #[test]
    #[should_panic]
    fn nesting_in_scalar_panics() {
        let _ = Attribute::string("x").attribute("y", Attribute::bool("y"));
    }
}
