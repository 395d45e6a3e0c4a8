use super::{Attribute, AttributeKind, Attributes, ElementType, Schema};
use crate::constants::{
    DIAG_INCORRECT_TYPE, DIAG_INVALID_VALUE, DIAG_MISSING_ARGUMENT, DIAG_READ_ONLY_ATTRIBUTE,
    DIAG_UNSUPPORTED_ARGUMENT,
};
use crate::{AttributePath, Diagnostic, Diagnostics};
use log::trace;
use serde_json::{Map, Value};

/// Checks a resource configuration against its schema: unknown attributes, missing required
/// attributes, values for computed attributes, value types, and attribute validators. Every problem
/// is reported, validation does not stop at the first one.
pub fn validate_config(schema: &Schema, config: &Value) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    let root = AttributePath::root();
    match config.as_object() {
        Some(object) => validate_object(&schema.attributes, object, &root, &mut diagnostics),
        None => diagnostics.push(Diagnostic::error(
            DIAG_INCORRECT_TYPE,
            format!("The configuration must be an object, got {}", describe(config)),
        )),
    }
    trace!(
        "validated configuration against schema '{}': {} diagnostic(s)",
        schema.description,
        diagnostics.len()
    );
    diagnostics
}

fn validate_object(
    attributes: &Attributes,
    object: &Map<String, Value>,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    for key in object.keys() {
        if !attributes.contains_key(key) {
            diagnostics.push(
                Diagnostic::error(
                    DIAG_UNSUPPORTED_ARGUMENT,
                    format!("An argument named {:?} is not expected here.", key),
                )
                .with_attribute(path.attribute(key)),
            );
        }
    }
    for (name, attribute) in attributes {
        let value = object.get(name).unwrap_or(&Value::Null);
        validate_attribute(attribute, value, &path.attribute(name), diagnostics);
    }
}

fn validate_attribute(
    attribute: &Attribute,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    if value.is_null() {
        if attribute.is_required() {
            diagnostics.push(
                Diagnostic::error(
                    DIAG_MISSING_ARGUMENT,
                    format!(
                        "The argument {:?} is required, but no definition was found.",
                        path.to_string()
                    ),
                )
                .with_attribute(path.clone()),
            );
        }
        return;
    }
    if attribute.is_computed() {
        diagnostics.push(
            Diagnostic::error(
                DIAG_READ_ONLY_ATTRIBUTE,
                "Cannot set value for this attribute as the provider has marked it as read-only. \
                Remove the configuration line setting the value.",
            )
            .with_attribute(path.clone()),
        );
        return;
    }
    if !validate_kind(&attribute.kind, value, path, diagnostics) {
        return;
    }
    for validator in &attribute.validators {
        for problem in validator.validate(value) {
            diagnostics.push(
                Diagnostic::error(DIAG_INVALID_VALUE, format!("Attribute {} {}", path, problem))
                    .with_attribute(path.clone()),
            );
        }
    }
}

/// Returns `false` when the value does not have the expected shape. Nested values are checked
/// recursively and report their own diagnostics.
fn validate_kind(
    kind: &AttributeKind,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) -> bool {
    let matches = match kind {
        AttributeKind::String => value.is_string(),
        AttributeKind::Int64 => value.is_i64(),
        AttributeKind::Float64 => value.is_number(),
        AttributeKind::Bool => value.is_boolean(),
        AttributeKind::List(element) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    check_element(*element, item, &path.index(i), diagnostics);
                }
                true
            }
            None => false,
        },
        AttributeKind::Map(element) => match value.as_object() {
            Some(entries) => {
                for (key, item) in entries {
                    check_element(*element, item, &path.key(key), diagnostics);
                }
                true
            }
            None => false,
        },
        AttributeKind::Object(attributes) => match value.as_object() {
            Some(object) => {
                validate_object(attributes, object, path, diagnostics);
                true
            }
            None => false,
        },
        AttributeKind::ObjectList(attributes) => match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    let item_path = path.index(i);
                    match item.as_object() {
                        Some(object) => {
                            validate_object(attributes, object, &item_path, diagnostics)
                        }
                        None => incorrect_type(kind, item, &item_path, diagnostics),
                    }
                }
                true
            }
            None => false,
        },
        AttributeKind::ObjectMap(attributes) => match value.as_object() {
            Some(entries) => {
                for (key, item) in entries {
                    let item_path = path.key(key);
                    match item.as_object() {
                        Some(object) => {
                            validate_object(attributes, object, &item_path, diagnostics)
                        }
                        None => incorrect_type(kind, item, &item_path, diagnostics),
                    }
                }
                true
            }
            None => false,
        },
    };
    if !matches {
        incorrect_type(kind, value, path, diagnostics);
    }
    matches
}

fn check_element(
    element: ElementType,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    let matches = match element {
        ElementType::String => value.is_string(),
        ElementType::Int64 => value.is_i64(),
        ElementType::Float64 => value.is_number(),
        ElementType::Bool => value.is_boolean(),
    };
    if !matches {
        diagnostics.push(
            Diagnostic::error(
                DIAG_INCORRECT_TYPE,
                format!("Expected {}, got {}", element, describe(value)),
            )
            .with_attribute(path.clone()),
        );
    }
}

fn incorrect_type(
    kind: &AttributeKind,
    value: &Value,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    diagnostics.push(
        Diagnostic::error(
            DIAG_INCORRECT_TYPE,
            format!("Expected {}, got {}", kind.type_name(), describe(value)),
        )
        .with_attribute(path.clone()),
    );
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod test {
    use super::validate_config;
    use crate::constants::*;
    use crate::schema::{Attribute, Schema, Validator};
    use crate::Diagnostics;
    use serde_json::json;

    fn schema() -> Schema {
        Schema::new("test resource")
            .attribute("id", Attribute::int64("id").computed())
            .attribute(
                "metadata",
                Attribute::object("metadata")
                    .required()
                    .attribute(
                        "name",
                        Attribute::string("name").required().validator(Validator::Name),
                    )
                    .attribute(
                        "labels",
                        Attribute::string_map("labels").validator(Validator::Labels),
                    ),
            )
            .attribute(
                "spec",
                Attribute::object("spec")
                    .attribute(
                        "action",
                        Attribute::string("action").validator(Validator::OneOf(&["ALLOW", "DENY"])),
                    )
                    .attribute("ports", Attribute::string_list("ports"))
                    .attribute(
                        "rules",
                        Attribute::object_list("rules").attribute(
                            "key",
                            Attribute::string("key").required(),
                        ),
                    )
                    .attribute(
                        "port_level",
                        Attribute::object_map("port level").attribute(
                            "mode",
                            Attribute::string("mode").validator(Validator::OneOf(&["STRICT"])),
                        ),
                    ),
            )
    }

    fn summaries(diagnostics: &Diagnostics) -> Vec<(String, String)> {
        diagnostics
            .iter()
            .map(|d| {
                (
                    d.summary.clone(),
                    d.attribute
                        .as_ref()
                        .map(|a| a.to_string())
                        .unwrap_or_default(),
                )
            })
            .collect()
    }

    #[test]
    fn valid_config() {
        let config = json!({
            "id": null,
            "metadata": { "name": "my-policy", "labels": { "app": "web" } },
            "spec": {
                "action": "DENY",
                "ports": ["80"],
                "rules": [{ "key": "source.ip" }],
                "port_level": { "8080": { "mode": "STRICT" } }
            }
        });
        let diagnostics = validate_config(&schema(), &config);
        assert!(diagnostics.is_empty(), "{}", diagnostics);
    }

    #[test]
    fn missing_and_unsupported() {
        let config = json!({ "metadata": { "namespace": "default" } });
        let diagnostics = validate_config(&schema(), &config);
        assert_eq!(
            summaries(&diagnostics),
            vec![
                (
                    DIAG_UNSUPPORTED_ARGUMENT.to_string(),
                    "metadata.namespace".to_string()
                ),
                (DIAG_MISSING_ARGUMENT.to_string(), "metadata.name".to_string()),
            ]
        );
    }

    #[test]
    fn computed_cannot_be_set() {
        let config = json!({ "id": 5, "metadata": { "name": "a" } });
        let diagnostics = validate_config(&schema(), &config);
        assert_eq!(
            summaries(&diagnostics),
            vec![(DIAG_READ_ONLY_ATTRIBUTE.to_string(), "id".to_string())]
        );
    }

    #[test]
    fn invalid_name_is_rejected() {
        for name in ["My-Policy", "my_policy"] {
            let config = json!({ "metadata": { "name": name } });
            let diagnostics = validate_config(&schema(), &config);
            assert!(diagnostics.has_error());
            assert!(diagnostics
                .iter()
                .all(|d| d.summary == DIAG_INVALID_VALUE));
        }
    }

    #[test]
    fn nested_problems_have_paths() {
        let config = json!({
            "metadata": { "name": "ok", "labels": { "app": 7 } },
            "spec": {
                "action": "MAYBE",
                "ports": [80],
                "rules": [{ "key": "a" }, { "value": "b" }, "c"],
                "port_level": { "9090": { "mode": "LAX" } }
            }
        });
        let diagnostics = validate_config(&schema(), &config);
        assert_eq!(
            summaries(&diagnostics),
            vec![
                (DIAG_INCORRECT_TYPE.to_string(), r#"metadata.labels["app"]"#.to_string()),
                (DIAG_INVALID_VALUE.to_string(), "spec.action".to_string()),
                (DIAG_INVALID_VALUE.to_string(), r#"spec.port_level["9090"].mode"#.to_string()),
                (DIAG_INCORRECT_TYPE.to_string(), "spec.ports[0]".to_string()),
                (DIAG_UNSUPPORTED_ARGUMENT.to_string(), "spec.rules[1].value".to_string()),
                (DIAG_MISSING_ARGUMENT.to_string(), "spec.rules[1].key".to_string()),
                (DIAG_INCORRECT_TYPE.to_string(), "spec.rules[2]".to_string()),
            ]
        );
    }

    #[test]
    fn wrong_top_level_type() {
        let diagnostics = validate_config(&schema(), &json!(["not", "an", "object"]));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.has_error());
    }
}
