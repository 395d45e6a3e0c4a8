use crate::validation;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A restriction on the values an attribute accepts. Validators only run on values that are present
/// and of the attribute's declared type, type mismatches are reported separately.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Validator {
    /// The string must be one of the listed values.
    OneOf(&'static [&'static str]),
    /// Every string in the list must be one of the listed values.
    ValuesOneOf(&'static [&'static str]),
    /// The number must be at least this value.
    Int64AtLeast(i64),
    /// The number must be at most this value.
    Int64AtMost(i64),
    /// The number must be within this inclusive range.
    Int64Between(i64, i64),
    /// The string must be a valid Kubernetes object name (RFC 1123 subdomain).
    Name,
    /// The string must be a valid Kubernetes namespace name (RFC 1123 label).
    Namespace,
    /// The map must contain valid Kubernetes label keys and values.
    Labels,
    /// The map must contain valid Kubernetes annotation keys.
    Annotations,
    /// The string must be an RFC 3339 date-time.
    DateTime,
}

impl Validator {
    /// Checks `value` and returns a description of every problem found.
    pub fn validate(&self, value: &Value) -> Vec<String> {
        match self {
            Validator::OneOf(allowed) => match value.as_str() {
                Some(s) => one_of(allowed, s).into_iter().collect(),
                None => Vec::new(),
            },
            Validator::ValuesOneOf(allowed) => match value.as_array() {
                Some(values) => values
                    .iter()
                    .filter_map(Value::as_str)
                    .filter_map(|s| one_of(allowed, s))
                    .collect(),
                None => Vec::new(),
            },
            Validator::Int64AtLeast(min) => match value.as_i64() {
                Some(n) if n < *min => vec![format!("value must be at least {}, got: {}", min, n)],
                _ => Vec::new(),
            },
            Validator::Int64AtMost(max) => match value.as_i64() {
                Some(n) if n > *max => vec![format!("value must be at most {}, got: {}", max, n)],
                _ => Vec::new(),
            },
            Validator::Int64Between(min, max) => match value.as_i64() {
                Some(n) if n < *min || n > *max => vec![format!(
                    "value must be between {} and {}, got: {}",
                    min, max, n
                )],
                _ => Vec::new(),
            },
            Validator::Name => value
                .as_str()
                .map(validation::is_dns1123_subdomain)
                .unwrap_or_default(),
            Validator::Namespace => value
                .as_str()
                .map(validation::is_dns1123_label)
                .unwrap_or_default(),
            Validator::Labels => string_map(value)
                .map(|labels| validation::validate_labels(&labels))
                .unwrap_or_default(),
            Validator::Annotations => string_map(value)
                .map(|annotations| validation::validate_annotations(&annotations))
                .unwrap_or_default(),
            Validator::DateTime => value
                .as_str()
                .map(validation::is_rfc3339)
                .unwrap_or_default(),
        }
    }
}

fn one_of(allowed: &[&str], value: &str) -> Option<String> {
    if allowed.contains(&value) {
        None
    } else {
        Some(format!(
            "value must be one of: [{}], got: {:?}",
            allowed
                .iter()
                .map(|s| format!("{:?}", s))
                .collect::<Vec<_>>()
                .join(" "),
            value
        ))
    }
}

/// Reads a JSON object of strings, skipping entries of any other type.
fn string_map(value: &Value) -> Option<BTreeMap<String, String>> {
    value.as_object().map(|map| {
        map.iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.to_owned(), s.to_owned())))
            .collect()
    })
}

#[cfg(test)]
mod test {
    use super::Validator;
    use serde_json::json;

    #[test]
    fn one_of() {
        let validator = Validator::OneOf(&["ALLOW", "DENY"]);
        assert!(validator.validate(&json!("ALLOW")).is_empty());
        let errors = validator.validate(&json!("allow"));
        assert_eq!(
            errors,
            vec![r#"value must be one of: ["ALLOW" "DENY"], got: "allow""#.to_string()]
        );
    }

    #[test]
    fn values_one_of() {
        let validator = Validator::ValuesOneOf(&["server auth", "client auth"]);
        assert!(validator
            .validate(&json!(["server auth", "client auth"]))
            .is_empty());
        assert_eq!(validator.validate(&json!(["server auth", "x", "y"])).len(), 2);
    }

    #[test]
    fn int64_bounds() {
        assert!(Validator::Int64AtLeast(1).validate(&json!(1)).is_empty());
        assert_eq!(Validator::Int64AtLeast(1).validate(&json!(0)).len(), 1);
        assert_eq!(Validator::Int64AtMost(3).validate(&json!(4)).len(), 1);
        assert!(Validator::Int64Between(1, 3).validate(&json!(3)).is_empty());
        assert_eq!(Validator::Int64Between(1, 3).validate(&json!(-1)).len(), 1);
    }

    #[test]
    fn kubernetes_names() {
        assert!(Validator::Name.validate(&json!("my-bucket")).is_empty());
        assert!(!Validator::Name.validate(&json!("My_Bucket")).is_empty());
        assert!(Validator::Namespace.validate(&json!("default")).is_empty());
        assert!(!Validator::Namespace.validate(&json!("a.b")).is_empty());
    }

    #[test]
    fn maps_and_dates() {
        assert!(Validator::Labels
            .validate(&json!({ "app": "web" }))
            .is_empty());
        assert!(!Validator::Labels
            .validate(&json!({ "app": "web server" }))
            .is_empty());
        assert!(Validator::Annotations
            .validate(&json!({ "note": "anything at all" }))
            .is_empty());
        assert!(Validator::DateTime
            .validate(&json!("2023-03-01T10:00:00Z"))
            .is_empty());
        assert!(!Validator::DateTime.validate(&json!("03/01/2023")).is_empty());
    }
}
