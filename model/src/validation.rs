/*!

Kubernetes object validation rules, following `k8s.io/apimachinery/pkg/util/validation`. Each
function returns the list of problems found, an empty list means the value is valid.

!*/

use crate::constants::{
    DNS1123_LABEL_MAX_LENGTH, DNS1123_SUBDOMAIN_MAX_LENGTH, LABEL_VALUE_MAX_LENGTH,
    QUALIFIED_NAME_MAX_LENGTH, TOTAL_ANNOTATION_SIZE_LIMIT,
};
use chrono::DateTime;
use regex::Regex;
use std::collections::BTreeMap;

const DNS1123_LABEL_FMT: &str = "[a-z0-9]([-a-z0-9]*[a-z0-9])?";
const QUALIFIED_NAME_FMT: &str = "([A-Za-z0-9][-A-Za-z0-9_.]*)?[A-Za-z0-9]";

lazy_static::lazy_static! {
    static ref DNS1123_LABEL: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(&format!("^{}$", DNS1123_LABEL_FMT)).unwrap()
    };
    static ref DNS1123_SUBDOMAIN: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(&format!("^{0}(\\.{0})*$", DNS1123_LABEL_FMT)).unwrap()
    };
    static ref QUALIFIED_NAME: Regex = {
        #[allow(clippy::unwrap_used)]
        Regex::new(&format!("^{}$", QUALIFIED_NAME_FMT)).unwrap()
    };
}

fn max_len_error(length: usize) -> String {
    format!("must be no more than {} characters", length)
}

/// Tests for a string that conforms to the definition of a subdomain in DNS (RFC 1123). This is
/// the rule for `metadata.name` of most Kubernetes objects.
pub fn is_dns1123_subdomain(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if value.len() > DNS1123_SUBDOMAIN_MAX_LENGTH {
        errors.push(max_len_error(DNS1123_SUBDOMAIN_MAX_LENGTH));
    }
    if !DNS1123_SUBDOMAIN.is_match(value) {
        errors.push(format!(
            "a lowercase RFC 1123 subdomain must consist of lower case alphanumeric characters, \
            '-' or '.', and must start and end with an alphanumeric character (e.g. \
            'example.com', regex used for validation is '{0}(\\.{0})*')",
            DNS1123_LABEL_FMT
        ));
    }
    errors
}

/// Tests for a string that conforms to the definition of a label in DNS (RFC 1123). This is the
/// rule for namespace names.
pub fn is_dns1123_label(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if value.len() > DNS1123_LABEL_MAX_LENGTH {
        errors.push(max_len_error(DNS1123_LABEL_MAX_LENGTH));
    }
    if !DNS1123_LABEL.is_match(value) {
        errors.push(format!(
            "a lowercase RFC 1123 label must consist of lower case alphanumeric characters or \
            '-', and must start and end with an alphanumeric character (e.g. 'my-name', regex \
            used for validation is '{}')",
            DNS1123_LABEL_FMT
        ));
    }
    errors
}

/// Tests whether the value is a "qualified name", an optional DNS subdomain prefix and a `/`
/// followed by a name. Label and annotation keys are qualified names.
pub fn is_qualified_name(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let parts: Vec<&str> = value.split('/').collect();
    let name = match parts.as_slice() {
        [name] => *name,
        [prefix, name] => {
            if prefix.is_empty() {
                errors.push("prefix part must be non-empty".to_string());
            } else {
                errors.extend(
                    is_dns1123_subdomain(prefix)
                        .into_iter()
                        .map(|e| format!("prefix part {}", e)),
                );
            }
            *name
        }
        _ => {
            errors.push(format!(
                "a qualified name must consist of alphanumeric characters, '-', '_' or '.', and \
                must start and end with an alphanumeric character (e.g. 'MyName', or \
                'my.name', or '123-abc', regex used for validation is '{}') with an optional DNS \
                subdomain prefix and '/' (e.g. 'example.com/MyName')",
                QUALIFIED_NAME_FMT
            ));
            return errors;
        }
    };

    if name.is_empty() {
        errors.push("name part must be non-empty".to_string());
    } else if name.len() > QUALIFIED_NAME_MAX_LENGTH {
        errors.push(format!("name part {}", max_len_error(QUALIFIED_NAME_MAX_LENGTH)));
    }
    if !QUALIFIED_NAME.is_match(name) {
        errors.push(format!(
            "name part must consist of alphanumeric characters, '-', '_' or '.', and must start \
            and end with an alphanumeric character (e.g. 'MyName', or 'my.name', or '123-abc', \
            regex used for validation is '{}')",
            QUALIFIED_NAME_FMT
        ));
    }
    errors
}

/// Tests whether the value is a valid label value. Empty values are allowed.
pub fn is_valid_label_value(value: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if value.len() > LABEL_VALUE_MAX_LENGTH {
        errors.push(max_len_error(LABEL_VALUE_MAX_LENGTH));
    }
    if !value.is_empty() && !QUALIFIED_NAME.is_match(value) {
        errors.push(format!(
            "a valid label must be an empty string or consist of alphanumeric characters, '-', \
            '_' or '.', and must start and end with an alphanumeric character (e.g. 'MyValue', \
            or 'my_value', or '12345', regex used for validation is '{}')",
            QUALIFIED_NAME_FMT
        ));
    }
    errors
}

/// Validates every key and value of a label map.
pub fn validate_labels(labels: &BTreeMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();
    for (key, value) in labels {
        errors.extend(
            is_qualified_name(key)
                .into_iter()
                .map(|e| format!("label key '{}': {}", key, e)),
        );
        errors.extend(
            is_valid_label_value(value)
                .into_iter()
                .map(|e| format!("label value '{}': {}", value, e)),
        );
    }
    errors
}

/// Validates every key of an annotation map and the total size of the annotations.
pub fn validate_annotations(annotations: &BTreeMap<String, String>) -> Vec<String> {
    let mut errors = Vec::new();
    let mut total_size = 0;
    for (key, value) in annotations {
        errors.extend(
            is_qualified_name(&key.to_lowercase())
                .into_iter()
                .map(|e| format!("annotation key '{}': {}", key, e)),
        );
        total_size += key.len() + value.len();
    }
    if total_size > TOTAL_ANNOTATION_SIZE_LIMIT {
        errors.push(format!(
            "annotations size {} must have at most {} bytes",
            total_size, TOTAL_ANNOTATION_SIZE_LIMIT
        ));
    }
    errors
}

/// Tests whether the value is an RFC 3339 date-time, e.g. `2006-01-02T15:04:05Z07:00`.
pub fn is_rfc3339(value: &str) -> Vec<String> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(_) => Vec::new(),
        Err(e) => vec![format!("must be an RFC 3339 date-time: {}", e)],
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use maplit::btreemap;

    #[test]
    fn subdomain_names() {
        for valid in ["my-bucket", "a", "example.com", "0abc", "a-b.c-d"] {
            assert!(is_dns1123_subdomain(valid).is_empty(), "{}", valid);
        }
        for invalid in ["My-Bucket", "my_bucket", "-abc", "abc-", "", "a..b", ".a"] {
            assert!(!is_dns1123_subdomain(invalid).is_empty(), "{}", invalid);
        }
        assert_eq!(is_dns1123_subdomain(&"a".repeat(254)).len(), 1);
        assert!(is_dns1123_subdomain(&"a".repeat(253)).is_empty());
    }

    #[test]
    fn label_names() {
        assert!(is_dns1123_label("kube-system").is_empty());
        assert!(!is_dns1123_label("kube.system").is_empty());
        assert!(!is_dns1123_label(&"a".repeat(64)).is_empty());
    }

    #[test]
    fn qualified_names() {
        for valid in ["app", "MyName", "my.name", "123-abc", "app.kubernetes.io/name"] {
            assert!(is_qualified_name(valid).is_empty(), "{}", valid);
        }
        for invalid in ["", "/name", "Example.com/name", "a/b/c", "-app", "app.io/"] {
            assert!(!is_qualified_name(invalid).is_empty(), "{}", invalid);
        }
    }

    #[test]
    fn labels() {
        let good = btreemap! {
            "app.kubernetes.io/name".to_string() => "bucket".to_string(),
            "tier".to_string() => "".to_string(),
        };
        assert!(validate_labels(&good).is_empty());

        let bad = btreemap! {
            "tier".to_string() => "front end".to_string(),
            "bad key!".to_string() => "ok".to_string(),
        };
        assert_eq!(validate_labels(&bad).len(), 2);
    }

    #[test]
    fn annotations() {
        let good = btreemap! {
            "Example.com/Description".to_string() => "free text, any characters!".to_string(),
        };
        assert!(validate_annotations(&good).is_empty());

        let too_big = btreemap! {
            "big".to_string() => "x".repeat(TOTAL_ANNOTATION_SIZE_LIMIT),
        };
        assert_eq!(validate_annotations(&too_big).len(), 1);
    }

    #[test]
    fn date_times() {
        assert!(is_rfc3339("2006-01-02T15:04:05Z").is_empty());
        assert!(is_rfc3339("2006-01-02T15:04:05.999+07:00").is_empty());
        assert!(!is_rfc3339("2006-01-02").is_empty());
        assert!(!is_rfc3339("yesterday").is_empty());
    }
}
