use crdform_model::{Attribute, AttributeKind, Attributes, ElementType, Validator};
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

pub(crate) const DATE_TIME: &str = "2023-05-06T07:08:09Z";

/// Builds a configuration that sets every non-computed attribute to a value its validators accept.
pub(crate) fn fill(attributes: &Attributes) -> Value {
    let mut object = Map::new();
    for (name, attribute) in attributes {
        if !attribute.is_computed() {
            object.insert(name.clone(), sample(attribute));
        }
    }
    Value::Object(object)
}

fn sample(attribute: &Attribute) -> Value {
    match &attribute.kind {
        AttributeKind::String => json!(sample_string(attribute)),
        AttributeKind::Int64 => json!(sample_int(attribute)),
        AttributeKind::Float64 => json!(1.5),
        AttributeKind::Bool => json!(true),
        AttributeKind::List(element) => {
            let allowed = attribute.validators.iter().find_map(|v| match v {
                Validator::ValuesOneOf(allowed) => allowed.first(),
                _ => None,
            });
            match allowed {
                Some(value) => json!([value]),
                None => json!([sample_element(*element)]),
            }
        }
        AttributeKind::Map(element) => json!({ "sample-key": sample_element(*element) }),
        AttributeKind::Object(attributes) => fill(attributes),
        AttributeKind::ObjectList(attributes) => json!([fill(attributes)]),
        AttributeKind::ObjectMap(attributes) => json!({ "sample-key": fill(attributes) }),
    }
}

fn sample_string(attribute: &Attribute) -> String {
    for validator in &attribute.validators {
        match validator {
            Validator::OneOf(allowed) => return allowed[0].to_string(),
            Validator::Name => return "sample-name".to_string(),
            Validator::Namespace => return "sample-namespace".to_string(),
            Validator::DateTime => return DATE_TIME.to_string(),
            _ => {}
        }
    }
    "sample".to_string()
}

fn sample_int(attribute: &Attribute) -> i64 {
    let (mut low, mut high) = (i64::MIN, i64::MAX);
    for validator in &attribute.validators {
        match validator {
            Validator::Int64AtLeast(min) => low = low.max(*min),
            Validator::Int64AtMost(max) => high = high.min(*max),
            Validator::Int64Between(min, max) => {
                low = low.max(*min);
                high = high.min(*max);
            }
            _ => {}
        }
    }
    3_i64.clamp(low, high)
}

fn sample_element(element: ElementType) -> Value {
    match element {
        ElementType::String => json!("sample"),
        ElementType::Int64 => json!(3),
        ElementType::Float64 => json!(1.5),
        ElementType::Bool => json!(true),
    }
}

/// Manifest keys that are not the camelCase spelling of their attribute name.
pub(crate) const IRREGULAR_KEYS: &[(&str, &str)] = &[
    ("access_key_id", "accessKeyID"),
    ("block_public_acls", "blockPublicACLs"),
    ("custom_endpoint_certificate_arn", "customEndpointCertificateARN"),
    ("enforce_https", "enforceHTTPS"),
    ("entity_id", "entityID"),
    ("grant_read_acp", "grantReadACP"),
    ("grant_write_acp", "grantWriteACP"),
    ("hosted_zone_id", "hostedZoneID"),
    ("identity_pool_id", "identityPoolID"),
    ("ignore_public_acls", "ignorePublicACLs"),
    ("is_ca", "isCA"),
    ("key_id", "keyID"),
    ("kms_key_id", "kmsKeyID"),
    ("kms_master_key_id", "kmsMasterKeyID"),
    ("master_user_arn", "masterUserARN"),
    ("role_arn", "roleARN"),
    ("s_aml_options", "sAMLOptions"),
    ("security_group_ids", "securityGroupIDs"),
    ("skip_tls_verify", "skipTLSVerify"),
    ("subnet_ids", "subnetIDs"),
    ("user_pool_id", "userPoolID"),
];

/// The manifest key written for an attribute.
pub(crate) fn manifest_key(name: &str) -> String {
    if let Some((_, key)) = IRREGULAR_KEYS.iter().find(|(attribute, _)| *attribute == name) {
        return key.to_string();
    }
    let mut key = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            key.extend(c.to_uppercase());
            upper = false;
        } else {
            key.push(c);
        }
    }
    key
}

/// The manifest content expected for `config`: attribute names are replaced by their manifest
/// keys, map keys and values are kept as they are and null attributes are dropped.
pub(crate) fn expected_manifest(attributes: &Attributes, config: &Value) -> Value {
    let mut object = Map::new();
    for (name, attribute) in attributes {
        match config.get(name) {
            None | Some(Value::Null) => {}
            Some(value) => {
                object.insert(manifest_key(name), expected_value(attribute, value));
            }
        }
    }
    Value::Object(object)
}

pub(crate) fn expected_value(attribute: &Attribute, value: &Value) -> Value {
    match (&attribute.kind, value) {
        (AttributeKind::Object(attributes), _) => expected_manifest(attributes, value),
        (AttributeKind::ObjectList(attributes), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|item| expected_manifest(attributes, item))
                .collect(),
        ),
        (AttributeKind::ObjectMap(attributes), Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), expected_manifest(attributes, item)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Collects every object key in a JSON tree.
pub(crate) fn keys(value: &Value, found: &mut BTreeSet<String>) {
    match value {
        Value::Array(items) => items.iter().for_each(|item| keys(item, found)),
        Value::Object(object) => {
            for (key, item) in object {
                found.insert(key.clone());
                keys(item, found);
            }
        }
        _ => {}
    }
}
