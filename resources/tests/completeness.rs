pub(crate) mod mock;

use crdform_provider::CreateRequest;
use crdform_model::constants::{ATTR_METADATA, ATTR_SPEC};
use mock::{expected_value, fill, keys, IRREGULAR_KEYS};
use serde_json::Value;
use std::collections::BTreeSet;

/// Every attribute of every resource reaches the generated manifest under its manifest key: a
/// configuration with all attributes set renders `metadata` and `spec` exactly as expected.
#[tokio::test]
async fn every_attribute_reaches_the_manifest() {
    let provider = crdform_resources::provider();
    let schemas = provider.schemas();
    assert_eq!(schemas.len(), 7);
    let mut manifest_keys = BTreeSet::new();
    for (type_name, schema) in schemas {
        let config = fill(&schema.attributes);
        let diagnostics = provider.validate_resource_config(&type_name, &config);
        assert!(diagnostics.is_empty(), "{}: {}", type_name, diagnostics);

        let response = provider
            .create(
                &type_name,
                CreateRequest {
                    config: config.clone(),
                },
            )
            .await;
        assert!(!response.has_error(), "{}: {}", type_name, response.diagnostics);
        let state = response.value.unwrap();
        let manifest: Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();

        for key in [ATTR_METADATA, ATTR_SPEC] {
            let expected = expected_value(&schema.attributes[key], &config[key]);
            assert_eq!(
                manifest[key], expected,
                "{} {} does not match:\nexpected: {}\nmanifest: {}",
                type_name, key, expected, manifest[key]
            );
        }
        keys(&manifest, &mut manifest_keys);
    }

    for (attribute, key) in IRREGULAR_KEYS {
        assert!(
            manifest_keys.contains(*key),
            "'{}' is not written as '{}' by any resource",
            attribute,
            key
        );
    }
}

/// Every resource's schema and state agree on the shared attributes.
#[tokio::test]
async fn state_has_exactly_the_schema_attributes() {
    let provider = crdform_resources::provider();
    for (type_name, schema) in provider.schemas() {
        let state = provider
            .create(
                &type_name,
                CreateRequest {
                    config: fill(&schema.attributes),
                },
            )
            .await
            .value
            .unwrap();
        let mut state_keys: Vec<_> = state.keys().cloned().collect();
        state_keys.sort();
        let schema_keys: Vec<_> = schema.attributes.keys().cloned().collect();
        assert_eq!(state_keys, schema_keys, "{}", type_name);
        assert_eq!(
            state_keys,
            vec!["api_version", "id", "kind", "metadata", "spec", "yaml"]
        );
    }
}
