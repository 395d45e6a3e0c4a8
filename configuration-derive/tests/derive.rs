use configuration_derive::Configuration;
use crdform_model::Configuration as _;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
struct SampleSpec {
    display_name: Option<String>,
    replicas: Option<i64>,
}

#[test]
fn derived_configuration_reads_attribute_names() {
    let spec = SampleSpec::from_value(json!({ "display_name": "web", "replicas": 2 })).unwrap();
    assert_eq!(
        spec,
        SampleSpec {
            display_name: Some("web".to_string()),
            replicas: Some(2),
        }
    );
    let map = spec.into_map().unwrap();
    assert_eq!(map.get("displayName").unwrap(), &json!("web"));
}
