use crate::constants::{ATTR_ANNOTATIONS, ATTR_LABELS, ATTR_NAME, ATTR_NAMESPACE};
use crate::schema::{Attribute, Validator};
use crate::Configuration;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The user-settable part of a Kubernetes object's `metadata`. The attribute names are the same in
/// configuration and in the generated manifest.
#[derive(Serialize, Deserialize, Debug, Default, Eq, PartialEq, Clone)]
pub struct Metadata {
    /// Unique within a namespace, validated against Kubernetes naming rules.
    pub name: String,
    /// Only present for namespaced kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl Configuration for Metadata {}

impl Metadata {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The `metadata` attribute of a resource schema. Cluster-scoped kinds have no `namespace`.
    pub fn schema(namespaced: bool) -> Attribute {
        let mut metadata = Attribute::object("Data that helps uniquely identify the object.")
            .required()
            .attribute(
                ATTR_NAME,
                Attribute::string(
                    "Unique identifier for this object. For more information see \
                    https://kubernetes.io/docs/concepts/overview/working-with-objects/names/#names",
                )
                .required()
                .validator(Validator::Name),
            )
            .attribute(
                ATTR_LABELS,
                Attribute::string_map(
                    "Map of string keys and values that can be used to organize and categorize \
                    (scope and select) objects. For more information see \
                    https://kubernetes.io/docs/concepts/overview/working-with-objects/labels",
                )
                .validator(Validator::Labels),
            )
            .attribute(
                ATTR_ANNOTATIONS,
                Attribute::string_map(
                    "Unstructured key value map stored with a resource that may be set by \
                    external tools to store and retrieve arbitrary metadata. For more \
                    information see \
                    https://kubernetes.io/docs/concepts/overview/working-with-objects/annotations",
                )
                .validator(Validator::Annotations),
            );
        if namespaced {
            metadata = metadata.attribute(
                ATTR_NAMESPACE,
                Attribute::string(
                    "Namespace defines the space within which each name must be unique. For more \
                    information see \
                    https://kubernetes.io/docs/concepts/overview/working-with-objects/namespaces/",
                )
                .validator(Validator::Namespace),
            );
        }
        metadata
    }
}

/// Empty label and annotation maps are left out of the `ObjectMeta`.
impl From<Metadata> for ObjectMeta {
    fn from(metadata: Metadata) -> Self {
        ObjectMeta {
            name: Some(metadata.name),
            namespace: metadata.namespace,
            labels: metadata.labels.filter(|labels| !labels.is_empty()),
            annotations: metadata
                .annotations
                .filter(|annotations| !annotations.is_empty()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::Metadata;
    use crate::Configuration;
    use serde_json::json;

    #[test]
    fn namespace_only_for_namespaced_kinds() {
        let namespaced = Metadata::schema(true);
        let cluster = Metadata::schema(false);
        assert!(namespaced.kind.nested().unwrap().contains_key("namespace"));
        assert!(!cluster.kind.nested().unwrap().contains_key("namespace"));
        assert!(cluster.kind.nested().unwrap()["name"].is_required());
    }

    #[test]
    fn from_config() {
        let metadata = Metadata::from_value(json!({
            "name": "my-bucket",
            "namespace": null,
            "labels": { "app": "storage" },
        }))
        .unwrap();
        assert_eq!(metadata.name, "my-bucket");
        assert!(metadata.namespace.is_none());
        assert_eq!(metadata.labels.unwrap()["app"], "storage");
        assert!(metadata.annotations.is_none());
    }
}
