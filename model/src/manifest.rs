use crate::error::{self, Result};
use crate::{Configuration, Metadata};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::core::TypeMeta;
use serde::Serialize;
use snafu::ResultExt;

/// serde_yaml begins every document with a marker, manifests are stored without it.
const DOCUMENT_START: &str = "---\n";

/// A Kubernetes object as it is written to the generated YAML: `apiVersion`, `kind`, `metadata`
/// and `spec`, in that order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Manifest<S>
where
    S: Configuration,
{
    #[serde(flatten)]
    pub types: TypeMeta,
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<S>,
}

impl<S> Manifest<S>
where
    S: Configuration,
{
    pub fn new<S1, S2>(api_version: S1, kind: S2, metadata: Metadata, spec: Option<S>) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            types: TypeMeta {
                api_version: api_version.into(),
                kind: kind.into(),
            },
            metadata: metadata.into(),
            spec,
        }
    }

    /// Returns this object's YAML representation as a String.
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self).context(error::YamlSerializationSnafu)?;
        let mut yaml = yaml
            .strip_prefix(DOCUMENT_START)
            .map(str::to_owned)
            .unwrap_or(yaml);
        if !yaml.ends_with('\n') {
            yaml.push('\n');
        }
        Ok(yaml)
    }
}

#[cfg(test)]
mod test {
    use super::Manifest;
    use crate::{Configuration, Metadata};
    use maplit::btreemap;
    use std::collections::BTreeMap;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all(serialize = "camelCase"))]
    struct WidgetSpec {
        #[serde(skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        replicas: Option<i64>,
    }

    impl Configuration for WidgetSpec {}

    #[test]
    fn yaml_layout() {
        let mut metadata = Metadata::new("my-widget");
        metadata.labels = Some(btreemap! { "app".to_string() => "demo".to_string() });
        let manifest = Manifest::new(
            "example.com/v1",
            "Widget",
            metadata,
            Some(WidgetSpec {
                display_name: Some("Widget".to_string()),
                replicas: None,
            }),
        );
        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.ends_with('\n'));
        assert_eq!(
            yaml.lines().collect::<Vec<_>>(),
            vec![
                "apiVersion: example.com/v1",
                "kind: Widget",
                "metadata:",
                "  labels:",
                "    app: demo",
                "  name: my-widget",
                "spec:",
                "  displayName: Widget",
            ]
        );
    }

    #[test]
    fn absent_spec_is_omitted() {
        let manifest: Manifest<WidgetSpec> =
            Manifest::new("example.com/v1", "Widget", Metadata::new("bare"), None);
        let yaml = manifest.to_yaml().unwrap();
        assert!(!yaml.contains("spec"));
        assert!(!yaml.contains("null"));
        assert!(!yaml.contains("namespace"));
    }

    #[test]
    fn empty_labels_and_annotations_are_omitted() {
        let mut metadata = Metadata::new("bare");
        metadata.labels = Some(BTreeMap::new());
        metadata.annotations = Some(BTreeMap::new());
        let manifest: Manifest<WidgetSpec> =
            Manifest::new("example.com/v1", "Widget", metadata, None);
        assert_eq!(
            manifest.to_yaml().unwrap(),
            "apiVersion: example.com/v1\nkind: Widget\nmetadata:\n  name: bare\n"
        );
    }
}
