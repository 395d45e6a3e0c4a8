use crate::error::{self, Result};
use crate::{Configuration, Manifest, Metadata};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use snafu::OptionExt;

/// The attributes every resource stores in state. `spec` is the only part that differs between
/// resource types.
///
/// `id`, `yaml`, `api_version` and `kind` are computed: whatever arrives in configuration is
/// replaced before the state is written.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ResourceModel<S> {
    pub id: Option<i64>,
    pub yaml: Option<String>,
    pub api_version: Option<String>,
    pub kind: Option<String>,
    pub metadata: Metadata,
    pub spec: Option<S>,
}

impl<S> Configuration for ResourceModel<S> where S: Configuration {}

impl<S> ResourceModel<S>
where
    S: Configuration,
{
    /// Builds the manifest for this model with the given fixed type information. Any
    /// `api_version` or `kind` held by the model is ignored.
    pub fn to_manifest(&self, api_version: &str, kind: &str) -> Manifest<S> {
        Manifest::new(api_version, kind, self.metadata.clone(), self.spec.clone())
    }
}

/// Creates a new resource ID from the current time in nanoseconds. IDs increase over time but are
/// not tied to the identity of a resource and change on every create and update.
pub fn timestamp_id() -> Result<i64> {
    Utc::now()
        .timestamp_nanos_opt()
        .context(error::TimestampOutOfRangeSnafu)
        .map_err(Into::into)
}

#[cfg(test)]
mod test {
    use super::{timestamp_id, ResourceModel};
    use crate::Configuration;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Spec {
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<i64>,
    }

    impl Configuration for Spec {}

    #[test]
    fn user_type_information_is_ignored() {
        let model = ResourceModel::<Spec>::from_value(json!({
            "id": null,
            "yaml": null,
            "api_version": "wrong/v9",
            "kind": "Wrong",
            "metadata": { "name": "thing" },
            "spec": { "size": 3 },
        }))
        .unwrap();
        let manifest = model.to_manifest("example.com/v1", "Thing");
        assert_eq!(manifest.types.api_version, "example.com/v1");
        assert_eq!(manifest.types.kind, "Thing");
        assert_eq!(manifest.spec, Some(Spec { size: Some(3) }));
    }

    #[test]
    fn ids_move_forward() {
        let first = timestamp_id().unwrap();
        let second = timestamp_id().unwrap();
        assert!(first > 0);
        assert!(second >= first);
    }
}
