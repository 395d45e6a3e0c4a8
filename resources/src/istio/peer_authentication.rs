use super::WorkloadSelector;
use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const MTLS_MODES: &[&str] = &["UNSET", "DISABLE", "PERMISSIVE", "STRICT"];

/// The mutual TLS mode applied to workloads receiving traffic.
pub struct PeerAuthentication;

impl ManifestResource for PeerAuthentication {
    type Spec = PeerAuthenticationSpec;
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "PeerAuthentication";
    const DESCRIPTION: &'static str = "Peer authentication configuration for workloads.";

    fn spec_schema() -> Attribute {
        Attribute::object("Peer authentication configuration for workloads.")
            .attribute("mtls", mtls_schema("Mutual TLS settings for workload."))
            .attribute(
                "port_level_mtls",
                Attribute::object_map("Port specific mutual TLS settings.").attribute(
                    "mode",
                    Attribute::string("Defines the mTLS mode used for peer authentication.")
                        .validator(Validator::OneOf(MTLS_MODES)),
                ),
            )
            .attribute("selector", WorkloadSelector::schema())
    }
}

fn mtls_schema(description: &str) -> Attribute {
    Attribute::object(description).attribute(
        "mode",
        Attribute::string("Defines the mTLS mode used for peer authentication.")
            .validator(Validator::OneOf(MTLS_MODES)),
    )
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PeerAuthenticationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtls: Option<MutualTls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_level_mtls: Option<BTreeMap<String, MutualTls>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<WorkloadSelector>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct MutualTls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

#[cfg(test)]
mod test {
    use super::PeerAuthentication;
    use crdform_provider::{CreateRequest, Provider};
    use serde_json::json;

    #[tokio::test]
    async fn port_level_modes() {
        let provider = Provider::new("k8s", "0").with_resource::<PeerAuthentication>();
        let type_name = "k8s_security_istio_io_peer_authentication_v1beta1";

        let response = provider
            .create(
                type_name,
                CreateRequest {
                    config: json!({
                        "metadata": { "name": "default", "namespace": "istio-system" },
                        "spec": {
                            "mtls": { "mode": "STRICT" },
                            "port_level_mtls": { "8080": { "mode": "PERMISSIVE" } },
                        },
                    }),
                },
            )
            .await;
        let state = response.value.unwrap();
        let yaml = state["yaml"].as_str().unwrap();
        assert!(yaml.contains("portLevelMtls:"), "{}", yaml);
        assert!(yaml.contains("mode: PERMISSIVE"), "{}", yaml);

        let response = provider
            .create(
                type_name,
                CreateRequest {
                    config: json!({
                        "metadata": { "name": "default" },
                        "spec": { "port_level_mtls": { "8080": { "mode": "OFF" } } },
                    }),
                },
            )
            .await;
        assert!(response.value.is_none());
        assert_eq!(
            response
                .diagnostics
                .iter()
                .next()
                .unwrap()
                .attribute
                .as_ref()
                .unwrap()
                .to_string(),
            r#"spec.port_level_mtls["8080"].mode"#
        );
    }
}
