use super::WorkloadSelector;
use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};

const ACTIONS: &[&str] = &["ALLOW", "DENY", "AUDIT", "CUSTOM"];

/// Access control for workloads in the mesh.
pub struct AuthorizationPolicy;

impl ManifestResource for AuthorizationPolicy {
    type Spec = AuthorizationPolicySpec;
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "AuthorizationPolicy";
    const DESCRIPTION: &'static str = "Configuration for access control on workloads.";

    fn spec_schema() -> Attribute {
        Attribute::object("Configuration for access control on workloads.")
            .attribute(
                "action",
                Attribute::string("Optional. The action to take if the request is matched with \
                    the rules. Default is ALLOW if not specified.")
                .validator(Validator::OneOf(ACTIONS)),
            )
            .attribute(
                "provider",
                Attribute::object("Specifies detailed configuration of the CUSTOM action.")
                    .attribute(
                        "name",
                        Attribute::string("Specifies the name of the extension provider."),
                    ),
            )
            .attribute(
                "rules",
                Attribute::object_list("Optional. A list of rules to match the request.")
                    .attribute(
                        "from",
                        Attribute::object_list("Optional. from specifies the source of a \
                            request.")
                        .attribute("source", source_schema()),
                    )
                    .attribute(
                        "to",
                        Attribute::object_list("Optional. to specifies the operation of a \
                            request.")
                        .attribute("operation", operation_schema()),
                    )
                    .attribute(
                        "when",
                        Attribute::object_list("Optional. when specifies a list of additional \
                            conditions of a request.")
                        .attribute(
                            "key",
                            Attribute::string("The name of an Istio attribute.").required(),
                        )
                        .attribute(
                            "not_values",
                            Attribute::string_list("Optional. A list of negative match of \
                                values for the attribute."),
                        )
                        .attribute(
                            "values",
                            Attribute::string_list("Optional. A list of allowed values for the \
                                attribute."),
                        ),
                    ),
            )
            .attribute("selector", WorkloadSelector::schema())
            .attribute(
                "target_ref",
                Attribute::object("Optional. The targetRef specifies the gateway the policy \
                    should be applied to.")
                .attribute("group", Attribute::string("group is the group of the target \
                    resource."))
                .attribute("kind", Attribute::string("kind is kind of the target resource."))
                .attribute("name", Attribute::string("name is the name of the target \
                    resource."))
                .attribute("namespace", Attribute::string("namespace is the namespace of the \
                    referent.")),
            )
    }
}

fn source_schema() -> Attribute {
    let lists: &[(&str, &str)] = &[
        (
            "ip_blocks",
            "Optional. A list of IP blocks, populated from the source address of the IP \
            packet.",
        ),
        (
            "namespaces",
            "Optional. A list of namespaces derived from the peer certificate.",
        ),
        ("not_ip_blocks", "Optional. A list of negative match of IP blocks."),
        ("not_namespaces", "Optional. A list of negative match of namespaces."),
        ("not_principals", "Optional. A list of negative match of peer identities."),
        (
            "not_remote_ip_blocks",
            "Optional. A list of negative match of remote IP blocks.",
        ),
        (
            "not_request_principals",
            "Optional. A list of negative match of request identities.",
        ),
        (
            "principals",
            "Optional. A list of peer identities derived from the peer certificate.",
        ),
        (
            "remote_ip_blocks",
            "Optional. A list of IP blocks, populated from X-Forwarded-For header or proxy \
            protocol.",
        ),
        (
            "request_principals",
            "Optional. A list of request identities derived from the JWT.",
        ),
    ];
    lists.iter().fold(
        Attribute::object("Source specifies the source of a request."),
        |source, (name, description)| {
            source.attribute(*name, Attribute::string_list(*description))
        },
    )
}

fn operation_schema() -> Attribute {
    let lists: &[(&str, &str)] = &[
        (
            "hosts",
            "Optional. A list of hosts as specified in the HTTP request.",
        ),
        (
            "methods",
            "Optional. A list of methods as specified in the HTTP request.",
        ),
        (
            "not_hosts",
            "Optional. A list of negative match of hosts as specified in the HTTP request.",
        ),
        (
            "not_methods",
            "Optional. A list of negative match of methods as specified in the HTTP \
            request.",
        ),
        ("not_paths", "Optional. A list of negative match of paths."),
        (
            "not_ports",
            "Optional. A list of negative match of ports as specified in the connection.",
        ),
        (
            "paths",
            "Optional. A list of paths as specified in the HTTP request.",
        ),
        ("ports", "Optional. A list of ports as specified in the connection."),
    ];
    lists.iter().fold(
        Attribute::object("Operation specifies the operation of a request."),
        |operation, (name, description)| {
            operation.attribute(*name, Attribute::string_list(*description))
        },
    )
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AuthorizationPolicySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ExtensionProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<WorkloadSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_ref: Option<PolicyTargetReference>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ExtensionProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Vec<RuleFrom>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Vec<RuleTo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<Vec<Condition>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RuleFrom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_blocks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_ip_blocks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_principals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_remote_ip_blocks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_request_principals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principals: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip_blocks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_principals: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct RuleTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Operation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_hosts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_ports: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Condition {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_values: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PolicyTargetReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[cfg(test)]
mod test {
    use super::AuthorizationPolicy;
    use crdform_model::schema::validate_config;
    use crdform_provider::{CrdResource, Resource};
    use serde_json::json;

    #[test]
    fn action_must_be_upper_case() {
        let schema = CrdResource::<AuthorizationPolicy>::new().schema();
        let diagnostics = validate_config(
            &schema,
            &json!({
                "metadata": { "name": "deny-all" },
                "spec": { "action": "deny" },
            }),
        );
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Invalid attribute value");
        assert!(diagnostic.detail.contains(r#"["ALLOW" "DENY" "AUDIT" "CUSTOM"]"#));
        assert!(diagnostic.detail.contains(r#"got: "deny""#));
    }

    #[test]
    fn condition_key_is_required() {
        let schema = CrdResource::<AuthorizationPolicy>::new().schema();
        let diagnostics = validate_config(
            &schema,
            &json!({
                "metadata": { "name": "httpbin" },
                "spec": {
                    "rules": [{
                        "to": [{ "operation": { "methods": ["GET"] } }],
                        "when": [
                            { "key": "request.auth.claims[iss]", "values": ["https://x"] },
                            { "values": ["a"] },
                        ],
                    }],
                },
            }),
        );
        let found: Vec<_> = diagnostics
            .iter()
            .map(|d| (d.summary.clone(), d.attribute.as_ref().unwrap().to_string()))
            .collect();
        assert_eq!(
            found,
            vec![(
                "Missing required argument".to_string(),
                "spec.rules[0].when[1].key".to_string()
            )]
        );
    }
}
