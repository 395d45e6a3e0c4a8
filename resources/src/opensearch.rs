//! `opensearchservice.services.k8s.aws/v1alpha1` resources of the ACK OpenSearch controller.

use crate::ack::{SecretKeyReference, Tag};
use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DESIRED_STATES: &[&str] = &["ENABLED", "DISABLED"];
const TIME_UNITS: &[&str] = &["HOURS"];
const TLS_POLICIES: &[&str] = &["Policy-Min-TLS-1-0-2019-07", "Policy-Min-TLS-1-2-2019-07"];
const VOLUME_TYPES: &[&str] = &["standard", "gp2", "io1", "gp3"];

/// An Amazon OpenSearch Service domain.
pub struct Domain;

impl ManifestResource for Domain {
    type Spec = DomainSpec;
    const GROUP: &'static str = "opensearchservice.services.k8s.aws";
    const VERSION: &'static str = "v1alpha1";
    const KIND: &'static str = "Domain";
    const DESCRIPTION: &'static str = "Domain is the Schema for the Domains API";

    fn spec_schema() -> Attribute {
        Attribute::object("DomainSpec defines the desired state of Domain.")
            .required()
            .attribute(
                "access_policies",
                Attribute::string("IAM access policy as a JSON-formatted string."),
            )
            .attribute(
                "advanced_options",
                Attribute::string_map(
                    "Option to allow references to indices in an HTTP request body.",
                ),
            )
            .attribute("advanced_security_options", advanced_security_options_schema())
            .attribute(
                "auto_tune_options",
                Attribute::object("Specifies Auto-Tune options.")
                    .attribute(
                        "desired_state",
                        Attribute::string("The Auto-Tune desired state.")
                            .validator(Validator::OneOf(DESIRED_STATES)),
                    )
                    .attribute(
                        "maintenance_schedules",
                        Attribute::object_list("A list of maintenance schedules.")
                            .attribute(
                                "cron_expression_for_recurrence",
                                Attribute::string("A cron expression for a recurring maintenance \
                                    schedule."),
                            )
                            .attribute(
                                "duration",
                                Attribute::object("The maintenance schedule duration.")
                                    .attribute(
                                        "unit",
                                        Attribute::string("The unit of a maintenance schedule \
                                            duration.")
                                        .validator(Validator::OneOf(TIME_UNITS)),
                                    )
                                    .attribute(
                                        "value",
                                        Attribute::int64("Integer to specify the value of a \
                                            maintenance schedule duration.")
                                        .validator(Validator::Int64Between(1, 24)),
                                    ),
                            )
                            .attribute(
                                "start_at",
                                Attribute::string("The timestamp at which the Auto-Tune \
                                    maintenance schedule starts.")
                                .validator(Validator::DateTime),
                            ),
                    ),
            )
            .attribute("cluster_config", cluster_config_schema())
            .attribute(
                "cognito_options",
                Attribute::object(
                    "Options to specify the Cognito user and identity pools for OpenSearch \
                    Dashboards authentication.",
                )
                .attribute(
                    "enabled",
                    Attribute::bool("The option to enable Cognito for OpenSearch Dashboards \
                        authentication."),
                )
                .attribute(
                    "identity_pool_id",
                    Attribute::string("The Cognito identity pool ID."),
                )
                .attribute(
                    "role_arn",
                    Attribute::string("The role ARN that provides OpenSearch permissions for \
                        accessing Cognito resources."),
                )
                .attribute("user_pool_id", Attribute::string("The Cognito user pool ID.")),
            )
            .attribute(
                "domain_endpoint_options",
                Attribute::object("Options to specify configurations that will be applied to the \
                    domain endpoint.")
                .attribute(
                    "custom_endpoint",
                    Attribute::string("The fully qualified domain for your custom endpoint."),
                )
                .attribute(
                    "custom_endpoint_certificate_arn",
                    Attribute::string("The ACM certificate ARN for your custom endpoint."),
                )
                .attribute(
                    "custom_endpoint_enabled",
                    Attribute::bool("Whether to enable a custom endpoint for the domain."),
                )
                .attribute(
                    "enforce_https",
                    Attribute::bool("Whether only HTTPS endpoint should be enabled for the \
                        domain."),
                )
                .attribute(
                    "tls_security_policy",
                    Attribute::string("The TLS security policy to apply to the HTTPS endpoint \
                        of the domain.")
                    .validator(Validator::OneOf(TLS_POLICIES)),
                ),
            )
            .attribute(
                "ebs_options",
                Attribute::object("Options to enable, disable, and specify the type and size of \
                    EBS storage volumes.")
                .attribute(
                    "ebs_enabled",
                    Attribute::bool("Whether EBS-based storage is enabled."),
                )
                .attribute(
                    "iops",
                    Attribute::int64("The IOPS for Provisioned IOPS And GP3 EBS volume (SSD).")
                        .validator(Validator::Int64AtLeast(0)),
                )
                .attribute(
                    "throughput",
                    Attribute::int64("The Throughput for GP3 EBS volume (SSD).")
                        .validator(Validator::Int64AtLeast(0)),
                )
                .attribute(
                    "volume_size",
                    Attribute::int64("Integer to specify the size of an EBS volume.")
                        .validator(Validator::Int64AtLeast(1)),
                )
                .attribute(
                    "volume_type",
                    Attribute::string("The type of EBS volume, standard, gp2, gp3 or io1.")
                        .validator(Validator::OneOf(VOLUME_TYPES)),
                ),
            )
            .attribute(
                "encryption_at_rest_options",
                Attribute::object("Options for encryption of data at rest.")
                    .attribute(
                        "enabled",
                        Attribute::bool("The option to enable encryption at rest."),
                    )
                    .attribute(
                        "kms_key_id",
                        Attribute::string("The KMS key ID for encryption at rest options."),
                    ),
            )
            .attribute(
                "engine_version",
                Attribute::string(
                    "String of format Elasticsearch_X.Y or OpenSearch_X.Y to specify the engine \
                    version for the Amazon OpenSearch Service domain.",
                ),
            )
            .attribute(
                "name",
                Attribute::string("The name of the Amazon OpenSearch Service domain.").required(),
            )
            .attribute(
                "node_to_node_encryption_options",
                Attribute::object("Node-to-node encryption options.").attribute(
                    "enabled",
                    Attribute::bool("True to enable node-to-node encryption."),
                ),
            )
            .attribute(
                "tags",
                Tag::schema("A list of Tag added during domain creation."),
            )
            .attribute(
                "vpc_options",
                Attribute::object("Options to specify the subnets and security groups for a VPC \
                    endpoint.")
                .attribute(
                    "security_group_ids",
                    Attribute::string_list("The security groups for the VPC endpoint."),
                )
                .attribute(
                    "subnet_ids",
                    Attribute::string_list("The subnets for the VPC endpoint."),
                ),
            )
    }
}

fn advanced_security_options_schema() -> Attribute {
    Attribute::object("Specifies advanced security options.")
        .attribute(
            "anonymous_auth_enabled",
            Attribute::bool("True if Anonymous auth is enabled."),
        )
        .attribute(
            "enabled",
            Attribute::bool("True if advanced security is enabled."),
        )
        .attribute(
            "internal_user_database_enabled",
            Attribute::bool("True if the internal user database is enabled."),
        )
        .attribute(
            "master_user_options",
            Attribute::object("Credentials for the master user: username and password, ARN, or \
                both.")
            .attribute(
                "master_user_arn",
                Attribute::string("The Amazon Resource Name (ARN) of the master user."),
            )
            .attribute(
                "master_user_name",
                Attribute::string("The user name of the master user."),
            )
            .attribute(
                "master_user_password",
                SecretKeyReference::schema(
                    "SecretKeyReference combines a k8s corev1.SecretReference with a specific key \
                    within the referred-to Secret",
                ),
            ),
        )
        .attribute(
            "s_aml_options",
            Attribute::object("The SAML application configuration for the domain.")
                .attribute(
                    "enabled",
                    Attribute::bool("True if SAML is enabled."),
                )
                .attribute(
                    "idp",
                    Attribute::object("The SAML Identity Provider's information.")
                        .attribute(
                            "entity_id",
                            Attribute::string("The unique entity ID of the application in SAML \
                                identity provider.")
                            .required(),
                        )
                        .attribute(
                            "metadata_content",
                            Attribute::string("The metadata of the SAML application in XML \
                                format.")
                            .required(),
                        ),
                )
                .attribute(
                    "master_backend_role",
                    Attribute::string("The backend role that the SAML master user is mapped to."),
                )
                .attribute(
                    "master_user_name",
                    Attribute::string("The SAML master username, which is stored in the Amazon \
                        OpenSearch Service domain's internal database."),
                )
                .attribute(
                    "roles_key",
                    Attribute::string("Element of the SAML assertion to use for backend roles."),
                )
                .attribute(
                    "session_timeout_minutes",
                    Attribute::int64("The duration, in minutes, after which a user session \
                        becomes inactive.")
                    .validator(Validator::Int64Between(1, 1440)),
                )
                .attribute(
                    "subject_key",
                    Attribute::string("Element of the SAML assertion to use for username."),
                ),
        )
}

fn cluster_config_schema() -> Attribute {
    Attribute::object("Container for the cluster configuration of a domain.")
        .attribute(
            "cold_storage_options",
            Attribute::object("Specifies the configuration for cold storage options.").attribute(
                "enabled",
                Attribute::bool("Enable cold storage option.").required(),
            ),
        )
        .attribute(
            "dedicated_master_count",
            Attribute::int64("Number of dedicated master nodes in the cluster.")
                .validator(Validator::Int64AtLeast(1)),
        )
        .attribute(
            "dedicated_master_enabled",
            Attribute::bool("Indicates whether dedicated master nodes are enabled."),
        )
        .attribute(
            "dedicated_master_type",
            Attribute::string("OpenSearch Service instance type of the dedicated master nodes."),
        )
        .attribute(
            "instance_count",
            Attribute::int64("Number of data nodes in the cluster.")
                .validator(Validator::Int64AtLeast(1)),
        )
        .attribute(
            "instance_type",
            Attribute::string("Instance type of data nodes in the cluster."),
        )
        .attribute(
            "warm_count",
            Attribute::int64("The number of warm nodes in the cluster.")
                .validator(Validator::Int64Between(2, 150)),
        )
        .attribute(
            "warm_enabled",
            Attribute::bool("Whether to enable warm storage for the cluster."),
        )
        .attribute(
            "warm_type",
            Attribute::string("The instance type for the cluster's warm nodes."),
        )
        .attribute(
            "zone_awareness_config",
            Attribute::object("The zone awareness configuration for the domain cluster.")
                .attribute(
                    "availability_zone_count",
                    Attribute::int64("If you enabled multiple Availability Zones, this value is \
                        the number of zones that you want the domain to use.")
                    .validator(Validator::Int64Between(2, 3)),
                ),
        )
        .attribute(
            "zone_awareness_enabled",
            Attribute::bool("Indicates whether multiple Availability Zones are enabled."),
        )
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DomainSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<AdvancedSecurityOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_tune_options: Option<AutoTuneOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_config: Option<ClusterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<CognitoOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<DomainEndpointOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<EbsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<EncryptionAtRestOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_to_node_encryption_options: Option<NodeToNodeEncryptionOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<VpcOptions>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AdvancedSecurityOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymous_auth_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_user_database_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_options: Option<MasterUserOptions>,
    #[serde(
        rename(serialize = "sAMLOptions", deserialize = "s_aml_options"),
        skip_serializing_if = "Option::is_none"
    )]
    pub saml_options: Option<SamlOptions>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct MasterUserOptions {
    #[serde(
        rename(serialize = "masterUserARN"),
        skip_serializing_if = "Option::is_none"
    )]
    pub master_user_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<SecretKeyReference>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SamlOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp: Option<SamlIdp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_backend_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_timeout_minutes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SamlIdp {
    #[serde(rename(serialize = "entityID"))]
    pub entity_id: String,
    pub metadata_content: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AutoTuneOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_schedules: Option<Vec<AutoTuneMaintenanceSchedule>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AutoTuneMaintenanceSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression_for_recurrence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Duration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ClusterConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cold_storage_options: Option<ColdStorageOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_master_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_awareness_config: Option<ZoneAwarenessConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_awareness_enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ColdStorageOptions {
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ZoneAwarenessConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone_count: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CognitoOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(
        rename(serialize = "identityPoolID"),
        skip_serializing_if = "Option::is_none"
    )]
    pub identity_pool_id: Option<String>,
    #[serde(
        rename(serialize = "roleARN"),
        skip_serializing_if = "Option::is_none"
    )]
    pub role_arn: Option<String>,
    #[serde(
        rename(serialize = "userPoolID"),
        skip_serializing_if = "Option::is_none"
    )]
    pub user_pool_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct DomainEndpointOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoint: Option<String>,
    #[serde(
        rename(serialize = "customEndpointCertificateARN"),
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_endpoint_certificate_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_endpoint_enabled: Option<bool>,
    #[serde(
        rename(serialize = "enforceHTTPS"),
        skip_serializing_if = "Option::is_none"
    )]
    pub enforce_https: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_security_policy: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EbsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct EncryptionAtRestOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(
        rename(serialize = "kmsKeyID"),
        skip_serializing_if = "Option::is_none"
    )]
    pub kms_key_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct NodeToNodeEncryptionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VpcOptions {
    #[serde(
        rename(serialize = "securityGroupIDs"),
        skip_serializing_if = "Option::is_none"
    )]
    pub security_group_ids: Option<Vec<String>>,
    #[serde(
        rename(serialize = "subnetIDs"),
        skip_serializing_if = "Option::is_none"
    )]
    pub subnet_ids: Option<Vec<String>>,
}

#[cfg(test)]
mod test {
    use super::DomainSpec;
    use crdform_model::Configuration;
    use serde_json::json;

    #[test]
    fn saml_options_key() {
        let spec = DomainSpec::from_value(json!({
            "name": "search",
            "advanced_security_options": {
                "enabled": true,
                "master_user_options": { "master_user_arn": "arn:aws:iam::1:user/admin" },
                "s_aml_options": {
                    "enabled": true,
                    "idp": { "entity_id": "https://idp.example.com", "metadata_content": "<xml/>" },
                    "session_timeout_minutes": 60,
                },
            },
            "vpc_options": { "security_group_ids": ["sg-1"], "subnet_ids": ["subnet-1"] },
        }))
        .unwrap();
        let value = spec.into_value().unwrap();
        let security = &value["advancedSecurityOptions"];
        assert_eq!(security["masterUserOptions"]["masterUserARN"], "arn:aws:iam::1:user/admin");
        assert_eq!(security["sAMLOptions"]["enabled"], true);
        assert_eq!(security["sAMLOptions"]["idp"]["entityID"], "https://idp.example.com");
        assert_eq!(security["sAMLOptions"]["sessionTimeoutMinutes"], 60);
        assert_eq!(value["vpcOptions"]["securityGroupIDs"], json!(["sg-1"]));
        assert_eq!(value["vpcOptions"]["subnetIDs"], json!(["subnet-1"]));
    }
}
