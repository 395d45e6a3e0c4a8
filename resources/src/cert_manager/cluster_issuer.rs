use super::SecretKeySelector;
use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const KEY_ALGORITHMS: &[&str] = &["HS256", "HS384", "HS512"];
const CNAME_STRATEGIES: &[&str] = &["None", "Follow"];

/// A cluster-scoped certificate authority that can sign certificates for any namespace.
pub struct ClusterIssuer;

impl ManifestResource for ClusterIssuer {
    type Spec = ClusterIssuerSpec;
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "ClusterIssuer";
    const NAMESPACED: bool = false;
    const DESCRIPTION: &'static str = "A ClusterIssuer represents a certificate issuing \
        authority which can be referenced as part of 'issuerRef' fields. It is similar to an \
        Issuer, however it is cluster-scoped and therefore can be referenced by resources that \
        exist in *any* namespace, not just the same namespace as the referent.";

    fn spec_schema() -> Attribute {
        Attribute::object("Desired state of the ClusterIssuer resource.")
            .required()
            .attribute("acme", acme_schema())
            .attribute(
                "ca",
                Attribute::object("CA configures this issuer to sign certificates using a signing \
                    CA keypair stored in a Secret resource.")
                .attribute(
                    "crl_distribution_points",
                    Attribute::string_list("The CRL distribution points is an X.509 v3 \
                        certificate extension which identifies the location of the CRL from \
                        which the revocation of this certificate can be checked."),
                )
                .attribute(
                    "ocsp_servers",
                    Attribute::string_list("The OCSP server list is an X.509 v3 extension that \
                        defines a list of URLs of OCSP responders."),
                )
                .attribute(
                    "secret_name",
                    Attribute::string("SecretName is the name of the secret used to sign \
                        Certificates issued by this Issuer.")
                    .required(),
                ),
            )
            .attribute(
                "self_signed",
                Attribute::object("SelfSigned configures this issuer to 'self sign' \
                    certificates using the private key used to create the CertificateRequest \
                    object.")
                .attribute(
                    "crl_distribution_points",
                    Attribute::string_list("The CRL distribution points is an X.509 v3 \
                        certificate extension which identifies the location of the CRL from \
                        which the revocation of this certificate can be checked."),
                ),
            )
            .attribute(
                "vault",
                Attribute::object("Vault configures this issuer to sign certificates using a \
                    HashiCorp Vault PKI backend.")
                .attribute(
                    "auth",
                    Attribute::object("Auth configures how cert-manager authenticates with the \
                        Vault server.")
                    .required()
                    .attribute(
                        "kubernetes",
                        Attribute::object("Kubernetes authenticates with Vault by passing the \
                            ServiceAccount token stored in the named Secret resource to the Vault \
                            server.")
                        .attribute(
                            "mount_path",
                            Attribute::string("The Vault mountPath here is the mount path to use \
                                when authenticating with Vault."),
                        )
                        .attribute(
                            "role",
                            Attribute::string("A required field containing the Vault Role to \
                                assume.")
                            .required(),
                        )
                        .attribute(
                            "secret_ref",
                            SecretKeySelector::schema("The required Secret field containing a \
                                Kubernetes ServiceAccount JWT used for authenticating with \
                                Vault."),
                        ),
                    )
                    .attribute(
                        "token_secret_ref",
                        SecretKeySelector::schema("TokenSecretRef authenticates with Vault by \
                            presenting a token."),
                    ),
                )
                .attribute(
                    "ca_bundle",
                    Attribute::string("Base64-encoded bundle of PEM CAs which will be used to \
                        validate the certificate chain presented by Vault."),
                )
                .attribute(
                    "namespace",
                    Attribute::string("Name of the vault namespace."),
                )
                .attribute(
                    "path",
                    Attribute::string("Path is the mount path of the Vault PKI backend's 'sign' \
                        endpoint.")
                    .required(),
                )
                .attribute(
                    "server",
                    Attribute::string("Server is the connection address for the Vault server.")
                        .required(),
                ),
            )
    }
}

fn acme_schema() -> Attribute {
    Attribute::object("ACME configures this issuer to communicate with a RFC8555 (ACME) server \
        to obtain signed x509 certificates.")
    .attribute(
        "disable_account_key_generation",
        Attribute::bool("Enables or disables generating a new ACME account key."),
    )
    .attribute(
        "email",
        Attribute::string("Email is the email address to be associated with the ACME account."),
    )
    .attribute(
        "enable_duration_feature",
        Attribute::bool("Enables requesting a Not After date on certificates that matches the \
            duration of the certificate."),
    )
    .attribute(
        "external_account_binding",
        Attribute::object("ExternalAccountBinding is a reference to a CA external account of \
            the ACME server.")
        .attribute(
            "key_algorithm",
            Attribute::string("Deprecated: keyAlgorithm field exists for historical \
                compatibility reasons and should not be used.")
            .validator(Validator::OneOf(KEY_ALGORITHMS)),
        )
        .attribute(
            "key_id",
            Attribute::string("keyID is the ID of the CA key that the External Account is bound \
                to.")
            .required(),
        )
        .attribute(
            "key_secret_ref",
            SecretKeySelector::schema("keySecretRef is a Secret Key Selector referencing a data \
                item in a Kubernetes Secret which holds the symmetric MAC key of the External \
                Account Binding.")
            .required(),
        ),
    )
    .attribute(
        "preferred_chain",
        Attribute::string("PreferredChain is the chain to use if the ACME server outputs \
            multiple."),
    )
    .attribute(
        "private_key_secret_ref",
        SecretKeySelector::schema("PrivateKey is the name of a Kubernetes Secret resource that \
            will be used to store the automatically generated ACME account private key.")
        .required(),
    )
    .attribute(
        "server",
        Attribute::string("Server is the URL used to access the ACME server's 'directory' \
            endpoint.")
        .required(),
    )
    .attribute(
        "skip_tls_verify",
        Attribute::bool("Enables or disables validation of the ACME server TLS certificate."),
    )
    .attribute(
        "solvers",
        Attribute::object_list("Solvers is a list of challenge solvers that will be used to \
            solve ACME challenges for the matching domains.")
        .attribute(
            "dns01",
            Attribute::object("Configures cert-manager to attempt to complete authorizations by \
                performing the DNS01 challenge flow.")
            .attribute(
                "cloudflare",
                Attribute::object("Use the Cloudflare API to manage DNS01 challenge records.")
                    .attribute(
                        "api_token_secret_ref",
                        SecretKeySelector::schema("API token used to authenticate with \
                            Cloudflare."),
                    )
                    .attribute(
                        "email",
                        Attribute::string("Email of the account, only required when using API \
                            key based authentication."),
                    ),
            )
            .attribute(
                "cname_strategy",
                Attribute::string("CNAMEStrategy configures how the DNS01 provider should handle \
                    CNAME records when found in DNS zones.")
                .validator(Validator::OneOf(CNAME_STRATEGIES)),
            )
            .attribute(
                "route53",
                Attribute::object("Use the AWS Route53 API to manage DNS01 challenge records.")
                    .attribute(
                        "access_key_id",
                        Attribute::string("The AccessKeyID is used for authentication."),
                    )
                    .attribute(
                        "hosted_zone_id",
                        Attribute::string("If set, the provider will manage only this zone in \
                            Route53 and will not do an lookup using the \
                            route53:ListHostedZonesByName api call."),
                    )
                    .attribute(
                        "region",
                        Attribute::string("Always set the region when using AccessKeyID and \
                            SecretAccessKey")
                        .required(),
                    )
                    .attribute(
                        "role",
                        Attribute::string("Role is a Role ARN which the Route53 provider will \
                            assume using either the explicit credentials AccessKeyID/\
                            SecretAccessKey or the inferred credentials from environment \
                            variables, shared credentials file or AWS Instance metadata"),
                    )
                    .attribute(
                        "secret_access_key_secret_ref",
                        SecretKeySelector::schema("The SecretAccessKey is used for \
                            authentication."),
                    ),
            ),
        )
        .attribute(
            "http01",
            Attribute::object("Configures cert-manager to attempt to complete authorizations by \
                performing the HTTP01 challenge flow.")
            .attribute(
                "ingress",
                Attribute::object("The ingress based HTTP01 challenge solver will solve \
                    challenges by creating or modifying Ingress resources in order to route \
                    requests for '/.well-known/acme-challenge/XYZ' to 'challenge solver' pods \
                    that are provisioned by cert-manager for each Challenge to be completed.")
                .attribute(
                    "class",
                    Attribute::string("This field configures the annotation \
                        'kubernetes.io/ingress.class' when creating Ingress resources to solve \
                        ACME challenges that use this challenge solver."),
                )
                .attribute(
                    "ingress_class_name",
                    Attribute::string("This field configures the field 'ingressClassName' on \
                        the created Ingress resources used to solve ACME challenges that use \
                        this challenge solver."),
                )
                .attribute(
                    "name",
                    Attribute::string("The name of the ingress resource that should have ACME \
                        challenge solving routes inserted into it in order to solve HTTP01 \
                        challenges."),
                )
                .attribute(
                    "service_type",
                    Attribute::string("Optional service type for Kubernetes solver service.")
                        .validator(Validator::OneOf(&["ClusterIP", "NodePort"])),
                ),
            ),
        )
        .attribute(
            "selector",
            Attribute::object("Selector selects a set of DNSNames on the Certificate resource \
                that should be solved using this challenge solver.")
            .attribute(
                "dns_names",
                Attribute::string_list("List of DNSNames that this solver will be used to \
                    solve."),
            )
            .attribute(
                "dns_zones",
                Attribute::string_list("List of DNSZones that this solver will be used to \
                    solve."),
            )
            .attribute(
                "match_labels",
                Attribute::string_map("A label selector that is used to refine the set of \
                    certificate's that this challenge solver will apply to."),
            ),
        ),
    )
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ClusterIssuerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acme: Option<AcmeIssuer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<CaIssuer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_signed: Option<SelfSignedIssuer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultIssuer>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AcmeIssuer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_account_key_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_duration_feature: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account_binding: Option<ExternalAccountBinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_chain: Option<String>,
    pub private_key_secret_ref: SecretKeySelector,
    pub server: String,
    #[serde(
        rename(serialize = "skipTLSVerify"),
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_tls_verify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solvers: Option<Vec<AcmeChallengeSolver>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ExternalAccountBinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_algorithm: Option<String>,
    #[serde(rename(serialize = "keyID"))]
    pub key_id: String,
    pub key_secret_ref: SecretKeySelector,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct AcmeChallengeSolver {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns01: Option<AcmeChallengeSolverDns01>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http01: Option<AcmeChallengeSolverHttp01>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<CertificateDnsNameSelector>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AcmeChallengeSolverDns01 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudflare: Option<AcmeIssuerDns01ProviderCloudflare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route53: Option<AcmeIssuerDns01ProviderRoute53>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AcmeIssuerDns01ProviderCloudflare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token_secret_ref: Option<SecretKeySelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AcmeIssuerDns01ProviderRoute53 {
    #[serde(
        rename(serialize = "accessKeyID"),
        skip_serializing_if = "Option::is_none"
    )]
    pub access_key_id: Option<String>,
    #[serde(
        rename(serialize = "hostedZoneID"),
        skip_serializing_if = "Option::is_none"
    )]
    pub hosted_zone_id: Option<String>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key_secret_ref: Option<SecretKeySelector>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct AcmeChallengeSolverHttp01 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<AcmeChallengeSolverHttp01Ingress>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct AcmeChallengeSolverHttp01Ingress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CertificateDnsNameSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CaIssuer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl_distribution_points: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocsp_servers: Option<Vec<String>>,
    pub secret_name: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SelfSignedIssuer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl_distribution_points: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VaultIssuer {
    pub auth: VaultAuth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub path: String,
    pub server: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VaultAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<VaultKubernetesAuth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_secret_ref: Option<SecretKeySelector>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct VaultKubernetesAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretKeySelector>,
}

#[cfg(test)]
mod test {
    use super::ClusterIssuerSpec;
    use crdform_model::Configuration;
    use serde_json::json;

    #[test]
    fn acme_keys() {
        let spec = ClusterIssuerSpec::from_value(json!({
            "acme": {
                "server": "https://acme-v02.api.letsencrypt.org/directory",
                "private_key_secret_ref": { "name": "account-key" },
                "skip_tls_verify": false,
                "external_account_binding": {
                    "key_id": "kid-1",
                    "key_secret_ref": { "name": "eab", "key": "secret" },
                },
                "solvers": [{
                    "dns01": {
                        "cname_strategy": "Follow",
                        "route53": { "region": "us-west-2", "hosted_zone_id": "Z1" },
                    },
                }],
            },
        }))
        .unwrap();
        let value = spec.into_value().unwrap();
        let acme = &value["acme"];
        assert_eq!(acme["skipTLSVerify"], false);
        assert_eq!(acme["privateKeySecretRef"], json!({ "name": "account-key" }));
        assert_eq!(acme["externalAccountBinding"]["keyID"], "kid-1");
        let dns01 = &acme["solvers"][0]["dns01"];
        assert_eq!(dns01["cnameStrategy"], "Follow");
        assert_eq!(dns01["route53"]["hostedZoneID"], "Z1");
        assert!(value.get("selfSigned").is_none());
    }
}
