use super::SecretKeySelector;
use configuration_derive::Configuration;
use crdform_model::{Attribute, Validator};
use crdform_provider::ManifestResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const OUTPUT_FORMATS: &[&str] = &["DER", "CombinedPEM"];
const KEY_ALGORITHMS: &[&str] = &["RSA", "ECDSA", "Ed25519"];
const KEY_ENCODINGS: &[&str] = &["PKCS1", "PKCS8"];
const ROTATION_POLICIES: &[&str] = &["Never", "Always"];
const KEY_USAGES: &[&str] = &[
    "signing",
    "digital signature",
    "content commitment",
    "key encipherment",
    "key agreement",
    "data encipherment",
    "cert sign",
    "crl sign",
    "encipher only",
    "decipher only",
    "any",
    "server auth",
    "client auth",
    "code signing",
    "email protection",
    "s/mime",
    "ipsec end system",
    "ipsec tunnel",
    "ipsec user",
    "timestamping",
    "ocsp signing",
    "microsoft sgc",
    "netscape sgc",
];

/// A request for a signed X.509 certificate from an issuer, stored in a Secret.
pub struct Certificate;

impl ManifestResource for Certificate {
    type Spec = CertificateSpec;
    const GROUP: &'static str = super::GROUP;
    const VERSION: &'static str = super::VERSION;
    const KIND: &'static str = "Certificate";
    const DESCRIPTION: &'static str = "A Certificate resource should be created to ensure an up \
        to date and signed X.509 certificate is stored in the Kubernetes Secret resource named in \
        'spec.secretName'.";

    fn spec_schema() -> Attribute {
        Attribute::object("Desired state of the Certificate resource.")
            .required()
            .attribute(
                "additional_output_formats",
                Attribute::object_list(
                    "Defines extra output formats of the private key and signed certificate chain \
                    to be written to this Certificate's target Secret.",
                )
                .attribute(
                    "type",
                    Attribute::string("Type is the name of the format type that should be written \
                        to the Certificate's target Secret.")
                    .required()
                    .validator(Validator::OneOf(OUTPUT_FORMATS)),
                ),
            )
            .attribute(
                "common_name",
                Attribute::string("Requested common name X509 certificate subject attribute."),
            )
            .attribute(
                "dns_names",
                Attribute::string_list("Requested DNS subject alternative names."),
            )
            .attribute(
                "duration",
                Attribute::string("Requested 'duration' (i.e. lifetime) of the Certificate."),
            )
            .attribute(
                "email_addresses",
                Attribute::string_list("Requested email subject alternative names."),
            )
            .attribute(
                "encode_usages_in_request",
                Attribute::bool("Whether the KeyUsage and ExtKeyUsage extensions should be set in \
                    the encoded CSR."),
            )
            .attribute(
                "ip_addresses",
                Attribute::string_list("Requested IP address subject alternative names."),
            )
            .attribute(
                "is_ca",
                Attribute::bool("Requested basic constraints isCA value."),
            )
            .attribute(
                "issuer_ref",
                Attribute::object("Reference to the issuer responsible for issuing the \
                    certificate.")
                .required()
                .attribute("group", Attribute::string("Group of the resource being referred to."))
                .attribute("kind", Attribute::string("Kind of the resource being referred to."))
                .attribute(
                    "name",
                    Attribute::string("Name of the resource being referred to.").required(),
                ),
            )
            .attribute(
                "keystores",
                Attribute::object("Additional keystore output formats to be stored in the \
                    Certificate's Secret.")
                .attribute("jks", keystore_schema("JKS configures options for storing a JKS \
                    keystore in the 'spec.secretName' Secret resource."))
                .attribute("pkcs12", keystore_schema("PKCS12 configures options for storing a \
                    PKCS12 keystore in the 'spec.secretName' Secret resource.")),
            )
            .attribute(
                "literal_subject",
                Attribute::string("Requested X.509 certificate subject, represented using the \
                    LDAP 'String Representation of a Distinguished Name'."),
            )
            .attribute(
                "private_key",
                Attribute::object("Private key options.")
                    .attribute(
                        "algorithm",
                        Attribute::string("Algorithm is the private key algorithm of the \
                            corresponding private key for this certificate.")
                        .validator(Validator::OneOf(KEY_ALGORITHMS)),
                    )
                    .attribute(
                        "encoding",
                        Attribute::string("The private key cryptography standards (PKCS) \
                            encoding for this certificate's private key to be encoded in.")
                        .validator(Validator::OneOf(KEY_ENCODINGS)),
                    )
                    .attribute(
                        "rotation_policy",
                        Attribute::string("RotationPolicy controls how private keys should be \
                            regenerated when a re-issuance is being processed.")
                        .validator(Validator::OneOf(ROTATION_POLICIES)),
                    )
                    .attribute(
                        "size",
                        Attribute::int64("Size is the key bit size of the corresponding private \
                            key for this certificate.")
                        .validator(Validator::Int64AtLeast(0)),
                    ),
            )
            .attribute(
                "renew_before",
                Attribute::string("How long before the currently issued certificate's expiry \
                    cert-manager should renew the certificate."),
            )
            .attribute(
                "revision_history_limit",
                Attribute::int64("The maximum number of CertificateRequest revisions that are \
                    maintained in the Certificate's history.")
                .validator(Validator::Int64AtLeast(1)),
            )
            .attribute(
                "secret_name",
                Attribute::string("Name of the Secret resource that will be automatically created \
                    and managed by this Certificate resource.")
                .required(),
            )
            .attribute(
                "secret_template",
                Attribute::object("Defines annotations and labels to be copied to the \
                    Certificate's Secret.")
                .attribute(
                    "annotations",
                    Attribute::string_map("Annotations is a key value map to be copied to the \
                        target Kubernetes Secret.")
                    .validator(Validator::Annotations),
                )
                .attribute(
                    "labels",
                    Attribute::string_map("Labels is a key value map to be copied to the target \
                        Kubernetes Secret.")
                    .validator(Validator::Labels),
                ),
            )
            .attribute(
                "subject",
                Attribute::object("Requested set of X509 certificate subject attributes.")
                    .attribute("countries", Attribute::string_list("Countries to be used on the \
                        Certificate."))
                    .attribute("localities", Attribute::string_list("Cities to be used on the \
                        Certificate."))
                    .attribute("organizational_units", Attribute::string_list("Organizational \
                        Units to be used on the Certificate."))
                    .attribute("organizations", Attribute::string_list("Organizations to be \
                        used on the Certificate."))
                    .attribute("postal_codes", Attribute::string_list("Postal codes to be used \
                        on the Certificate."))
                    .attribute("provinces", Attribute::string_list("State/Provinces to be used \
                        on the Certificate."))
                    .attribute("serial_number", Attribute::string("Serial number to be used on \
                        the Certificate."))
                    .attribute("street_addresses", Attribute::string_list("Street addresses to \
                        be used on the Certificate.")),
            )
            .attribute(
                "uris",
                Attribute::string_list("Requested URI subject alternative names."),
            )
            .attribute(
                "usages",
                Attribute::string_list("Requested key usages and extended key usages.")
                    .validator(Validator::ValuesOneOf(KEY_USAGES)),
            )
    }
}

fn keystore_schema(description: &str) -> Attribute {
    Attribute::object(description)
        .attribute(
            "create",
            Attribute::bool("Create enables keystore creation for the Certificate.").required(),
        )
        .attribute(
            "password_secret_ref",
            SecretKeySelector::schema("PasswordSecretRef is a reference to a key in a Secret \
                resource containing the password used to encrypt the keystore.")
            .required(),
        )
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct CertificateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_output_formats: Option<Vec<OutputFormat>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encode_usages_in_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,
    #[serde(
        rename(serialize = "isCA"),
        skip_serializing_if = "Option::is_none"
    )]
    pub is_ca: Option<bool>,
    pub issuer_ref: IssuerReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keystores: Option<Keystores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<PrivateKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renew_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i64>,
    pub secret_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_template: Option<SecretTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<X509Subject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usages: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct OutputFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct IssuerReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Keystores {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jks: Option<Keystore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkcs12: Option<Keystore>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct Keystore {
    pub create: bool,
    pub password_secret_ref: SecretKeySelector,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct PrivateKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct SecretTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct X509Subject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_units: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_codes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provinces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_addresses: Option<Vec<String>>,
}

#[cfg(test)]
mod test {
    use super::Certificate;
    use crdform_model::schema::validate_config;
    use crdform_provider::{CrdResource, Resource};
    use serde_json::json;

    fn problems(spec: serde_json::Value) -> Vec<String> {
        let schema = CrdResource::<Certificate>::new().schema();
        validate_config(
            &schema,
            &json!({ "metadata": { "name": "web", "namespace": "default" }, "spec": spec }),
        )
        .iter()
        .map(|d| d.attribute.as_ref().map(|a| a.to_string()).unwrap_or_default())
        .collect()
    }

    #[test]
    fn enums_and_bounds() {
        assert!(problems(json!({
            "issuer_ref": { "name": "letsencrypt" },
            "secret_name": "web-tls",
            "private_key": {
                "algorithm": "ECDSA",
                "encoding": "PKCS8",
                "rotation_policy": "Always",
            },
            "revision_history_limit": 1,
            "usages": ["server auth", "digital signature"],
        }))
        .is_empty());

        assert_eq!(
            problems(json!({
                "issuer_ref": { "name": "letsencrypt" },
                "secret_name": "web-tls",
                "private_key": { "algorithm": "DSA", "encoding": "PKCS12" },
                "revision_history_limit": 0,
                "usages": ["server auth", "mind control"],
            })),
            vec![
                "spec.private_key.algorithm",
                "spec.private_key.encoding",
                "spec.revision_history_limit",
                "spec.usages",
            ]
        );
    }

    #[test]
    fn issuer_and_secret_are_required() {
        assert_eq!(
            problems(json!({})),
            vec!["spec.issuer_ref", "spec.secret_name"]
        );
    }
}
