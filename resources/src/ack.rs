//! Types shared by the AWS Controllers for Kubernetes (ACK) resources.

use configuration_derive::Configuration;
use crdform_model::Attribute;
use serde::{Deserialize, Serialize};

/// A key/value resource tag.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    pub(crate) fn schema(description: &str) -> Attribute {
        Attribute::object_list(description)
            .attribute("key", Attribute::string("The tag key."))
            .attribute("value", Attribute::string("The tag value."))
    }
}

/// A reference to a key of a Kubernetes secret holding a sensitive value.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Configuration)]
pub struct SecretKeyReference {
    pub key: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl SecretKeyReference {
    pub(crate) fn schema(description: &str) -> Attribute {
        Attribute::object(description)
            .attribute(
                "key",
                Attribute::string("Key is the key within the secret.").required(),
            )
            .attribute(
                "name",
                Attribute::string(
                    "Name is unique within a namespace to reference a secret resource.",
                )
                .required(),
            )
            .attribute(
                "namespace",
                Attribute::string(
                    "Namespace defines the space within which the secret name must be unique.",
                ),
            )
    }
}
