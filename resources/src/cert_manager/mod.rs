//! `cert-manager.io/v1` resources.

mod certificate;
mod cluster_issuer;

pub use certificate::{Certificate, CertificateSpec};
pub use cluster_issuer::{ClusterIssuer, ClusterIssuerSpec};

use crdform_model::Attribute;
use serde::{Deserialize, Serialize};

pub(crate) const GROUP: &str = "cert-manager.io";
pub(crate) const VERSION: &str = "v1";

/// A reference to a specific key within a Secret in the same namespace as the referent.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct SecretKeySelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
}

impl SecretKeySelector {
    pub(crate) fn schema(description: &str) -> Attribute {
        Attribute::object(description)
            .attribute(
                "key",
                Attribute::string(
                    "The key of the entry in the Secret resource's 'data' field to be used. Some \
                    instances of this field may be defaulted, in others it may be required.",
                ),
            )
            .attribute(
                "name",
                Attribute::string("Name of the resource being referred to.").required(),
            )
    }
}
