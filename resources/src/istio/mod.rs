//! `security.istio.io/v1beta1` resources.

mod authorization_policy;
mod peer_authentication;

pub use authorization_policy::{AuthorizationPolicy, AuthorizationPolicySpec};
pub use peer_authentication::{PeerAuthentication, PeerAuthenticationSpec};

use crdform_model::{Attribute, Validator};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub(crate) const GROUP: &str = "security.istio.io";
pub(crate) const VERSION: &str = "v1beta1";

/// Selects the workloads a policy applies to by their labels.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct WorkloadSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,
}

impl WorkloadSelector {
    pub(crate) fn schema() -> Attribute {
        Attribute::object(
            "Optional. The selector decides where to apply the policy. If not set, the policy \
            will be applied to all workloads in the same namespace as the policy.",
        )
        .attribute(
            "match_labels",
            Attribute::string_map(
                "One or more labels that indicate a specific set of pods/VMs on which a policy \
                should be applied.",
            )
            .validator(Validator::Labels),
        )
    }
}
