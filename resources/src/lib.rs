/*!

The Kubernetes custom resources offered by the `k8s` provider. Each module holds the resources of
one API group: the typed `spec` model and the attribute schema mirroring the CRD's OpenAPI schema.

```
let provider = crdform_resources::provider();
assert!(provider
    .metadata()
    .resources
    .contains(&"k8s_s3_services_k8s_aws_bucket_v1alpha1".to_string()));
```

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

mod ack;
pub mod argo;
pub mod cert_manager;
pub mod istio;
pub mod opensearch;
pub mod s3;

use crdform_model::constants::{PROVIDER_TYPE_NAME, PROVIDER_VERSION};
use crdform_provider::Provider;

/// Creates the provider with every resource of this crate registered.
pub fn provider() -> Provider {
    Provider::new(PROVIDER_TYPE_NAME, PROVIDER_VERSION)
        .with_resource::<argo::Rollout>()
        .with_resource::<cert_manager::Certificate>()
        .with_resource::<cert_manager::ClusterIssuer>()
        .with_resource::<istio::AuthorizationPolicy>()
        .with_resource::<istio::PeerAuthentication>()
        .with_resource::<opensearch::Domain>()
        .with_resource::<s3::Bucket>()
}
