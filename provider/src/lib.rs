/*!

The `crdform-provider` library turns Kubernetes custom resource definitions into provider resources.
You describe a CRD by implementing [`ManifestResource`] for it, then register it with a [`Provider`]
which validates configurations against the resource schema and dispatches lifecycle requests.

Every resource behaves the same way: `create` and `update` render the configuration as a YAML
manifest and store it in state with a new timestamp ID, `read` returns the stored state, and
`delete` does nothing.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub mod error;
mod provider;
mod requests;
pub mod resource;

pub use crdform_model::{Configuration, Diagnostic, Diagnostics, Operation};
pub use provider::{Provider, ProviderMetadata};
pub use requests::{CreateRequest, DeleteRequest, ReadRequest, Response, State, UpdateRequest};
pub use resource::{
    CrdResource, IntoProviderError, ManifestResource, ProviderError, ProviderResult, Resource,
};
