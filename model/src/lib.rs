/*!

This library provides the data model shared by every resource of the provider: the attribute schema
tree and its validators, diagnostics, the Kubernetes manifest written to state as YAML, and the
`Configuration` trait implemented by CRD `spec` models.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use configuration::Configuration;
pub use diagnostic::{AttributePath, Diagnostic, Diagnostics, PathStep, Severity};
pub use error::{Error, Result};
pub use manifest::Manifest;
pub use metadata::Metadata;
pub use schema::{Attribute, AttributeKind, Attributes, ElementType, Mode, Schema, Validator};
use serde::{Deserialize, Serialize};
pub use state::{timestamp_id, ResourceModel};

mod configuration;
pub mod constants;
mod diagnostic;
mod error;
mod manifest;
mod metadata;
pub mod schema;
mod state;
pub mod validation;

/// The resource lifecycle operations a provider serves.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

serde_plain::derive_display_from_serialize!(Operation);

#[test]
fn operation_display() {
    assert_eq!(Operation::Update.to_string(), "update");
    assert_eq!(Operation::Delete.to_string(), "delete");
}
