use anyhow::{Context, Result};
use clap::Parser;
use crdform_provider::Provider;

/// Print the attribute schema of a resource type as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    /// The resource type name, e.g. `k8s_s3_services_k8s_aws_bucket_v1alpha1`.
    type_name: String,
}

impl Schema {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        let schema = provider
            .schema(&self.type_name)
            .context(format!("Unknown resource type '{}'", self.type_name))?;
        println!(
            "{}",
            serde_json::to_string_pretty(&schema).context("Could not create string from schema.")?
        );
        Ok(())
    }
}
