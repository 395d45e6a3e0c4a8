use crate::config::read_config;
use anyhow::{bail, Result};
use clap::{value_parser, Parser};
use crdform_provider::Provider;
use std::path::PathBuf;

/// Check a resource configuration against the schema of its resource type.
#[derive(Debug, Parser)]
pub(crate) struct Validate {
    /// The resource type name, e.g. `k8s_s3_services_k8s_aws_bucket_v1alpha1`.
    type_name: String,

    /// Path to the resource configuration, a YAML or JSON file.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,
}

impl Validate {
    pub(crate) async fn run(self, provider: &Provider) -> Result<()> {
        let config = read_config(&self.path).await?;
        let diagnostics = provider.validate_resource_config(&self.type_name, &config);
        for diagnostic in diagnostics.iter() {
            println!("{}", diagnostic);
        }
        if diagnostics.has_error() {
            bail!("'{}' is not a valid configuration", self.path.display());
        }
        println!("'{}' is valid.", self.path.display());
        Ok(())
    }
}
