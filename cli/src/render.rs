use crate::config::read_config;
use anyhow::{bail, Context, Result};
use clap::{value_parser, Parser};
use crdform_model::constants::ATTR_YAML;
use crdform_provider::{CreateRequest, Provider};
use std::path::PathBuf;

/// Create a resource from a configuration and print the generated manifest.
#[derive(Debug, Parser)]
pub(crate) struct Render {
    /// The resource type name, e.g. `k8s_s3_services_k8s_aws_bucket_v1alpha1`.
    type_name: String,

    /// Path to the resource configuration, a YAML or JSON file.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,

    /// Print the complete resource state as JSON instead of the manifest.
    #[clap(long = "state")]
    state: bool,
}

impl Render {
    pub(crate) async fn run(self, provider: &Provider) -> Result<()> {
        let config = read_config(&self.path).await?;
        let response = provider
            .create(&self.type_name, CreateRequest { config })
            .await;
        for diagnostic in response.diagnostics.iter() {
            eprintln!("{}", diagnostic);
        }
        let state = match response.value {
            Some(state) => state,
            None => bail!("Unable to render '{}'", self.path.display()),
        };

        if self.state {
            println!(
                "{}",
                serde_json::to_string_pretty(&state).context("Could not create string from state.")?
            );
        } else {
            let yaml = state
                .get(ATTR_YAML)
                .and_then(|yaml| yaml.as_str())
                .context("The resource state has no manifest")?;
            print!("{}", yaml);
        }
        Ok(())
    }
}
