use anyhow::{Context, Result};
use clap::Parser;
use crdform_provider::Provider;
use serde::Serialize;
use tabled::{Style, Table, Tabled};

/// List the resource types offered by the provider.
#[derive(Debug, Parser)]
pub(crate) struct Resources {
    /// Output the resources in JSON format.
    #[clap(long = "json")]
    json: bool,
}

#[derive(Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceRow {
    #[tabled(rename = "TYPE NAME")]
    type_name: String,
    #[tabled(rename = "API VERSION")]
    api_version: String,
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "SCOPE")]
    scope: &'static str,
}

impl Resources {
    pub(crate) fn run(self, provider: &Provider) -> Result<()> {
        let rows: Vec<_> = provider
            .resources()
            .map(|(type_name, resource)| ResourceRow {
                type_name: type_name.to_string(),
                api_version: resource.api_version(),
                kind: resource.kind().to_string(),
                scope: if resource.schema().find("metadata.namespace").is_some() {
                    "Namespaced"
                } else {
                    "Cluster"
                },
            })
            .collect();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .context("Could not create string from resources.")?
            );
        } else {
            println!("{}", Table::new(rows).with(Style::blank()));
        }
        Ok(())
    }
}
