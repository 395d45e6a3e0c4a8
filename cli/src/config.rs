use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Reads a resource configuration from a YAML or JSON file.
pub(crate) async fn read_config(path: &Path) -> Result<Value> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .context(format!("Unable to read configuration file '{}'", path.display()))?;
    let config: Value = serde_yaml::from_str(&contents).context(format!(
        "Unable to parse configuration file '{}'",
        path.display()
    ))?;
    Ok(config)
}
