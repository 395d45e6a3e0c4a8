/*!

This is the command line interface for the `k8s` provider's resources. It lists the resources,
prints their schemas, and validates or renders a resource configuration the same way the provider
does when it serves a request.

!*/

mod config;
mod render;
mod resources;
mod schema;
mod validate;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

/// Inspect the provider's Kubernetes resources and render their manifests.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// List the resource types offered by the provider.
    Resources(resources::Resources),
    /// Print the attribute schema of a resource type.
    Schema(schema::Schema),
    /// Check a resource configuration against its schema.
    Validate(validate::Validate),
    /// Create a resource from a configuration and print its manifest.
    Render(render::Render),
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let provider = crdform_resources::provider();
    match args.command {
        Command::Resources(resources) => resources.run(&provider),
        Command::Schema(schema) => schema.run(&provider),
        Command::Validate(validate) => validate.run(&provider).await,
        Command::Render(render) => render.run(&provider).await,
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for the provider crates only.
            let mut builder = Builder::new();
            for module in [
                env!("CARGO_CRATE_NAME"),
                "crdform_model",
                "crdform_provider",
                "crdform_resources",
            ] {
                builder.filter(Some(module), level);
            }
            builder.init();
        }
    }
}
