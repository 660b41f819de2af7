//! ERW estimator command-line tool
//!
//! # Usage
//!
//! ```bash
//! # Estimate removal for a request file and print the audited result
//! erw estimate demos/request.toml --pretty
//!
//! # Override model parameters from a separate file
//! erw estimate demos/request.toml --parameters site-parameters.toml
//!
//! # Print the default parameters as TOML
//! erw defaults
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=erw_components=debug`
//! to see the factor breakdown).

use clap::{Parser, Subcommand};
use erw::request::EstimationRequest;
use erw_components::parameters::EstimatorParameters;
use erw_core::errors::{ERWError, ERWResult};
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Carbon removal estimates for enhanced rock weathering applications
#[derive(Parser, Debug)]
#[command(name = "erw")]
#[command(about = "Estimate CO2 removal from basalt applications")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run an estimation request and print the audited result as JSON
    Estimate {
        /// Request file (TOML)
        request: PathBuf,

        /// Parameter overrides (TOML); replaces the request's own parameters
        #[arg(short, long)]
        parameters: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the default estimator parameters as TOML
    Defaults,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!(error = %e, "Estimation failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> ERWResult<String> {
    match args.command {
        Command::Estimate {
            request,
            parameters,
            pretty,
        } => {
            let mut request = EstimationRequest::from_toml_file(&request)?;
            if let Some(path) = parameters {
                request.parameters = EstimatorParameters::from_toml_file(&path)?;
            }
            let audited = request.run()?;
            let json = if pretty {
                serde_json::to_string_pretty(&audited)
            } else {
                serde_json::to_string(&audited)
            };
            json.map_err(|e| ERWError::Serialization(e.to_string()))
        }
        Command::Defaults => EstimatorParameters::default().to_toml_string(),
    }
}
