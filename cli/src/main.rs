#![deny(missing_docs)]

//! # OAS2AsciiDoc CLI
//!
//! Converts an OpenAPI 3 document into AsciiDoc files.
//!
//! Usage: `oas2adoc [INPUT] [OUTPUT]`, defaulting to `swagger.json` and `./adoc_output`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod convert;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI 3 to AsciiDoc converter")]
struct Cli {
    #[clap(flatten)]
    convert: convert::ConvertArgs,

    /// Log filter (e.g. `info`, `debug`, `oas2adoc_core=trace`).
    #[clap(long, env = "OAS2ADOC_LOG", default_value = "info")]
    log_level: String,
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match convert::execute(&cli.convert) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
