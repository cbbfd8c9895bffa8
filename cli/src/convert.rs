#![deny(missing_docs)]

//! # Convert Command
//!
//! Reads an OpenAPI document and writes the AsciiDoc sections.

use std::path::PathBuf;

use oas2adoc_core::{convert_file, AppResult, InputFormat};

/// Arguments for the conversion.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Path to the OpenAPI document (JSON, or YAML by extension).
    #[clap(default_value = "swagger.json", env = "OAS2ADOC_INPUT")]
    pub input: PathBuf,

    /// Directory receiving the generated `.adoc` files.
    #[clap(default_value = "./adoc_output", env = "OAS2ADOC_OUTPUT")]
    pub output: PathBuf,

    /// Input format, overriding detection from the file extension.
    #[clap(long, value_parser = parse_format)]
    pub format: Option<InputFormat>,
}

fn parse_format(s: &str) -> Result<InputFormat, String> {
    s.parse()
}

/// Executes the conversion.
pub fn execute(args: &ConvertArgs) -> AppResult<()> {
    tracing::info!(
        "Generating AsciiDoc from {:?} into {:?}",
        args.input,
        args.output
    );

    let written = convert_file(&args.input, &args.output, args.format)?;
    for path in &written {
        tracing::debug!("Wrote {:?}", path);
    }

    Ok(())
}
