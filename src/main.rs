// This is the entry point for the CLI application.
// It parses command-line arguments and delegates to the library for further processing.

use std::process;

use clap::Parser;
use openapi_sample_annotator::annotate_spec_file;
use openapi_sample_annotator::cli::Args;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Diagnostics go to stderr; stdout is reserved for the annotated document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let report = match annotate_spec_file(&args.input) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error annotating specification: {}", err);
            process::exit(1);
        }
    };

    // Operations that could not be annotated are reported but never fatal
    for failure in &report.failures {
        tracing::warn!(
            path = %failure.path,
            method = %failure.method,
            error = %failure.error,
            "skipping operation: snippet generation failed"
        );
    }

    print!("{}", report.yaml);
}
