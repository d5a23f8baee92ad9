pub mod annotator;
pub mod cli;
pub mod parser;
pub mod snippet;
pub mod utils;

// Re-export frequently used items for easier access
pub use annotator::{annotate_document, AnnotatedDocument, OperationFailure, HTTP_REQUEST_METHODS, SAMPLES_FIELD};
pub use parser::{parse_spec_file, ParserError};
pub use snippet::{generate_endpoint_snippets, Target, DEFAULT_TARGETS};

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parser error: {0}")]
    ParserError(#[from] parser::ParserError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// The annotated document as YAML text, plus the operations that could not
/// be annotated.
#[derive(Debug)]
pub struct AnnotationReport {
    pub yaml: String,
    pub failures: Vec<OperationFailure>,
}

/// Annotate an OpenAPI specification file with generated request samples
pub fn annotate_spec_file<P: AsRef<Path>>(input_file: P) -> Result<AnnotationReport> {
    // Parse the specification document
    let doc = parser::parse_spec_file(input_file)?;

    // Attach generated samples to every recognized operation
    let annotated = annotator::annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

    // Serialize the mutated tree back to YAML
    let yaml = parser::to_yaml_string(&annotated.document)?;

    Ok(AnnotationReport {
        yaml,
        failures: annotated.failures,
    })
}
