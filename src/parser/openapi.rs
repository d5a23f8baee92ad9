// src/parser/openapi.rs

use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ParserError>;

/// Load a Swagger/OpenAPI specification file into a document tree.
///
/// The file is parsed as YAML, which also accepts plain JSON input.
pub fn parse_spec_file<P: AsRef<Path>>(path: P) -> Result<Value> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;

    parse_spec_string(&content)
}

/// Parse a Swagger/OpenAPI specification from a string.
pub fn parse_spec_string(content: &str) -> Result<Value> {
    let doc: Value = serde_yaml::from_str(content)?;
    Ok(doc)
}

/// Serialize a document tree back to YAML text.
pub fn to_yaml_string(doc: &Value) -> Result<String> {
    let text = serde_yaml::to_string(doc)?;
    Ok(text)
}
