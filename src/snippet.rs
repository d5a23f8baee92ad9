pub mod request;
pub mod targets;

pub use request::{build_sample_request, SampleRequest};
pub use targets::{create_renderer, SnippetRenderer, Target, DEFAULT_TARGETS};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("no '{method}' operation under path '{path}'")]
    OperationNotFound { path: String, method: String },

    #[error("operation '{method} {path}' is not a mapping")]
    InvalidOperation { path: String, method: String },

    #[error("malformed parameter: {0}")]
    MalformedParameter(String),

    #[error("unresolvable reference '{0}'")]
    UnresolvedRef(String),
}

pub type Result<T> = std::result::Result<T, SnippetError>;

/// One generated request sample for a single target.
#[derive(Debug, Clone, Serialize)]
pub struct Snippet {
    /// Human-readable title, e.g. "Shell + Curl". The leading word is the
    /// language label consumed by documentation renderers.
    pub title: String,

    /// The sample source code.
    pub content: String,
}

/// Generate request snippets for one operation, one per target, in target
/// order.
///
/// Errors if the operation cannot be found or its parameters are malformed;
/// never panics on odd document shapes.
pub fn generate_endpoint_snippets(
    doc: &Value,
    path: &str,
    method: &str,
    targets: &[Target],
) -> Result<Vec<Snippet>> {
    let request = request::build_sample_request(doc, path, method)?;

    let snippets = targets
        .iter()
        .map(|&target| {
            let renderer = create_renderer(target);
            Snippet {
                title: renderer.title().to_string(),
                content: renderer.render(&request),
            }
        })
        .collect();

    Ok(snippets)
}
