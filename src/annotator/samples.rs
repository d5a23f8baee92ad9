use serde_json::{json, Value};

use crate::snippet::{self, SnippetError, Target};

/// The HTTP request methods recognized under a path entry. Anything else
/// (shared `parameters`, `summary`, vendor extensions) is left untouched.
pub const HTTP_REQUEST_METHODS: [&str; 8] = [
    "get", "head", "post", "put", "delete", "options", "trace", "patch",
];

/// Vendor extension key the generated samples are attached under.
pub const SAMPLES_FIELD: &str = "x-codeSamples";

/// One operation whose snippet generation failed. The operation is left
/// without samples; the rest of the document is unaffected.
#[derive(Debug)]
pub struct OperationFailure {
    pub path: String,
    pub method: String,
    pub error: SnippetError,
}

/// The result of annotating a document: the mutated copy plus every
/// per-operation failure encountered along the way.
#[derive(Debug)]
pub struct AnnotatedDocument {
    pub document: Value,
    pub failures: Vec<OperationFailure>,
}

/// Annotate every recognized operation in `doc` with generated request
/// samples.
///
/// The input is deep-copied up front, so the caller's tree is never mutated
/// and snippets are generated from the pristine document rather than the
/// partially annotated one. A document without a `paths` mapping comes back
/// as an unchanged copy.
pub fn annotate_document(doc: &Value, targets: &[Target], methods: &[&str]) -> AnnotatedDocument {
    let mut annotated = doc.clone();
    let mut failures = Vec::new();

    let paths = match doc.get("paths").and_then(Value::as_object) {
        Some(paths) => paths,
        None => return AnnotatedDocument { document: annotated, failures },
    };

    for (path, path_item) in paths {
        let path_item = match path_item.as_object() {
            Some(path_item) => path_item,
            None => continue,
        };

        for method in path_item.keys().filter(|key| methods.contains(&key.as_str())) {
            match snippet::generate_endpoint_snippets(doc, path, method, targets) {
                Ok(snippets) => {
                    let samples: Vec<Value> = snippets
                        .iter()
                        .map(|snippet| {
                            json!({
                                "lang": snippet.title.split_whitespace().next().unwrap_or_default(),
                                "source": snippet.content,
                            })
                        })
                        .collect();

                    // Overwrites any samples already present on the operation
                    if let Some(operation) = annotated
                        .get_mut("paths")
                        .and_then(|paths| paths.get_mut(path.as_str()))
                        .and_then(|item| item.get_mut(method.as_str()))
                        .and_then(Value::as_object_mut)
                    {
                        operation.insert(SAMPLES_FIELD.to_string(), Value::Array(samples));
                    }
                }
                Err(error) => failures.push(OperationFailure {
                    path: path.clone(),
                    method: method.clone(),
                    error,
                }),
            }
        }
    }

    AnnotatedDocument { document: annotated, failures }
}
