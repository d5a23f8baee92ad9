use serde_json::{json, Map, Value};

use super::{Result, SnippetError};
use crate::utils::helpers::join_url;

/// Cut-off for sample-body recursion so self-referential schemas terminate.
const MAX_SCHEMA_DEPTH: usize = 6;

/// An example HTTP request distilled from one operation, ready to be
/// rendered into target-specific source code.
#[derive(Debug, Clone)]
pub struct SampleRequest {
    /// Upper-cased HTTP method
    pub method: String,

    /// Server base URL joined with the path, path parameters substituted
    pub url: String,

    /// Query parameters as name/value pairs, in declaration order
    pub query: Vec<(String, String)>,

    /// Header parameters as name/value pairs
    pub headers: Vec<(String, String)>,

    /// Sample JSON request body, if the operation takes one
    pub body: Option<Value>,
}

impl SampleRequest {
    /// The URL with the query string appended, for targets that inline it.
    pub fn url_with_query(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }

        let query_string = self
            .query
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.url, query_string)
    }
}

/// A request parameter pulled out of the operation (or its path item).
#[derive(Debug, Clone)]
struct Parameter {
    name: String,
    location: String,
    required: bool,
    value: Option<Value>,
    schema_type: String,
    schema: Option<Value>,
}

impl Parameter {
    fn has_explicit_value(&self) -> bool {
        self.value.is_some()
    }

    /// The value substituted into the sample: the declared example/default,
    /// or a `SOME_<TYPE>_VALUE` placeholder.
    fn sample_value(&self) -> String {
        match &self.value {
            Some(value) => scalar_to_string(value),
            None => format!("SOME_{}_VALUE", self.schema_type.to_uppercase()),
        }
    }
}

/// Build the example request for one path+method pair of the document.
pub fn build_sample_request(doc: &Value, path: &str, method: &str) -> Result<SampleRequest> {
    let path_item = doc
        .get("paths")
        .and_then(|paths| paths.get(path))
        .ok_or_else(|| SnippetError::OperationNotFound {
            path: path.to_string(),
            method: method.to_string(),
        })?;

    let operation = path_item
        .get(method)
        .ok_or_else(|| SnippetError::OperationNotFound {
            path: path.to_string(),
            method: method.to_string(),
        })?;

    if !operation.is_object() {
        return Err(SnippetError::InvalidOperation {
            path: path.to_string(),
            method: method.to_string(),
        });
    }

    // Shared path-item parameters come first so operation-level ones win.
    let mut params = collect_parameters(doc, path_item.get("parameters"))?;
    for param in collect_parameters(doc, operation.get("parameters"))? {
        params.retain(|p| !(p.name == param.name && p.location == param.location));
        params.push(param);
    }

    let mut url = join_url(&base_url(doc), path);
    let mut query = Vec::new();
    let mut headers = Vec::new();

    for param in &params {
        match param.location.as_str() {
            "path" => {
                url = url.replace(&format!("{{{}}}", param.name), &param.sample_value());
            }
            "query" => {
                if param.required || param.has_explicit_value() {
                    query.push((param.name.clone(), param.sample_value()));
                }
            }
            "header" => {
                if param.required || param.has_explicit_value() {
                    headers.push((param.name.to_lowercase(), param.sample_value()));
                }
            }
            _ => {}
        }
    }

    let body = request_body_sample(doc, operation, &params)?;
    if body.is_some() {
        headers.push(("content-type".to_string(), "application/json".to_string()));
    }

    Ok(SampleRequest {
        method: method.to_uppercase(),
        url,
        query,
        headers,
        body,
    })
}

/// Derive the server base URL, preferring OpenAPI 3 `servers` and falling
/// back to the Swagger 2 scheme/host/basePath triple.
fn base_url(doc: &Value) -> String {
    if let Some(url) = doc
        .get("servers")
        .and_then(Value::as_array)
        .and_then(|servers| servers.first())
        .and_then(|server| server.get("url"))
        .and_then(Value::as_str)
    {
        return url.trim_end_matches('/').to_string();
    }

    let scheme = doc
        .get("schemes")
        .and_then(Value::as_array)
        .and_then(|schemes| schemes.first())
        .and_then(Value::as_str)
        .unwrap_or("http");

    let host = doc
        .get("host")
        .and_then(Value::as_str)
        .unwrap_or("localhost");

    let base_path = doc
        .get("basePath")
        .and_then(Value::as_str)
        .unwrap_or("");

    format!("{}://{}{}", scheme, host, base_path.trim_end_matches('/'))
}

fn collect_parameters(doc: &Value, params: Option<&Value>) -> Result<Vec<Parameter>> {
    let entries = match params {
        Some(params) => params.as_array().ok_or_else(|| {
            SnippetError::MalformedParameter("'parameters' is not a sequence".to_string())
        })?,
        None => return Ok(Vec::new()),
    };

    let mut out = Vec::new();

    for entry in entries {
        let entry = resolve_ref(doc, entry)?;
        let obj = entry.as_object().ok_or_else(|| {
            SnippetError::MalformedParameter("parameter entry is not a mapping".to_string())
        })?;

        let name = obj
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| SnippetError::MalformedParameter("parameter is missing 'name'".to_string()))?;

        let location = obj
            .get("in")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SnippetError::MalformedParameter(format!("parameter '{name}' is missing 'in'"))
            })?;

        let required = obj.get("required").and_then(Value::as_bool).unwrap_or(false);

        let schema = match obj.get("schema") {
            Some(schema) => Some(resolve_ref(doc, schema)?.clone()),
            None => None,
        };

        // Swagger 2 puts the type inline, OpenAPI 3 nests it under `schema`.
        let schema_type = schema
            .as_ref()
            .and_then(|s| s.get("type"))
            .and_then(Value::as_str)
            .or_else(|| obj.get("type").and_then(Value::as_str))
            .unwrap_or("string")
            .to_string();

        let value = obj
            .get("example")
            .or_else(|| obj.get("default"))
            .cloned()
            .or_else(|| explicit_schema_value(schema.as_ref()));

        out.push(Parameter {
            name: name.to_string(),
            location: location.to_string(),
            required,
            value,
            schema_type,
            schema,
        });
    }

    Ok(out)
}

/// An example, default, or first enum variant declared on the schema.
fn explicit_schema_value(schema: Option<&Value>) -> Option<Value> {
    let schema = schema?;

    if let Some(value) = schema.get("example").or_else(|| schema.get("default")) {
        return Some(value.clone());
    }

    schema
        .get("enum")
        .and_then(Value::as_array)
        .and_then(|variants| variants.first())
        .cloned()
}

fn request_body_sample(doc: &Value, operation: &Value, params: &[Parameter]) -> Result<Option<Value>> {
    // OpenAPI 3 request bodies
    if let Some(body) = operation.get("requestBody") {
        let body = resolve_ref(doc, body)?;
        let schema = body
            .get("content")
            .and_then(|content| content.get("application/json"))
            .and_then(|media| media.get("schema"));

        return match schema {
            Some(schema) => Ok(Some(sample_from_schema(doc, schema, 0)?)),
            None => Ok(None),
        };
    }

    // Swagger 2 `in: body` parameters carry the schema directly
    if let Some(param) = params.iter().find(|p| p.location == "body") {
        if let Some(schema) = &param.schema {
            return Ok(Some(sample_from_schema(doc, schema, 0)?));
        }
    }

    Ok(None)
}

/// Build a sample JSON value for a schema. Declared examples win; otherwise
/// objects recurse over their properties and scalars get a type-shaped stub.
fn sample_from_schema(doc: &Value, schema: &Value, depth: usize) -> Result<Value> {
    if depth > MAX_SCHEMA_DEPTH {
        return Ok(Value::Null);
    }

    let schema = resolve_ref(doc, schema)?;

    if let Some(value) = schema.get("example").or_else(|| schema.get("default")) {
        return Ok(value.clone());
    }
    if let Some(first) = schema
        .get("enum")
        .and_then(Value::as_array)
        .and_then(|variants| variants.first())
    {
        return Ok(first.clone());
    }

    let schema_type = schema
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_else(|| {
            if schema.get("properties").is_some() {
                "object"
            } else {
                "string"
            }
        });

    match schema_type {
        "object" => {
            let mut sample = Map::new();
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (name, property) in properties {
                    sample.insert(name.clone(), sample_from_schema(doc, property, depth + 1)?);
                }
            }
            Ok(Value::Object(sample))
        }
        "array" => {
            let item = match schema.get("items") {
                Some(items) => sample_from_schema(doc, items, depth + 1)?,
                None => Value::Null,
            };
            Ok(json!([item]))
        }
        "integer" => Ok(json!(0)),
        "number" => Ok(json!(0.0)),
        "boolean" => Ok(json!(true)),
        _ => Ok(json!("string")),
    }
}

/// Follow a local `$ref` if present, returning the referenced node.
fn resolve_ref<'a>(doc: &'a Value, node: &'a Value) -> Result<&'a Value> {
    let reference = match node.get("$ref").and_then(Value::as_str) {
        Some(reference) => reference,
        None => return Ok(node),
    };

    let pointer = reference
        .strip_prefix('#')
        .ok_or_else(|| SnippetError::UnresolvedRef(reference.to_string()))?;

    doc.pointer(pointer)
        .ok_or_else(|| SnippetError::UnresolvedRef(reference.to_string()))
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
