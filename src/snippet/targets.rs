use serde_json::Value;

use super::request::SampleRequest;
use crate::utils::helpers::shell_quote;

/// A language/library pair to generate a request sample for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    /// JavaScript with node-fetch
    NodeFetch,
    /// Python with the requests library
    PythonRequests,
    /// A curl command line
    ShellCurl,
}

/// The targets every operation is annotated with, in output order.
pub const DEFAULT_TARGETS: [Target; 3] = [
    Target::NodeFetch,
    Target::PythonRequests,
    Target::ShellCurl,
];

/// Base trait for all snippet renderers
pub trait SnippetRenderer {
    /// Title shown above the sample; the leading word is the language label.
    fn title(&self) -> &'static str;

    /// Render the request as source code for this target.
    fn render(&self, request: &SampleRequest) -> String;
}

/// Factory function to create a renderer for the given target
pub fn create_renderer(target: Target) -> Box<dyn SnippetRenderer> {
    match target {
        Target::NodeFetch => Box::new(NodeFetchRenderer),
        Target::PythonRequests => Box::new(PythonRequestsRenderer),
        Target::ShellCurl => Box::new(ShellCurlRenderer),
    }
}

// JavaScript node-fetch renderer
struct NodeFetchRenderer;

impl SnippetRenderer for NodeFetchRenderer {
    fn title(&self) -> &'static str {
        "Node + Fetch"
    }

    fn render(&self, request: &SampleRequest) -> String {
        let mut options = vec![format!("method: '{}'", request.method)];

        if !request.headers.is_empty() {
            let headers = request
                .headers
                .iter()
                .map(|(name, value)| format!("'{name}': '{value}'"))
                .collect::<Vec<_>>()
                .join(", ");
            options.push(format!("headers: {{{headers}}}"));
        }

        if let Some(body) = &request.body {
            options.push(format!("body: JSON.stringify({body})"));
        }

        format!(
            r#"const fetch = require('node-fetch');

const url = '{url}';
const options = {{
  {options}
}};

fetch(url, options)
  .then(res => res.json())
  .then(json => console.log(json))
  .catch(err => console.error('error:' + err));
"#,
            url = request.url_with_query(),
            options = options.join(",\n  "),
        )
    }
}

// Python requests renderer
struct PythonRequestsRenderer;

impl SnippetRenderer for PythonRequestsRenderer {
    fn title(&self) -> &'static str {
        "Python + Requests"
    }

    fn render(&self, request: &SampleRequest) -> String {
        let mut lines = vec![
            "import requests".to_string(),
            String::new(),
            format!("url = \"{}\"", request.url),
        ];
        let mut call_args = vec!["url".to_string()];

        if !request.query.is_empty() {
            let pairs = request
                .query
                .iter()
                .map(|(name, value)| format!("\"{name}\": \"{value}\""))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("querystring = {{{pairs}}}"));
            call_args.push("params=querystring".to_string());
        }

        if let Some(body) = &request.body {
            lines.push(format!("payload = {}", python_literal(body)));
            call_args.push("json=payload".to_string());
        }

        if !request.headers.is_empty() {
            let pairs = request
                .headers
                .iter()
                .map(|(name, value)| format!("\"{name}\": \"{value}\""))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("headers = {{{pairs}}}"));
            call_args.push("headers=headers".to_string());
        }

        lines.push(String::new());
        lines.push(format!(
            "response = requests.request(\"{}\", {})",
            request.method,
            call_args.join(", ")
        ));
        lines.push(String::new());
        lines.push("print(response.text)".to_string());

        let mut source = lines.join("\n");
        source.push('\n');
        source
    }
}

/// Render a JSON value as a Python literal (true/false/null differ).
fn python_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => format!("\"{text}\""),
        Value::Array(items) => {
            let items = items.iter().map(python_literal).collect::<Vec<_>>().join(", ");
            format!("[{items}]")
        }
        Value::Object(fields) => {
            let fields = fields
                .iter()
                .map(|(name, field)| format!("\"{}\": {}", name, python_literal(field)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{fields}}}")
        }
    }
}

// Shell curl renderer
struct ShellCurlRenderer;

impl SnippetRenderer for ShellCurlRenderer {
    fn title(&self) -> &'static str {
        "Shell + Curl"
    }

    fn render(&self, request: &SampleRequest) -> String {
        let mut lines = vec![
            format!("curl --request {}", request.method),
            format!("  --url {}", shell_quote(&request.url_with_query())),
        ];

        for (name, value) in &request.headers {
            lines.push(format!("  --header {}", shell_quote(&format!("{name}: {value}"))));
        }

        if let Some(body) = &request.body {
            lines.push(format!("  --data {}", shell_quote(&body.to_string())));
        }

        let mut source = lines.join(" \\\n");
        source.push('\n');
        source
    }
}
