// This file contains integration tests for the annotator library, exercising the full parse -> annotate -> serialize pipeline.

#[cfg(test)]
mod tests {
    use openapi_sample_annotator::{
        annotator::{annotate_document, HTTP_REQUEST_METHODS, SAMPLES_FIELD},
        parser::{parse_spec_file, parse_spec_string, to_yaml_string},
        snippet::{Target, DEFAULT_TARGETS},
    };
    use serde_json::Value;
    use std::path::PathBuf;

    fn get_test_data_path(file_name: &str) -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("tests");
        path.push("samples");
        path.push(file_name);
        path
    }

    fn load_sample(file_name: &str) -> Value {
        parse_spec_file(get_test_data_path(file_name)).unwrap()
    }

    fn sample_sources(document: &Value, path: &str, method: &str) -> Vec<String> {
        document["paths"][path][method][SAMPLES_FIELD]
            .as_array()
            .unwrap()
            .iter()
            .map(|sample| sample["source"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_parse_spec_file() {
        let doc = load_sample("sample_openapi.yaml");

        assert_eq!(doc["openapi"].as_str(), Some("3.0.0"));
        assert_eq!(doc["paths"].as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_parse_json_spec() {
        // The YAML parser accepts plain JSON documents as well
        let doc = load_sample("sample_swagger.json");

        assert_eq!(doc["swagger"].as_str(), Some("2.0"));
        assert!(doc["paths"]["/ping"]["get"].is_object());
    }

    #[test]
    fn test_annotate_adds_samples_for_every_target() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        assert!(annotated.failures.is_empty());

        let samples = annotated.document["paths"]["/users"]["get"][SAMPLES_FIELD]
            .as_array()
            .unwrap();
        assert_eq!(samples.len(), DEFAULT_TARGETS.len());

        let langs: Vec<&str> = samples
            .iter()
            .map(|sample| sample["lang"].as_str().unwrap())
            .collect();
        assert_eq!(langs, ["Node", "Python", "Shell"]);

        for sample in samples {
            assert!(!sample["source"].as_str().unwrap().is_empty());
        }
    }

    #[test]
    fn test_every_operation_is_annotated() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        for (path, methods) in [
            ("/users", vec!["get", "post"]),
            ("/users/{id}", vec!["get", "put", "delete"]),
        ] {
            for method in methods {
                let samples = &annotated.document["paths"][path][method][SAMPLES_FIELD];
                assert!(samples.is_array(), "missing samples for {} {}", method, path);
            }
        }
    }

    #[test]
    fn test_target_list_is_substitutable() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &[Target::ShellCurl], &HTTP_REQUEST_METHODS);

        let samples = annotated.document["paths"]["/users"]["get"][SAMPLES_FIELD]
            .as_array()
            .unwrap();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0]["lang"].as_str(), Some("Shell"));
        assert!(samples[0]["source"]
            .as_str()
            .unwrap()
            .contains("curl --request GET"));
    }

    #[test]
    fn test_method_list_is_substitutable() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &["post"]);

        assert!(annotated.document["paths"]["/users"]["post"][SAMPLES_FIELD].is_array());
        assert!(annotated.document["paths"]["/users"]["get"]
            .get(SAMPLES_FIELD)
            .is_none());
    }

    #[test]
    fn test_non_method_keys_left_untouched() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        // The shared path-level `parameters` key is not an operation
        let shared_params = &annotated.document["paths"]["/users/{id}"]["parameters"];
        assert_eq!(shared_params, &doc["paths"]["/users/{id}"]["parameters"]);
        assert!(shared_params.is_array());
    }

    #[test]
    fn test_input_document_is_not_mutated() {
        let doc = load_sample("sample_openapi.yaml");
        let before = doc.clone();

        let _ = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        assert_eq!(doc, before);
    }

    #[test]
    fn test_no_paths_round_trip() {
        let doc = load_sample("no_paths.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        assert!(annotated.failures.is_empty());
        assert_eq!(annotated.document, doc);

        let yaml = to_yaml_string(&annotated.document).unwrap();
        let reparsed = parse_spec_string(&yaml).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_empty_paths_mapping_unchanged() {
        let doc = parse_spec_string("openapi: 3.0.0\npaths: {}\n").unwrap();
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        assert!(annotated.failures.is_empty());
        assert_eq!(annotated.document, doc);
    }

    #[test]
    fn test_minimal_ping_document() {
        let doc = parse_spec_string("paths:\n  /ping:\n    get: {}\n").unwrap();
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        assert!(annotated.failures.is_empty());

        let samples = annotated.document["paths"]["/ping"]["get"][SAMPLES_FIELD]
            .as_array()
            .unwrap();
        assert_eq!(samples.len(), 3);
        for sample in samples {
            assert!(!sample["lang"].as_str().unwrap().is_empty());
            assert!(!sample["source"].as_str().unwrap().is_empty());
        }
    }

    #[test]
    fn test_malformed_operation_is_isolated() {
        let doc = load_sample("malformed_operation.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        // The broken operation is reported...
        assert_eq!(annotated.failures.len(), 1);
        assert_eq!(annotated.failures[0].path, "/bad");
        assert_eq!(annotated.failures[0].method, "post");

        // ...and left without samples, while the healthy one is annotated
        assert!(annotated.document["paths"]["/bad"]["post"]
            .get(SAMPLES_FIELD)
            .is_none());
        let samples = annotated.document["paths"]["/good"]["get"][SAMPLES_FIELD]
            .as_array()
            .unwrap();
        assert_eq!(samples.len(), 3);
    }

    #[test]
    fn test_existing_samples_are_overwritten() {
        let doc = parse_spec_string(
            "paths:\n  /ping:\n    get:\n      x-codeSamples: stale\n",
        )
        .unwrap();
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        let samples = &annotated.document["paths"]["/ping"]["get"][SAMPLES_FIELD];
        assert!(samples.is_array());
        assert_eq!(samples.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_path_parameters_are_substituted() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &[Target::ShellCurl], &HTTP_REQUEST_METHODS);

        let sources = sample_sources(&annotated.document, "/users/{id}", "get");
        assert!(sources[0].contains("http://api.sample.com/v1/users/42"));
        assert!(!sources[0].contains("{id}"));
    }

    #[test]
    fn test_query_parameter_example_is_used() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &[Target::PythonRequests], &HTTP_REQUEST_METHODS);

        let sources = sample_sources(&annotated.document, "/users", "get");
        assert!(sources[0].contains("import requests"));
        assert!(sources[0].contains("\"limit\": \"20\""));
    }

    #[test]
    fn test_request_body_sample_follows_schema_ref() {
        let doc = load_sample("sample_openapi.yaml");
        let annotated = annotate_document(&doc, &DEFAULT_TARGETS, &HTTP_REQUEST_METHODS);

        let sources = sample_sources(&annotated.document, "/users", "post");

        // All three targets embed the example body and declare the content type
        for source in &sources {
            assert!(source.contains("Jane Doe"), "body missing in: {}", source);
            assert!(source.contains("content-type"), "header missing in: {}", source);
        }
        assert!(sources[0].contains("fetch(url, options)"));
    }

    #[test]
    fn test_swagger2_base_url() {
        let doc = load_sample("sample_swagger.json");
        let annotated = annotate_document(&doc, &[Target::ShellCurl], &HTTP_REQUEST_METHODS);

        assert!(annotated.failures.is_empty());
        let sources = sample_sources(&annotated.document, "/ping", "get");
        assert!(sources[0].contains("https://api.sample.com/v2/ping"));
    }
}
