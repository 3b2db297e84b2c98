//! # Request builder
//!
//! Turns a [`Target`] into a [`TransportRequest`].

use log::debug;

use crate::core::{BodyStrategy, PipelineError, Target, TransportRequest};

/// Build the transport-ready request described by `target`.
///
/// The URL is the base URL joined with the path (the base URL as is for an
/// empty path), followed by method, timeout and headers. The body strategy
/// is applied last.
///
/// # Errors
/// Encoder failures abort the build: [`PipelineError::Encoding`] is passed
/// through and anything else becomes [`PipelineError::Unexpected`].
pub fn build_request(target: &dyn Target) -> Result<TransportRequest, PipelineError> {
    let mut request = TransportRequest {
        url: join_url(target.base_url(), target.path())?,
        method: target.method(),
        timeout: target.timeout(),
        headers: target
            .headers()
            .into_iter()
            .map(|(field, value)| (field.as_str().to_string(), value))
            .collect(),
        body: None,
    };

    match target.body() {
        BodyStrategy::Empty => {}
        BodyStrategy::Raw(bytes) => request.body = Some(bytes),
        BodyStrategy::Parameters {
            parameters,
            encoding,
        } => {
            request = encoding
                .encode(request, Some(&parameters))
                .map_err(|err| match err {
                    PipelineError::Encoding { .. } | PipelineError::Unexpected { .. } => err,
                    other => PipelineError::unexpected(other.to_string()),
                })?;
        }
    }

    debug!("Built {} {}", request.method, request.url);
    Ok(request)
}

fn join_url(base_url: &str, path: &str) -> Result<String, PipelineError> {
    if base_url.trim().is_empty() {
        return Err(PipelineError::unexpected("target has no base URL"));
    }

    if path.is_empty() {
        return Ok(base_url.to_string());
    }

    Ok(format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::{
            encoding::{JsonEncoding, ParameterEncoding, Parameters, UrlEncoding},
            HeaderField, TransportMethod,
        },
        dx::EndpointBuilder,
    };
    use serde_json::json;
    use std::{collections::HashMap, time::Duration};
    use test_case::test_case;

    fn parameters(value: serde_json::Value) -> Parameters {
        value.as_object().cloned().unwrap()
    }

    #[test_case("https://host", "" => "https://host"; "empty path")]
    #[test_case("https://host/api/", "" => "https://host/api/"; "empty path keeps base as is")]
    #[test_case("https://host", "/users" => "https://host/users"; "absolute path")]
    #[test_case("https://host/api", "users" => "https://host/api/users"; "relative path")]
    #[test_case("https://host/api/", "/users/1" => "https://host/api/users/1"; "no double slash")]
    fn join_base_url_and_path(base_url: &str, path: &str) -> String {
        join_url(base_url, path).unwrap()
    }

    #[test]
    fn copy_target_fields() {
        let endpoint = EndpointBuilder::default()
            .base_url("https://host")
            .path("/items")
            .method(TransportMethod::Delete)
            .timeout(Duration::from_secs(5))
            .headers(HashMap::from([(HeaderField::AUTHORIZATION, "token".into())]))
            .build()
            .unwrap();

        let request = build_request(&endpoint).unwrap();

        assert_eq!(request.url, "https://host/items");
        assert_eq!(request.method, TransportMethod::Delete);
        assert_eq!(request.timeout, Duration::from_secs(5));
        assert_eq!(request.header("authorization"), Some("token"));
        assert_eq!(request.body, None);
    }

    #[test]
    fn attach_raw_body() {
        let endpoint = EndpointBuilder::default()
            .base_url("https://host")
            .method(TransportMethod::Put)
            .body(BodyStrategy::Raw(b"raw".to_vec()))
            .build()
            .unwrap();

        assert_eq!(build_request(&endpoint).unwrap().body, Some(b"raw".to_vec()));
    }

    #[test]
    fn encode_parameters() {
        let endpoint = EndpointBuilder::default()
            .base_url("https://host")
            .path("search")
            .body(BodyStrategy::parameters(
                parameters(json!({"q": "rust", "page": 2})),
                UrlEncoding::default(),
            ))
            .build()
            .unwrap();

        assert_eq!(
            build_request(&endpoint).unwrap().url,
            "https://host/search?page=2&q=rust"
        );
    }

    #[test]
    fn encode_json_parameters_for_post() {
        let endpoint = EndpointBuilder::default()
            .base_url("https://host")
            .method(TransportMethod::Post)
            .body(BodyStrategy::parameters(
                parameters(json!({"name": "abc"})),
                JsonEncoding::default(),
            ))
            .build()
            .unwrap();

        let request = build_request(&endpoint).unwrap();

        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(request.body, Some(br#"{"name":"abc"}"#.to_vec()));
    }

    #[derive(Debug)]
    struct FailingEncoding(PipelineError);

    impl ParameterEncoding for FailingEncoding {
        fn encode(
            &self,
            _request: TransportRequest,
            _parameters: Option<&Parameters>,
        ) -> Result<TransportRequest, PipelineError> {
            Err(self.0.clone())
        }
    }

    #[test]
    fn propagate_encoding_failures() {
        let endpoint = EndpointBuilder::default()
            .base_url("https://host")
            .body(BodyStrategy::parameters(
                Parameters::new(),
                FailingEncoding(PipelineError::encoding("bad value")),
            ))
            .build()
            .unwrap();

        assert_eq!(
            build_request(&endpoint),
            Err(PipelineError::encoding("bad value"))
        );
    }

    #[test]
    fn normalize_foreign_encoder_errors_to_unexpected() {
        let endpoint = EndpointBuilder::default()
            .base_url("https://host")
            .body(BodyStrategy::parameters(
                Parameters::new(),
                FailingEncoding(PipelineError::ServiceCancelled),
            ))
            .build()
            .unwrap();

        assert!(matches!(
            build_request(&endpoint),
            Err(PipelineError::Unexpected { .. })
        ));
    }
}
