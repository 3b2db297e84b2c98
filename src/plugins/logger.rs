//! # Logger plugin
//!
//! [`LoggerPlugin`] writes a human readable trace of every call to the
//! [`log`] facade.

use log::{log, Level};

use crate::core::{CallOutcome, Plugin, Target, TransportRequest, TransportResponse};

/// Logs outgoing requests and their outcomes.
///
/// Records are emitted under the plugin's name as the log target, so output
/// of several loggers can be told apart and filtered.
///
/// # Examples
/// ```
/// use log::Level;
/// use netpipe::plugins::LoggerPlugin;
///
/// let plugin = LoggerPlugin::new("api").with_level(Level::Debug);
/// assert_eq!(plugin.name(), "api");
/// ```
#[derive(Debug, Clone)]
pub struct LoggerPlugin {
    name: String,
    level: Level,
}

impl LoggerPlugin {
    /// Create a logger which emits records at [`Level::Info`].
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            level: Level::Info,
        }
    }

    /// Change the level records are emitted at.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Name used as the log target.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn output(&self, message: String) {
        log!(target: &self.name, self.level, "{message}");
    }
}

#[async_trait::async_trait]
impl Plugin for LoggerPlugin {
    fn will_send(&self, request: &TransportRequest, _target: &dyn Target) {
        self.output(describe_request(request));
    }

    fn did_receive(&self, outcome: &CallOutcome, target: &dyn Target) {
        self.output(describe_outcome(outcome, target));
    }
}

fn describe_request(request: &TransportRequest) -> String {
    let mut lines = vec![
        format!("Request: {}", request.url),
        format!("HTTP-Method: {}", request.method),
    ];

    if !request.headers.is_empty() {
        let mut headers = request.headers.iter().collect::<Vec<_>>();
        headers.sort();
        let headers = headers
            .into_iter()
            .map(|(name, value)| format!("  {name}: {value}"))
            .collect::<Vec<_>>()
            .join("\n");
        lines.push(format!("Headers:\n{headers}"));
    }

    if let Some(body) = request.body.as_deref().and_then(|body| std::str::from_utf8(body).ok()) {
        lines.push(format!("Body: {body}"));
    }

    lines.join("\n")
}

fn describe_outcome(outcome: &CallOutcome, target: &dyn Target) -> String {
    match outcome {
        Ok(response) => describe_response(response),
        Err(err) => format!("Response: error '{err}' when receiving response for {target:?}"),
    }
}

fn describe_response(response: &TransportResponse) -> String {
    let mut lines = vec![format!("Response: status {}", response.status)];

    if let Some(body) = response.body.as_deref().and_then(format_body) {
        lines.push(format!("Body: {body}"));
    }

    lines.join("\n")
}

/// Pretty-printed JSON when the body is JSON, plain text when it is UTF-8.
fn format_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| serde_json::to_string_pretty(&json).ok())
        .or_else(|| std::str::from_utf8(body).ok().map(str::to_string))
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::{PipelineError, TransportMethod},
        dx::EndpointBuilder,
    };

    #[test]
    fn describe_request_line_method_headers_and_body() {
        let request = TransportRequest {
            url: "https://host/items".into(),
            method: TransportMethod::Post,
            headers: [
                ("Content-Type".into(), "application/json".into()),
                ("Accept-Language".into(), "en".into()),
            ]
            .into(),
            body: Some(br#"{"name":"abc"}"#.to_vec()),
            ..Default::default()
        };

        assert_eq!(
            describe_request(&request),
            "Request: https://host/items\n\
             HTTP-Method: POST\n\
             Headers:\n  Accept-Language: en\n  Content-Type: application/json\n\
             Body: {\"name\":\"abc\"}"
        );
    }

    #[test]
    fn pretty_print_json_bodies() {
        let response = TransportResponse {
            status: 200,
            body: Some(br#"{"a":1}"#.to_vec()),
            ..Default::default()
        };

        assert_eq!(
            describe_response(&response),
            "Response: status 200\nBody: {\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn print_text_bodies_as_is() {
        assert_eq!(format_body(b"plain text"), Some("plain text".into()));
        assert_eq!(format_body(&[0xff, 0xfe]), None);
    }

    #[test]
    fn describe_failures() {
        let target = EndpointBuilder::default()
            .base_url("https://host")
            .build()
            .unwrap();

        let description = describe_outcome(&Err(PipelineError::ServiceCancelled), &target);

        assert!(description.starts_with("Response: error 'Service cancelled'"));
    }

    #[test]
    fn default_to_info_level() {
        let plugin = LoggerPlugin::new("api");

        assert_eq!(plugin.level, Level::Info);
        assert_eq!(plugin.with_level(Level::Trace).level, Level::Trace);
    }
}
