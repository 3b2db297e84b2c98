//! JSON parameter encoding.

use log::debug;

use crate::core::{
    encoding::{ParameterEncoding, Parameters},
    utils::headers::{APPLICATION_JSON, CONTENT_TYPE},
    PipelineError, TransportRequest,
};

/// Encodes parameters as a JSON object in the request body.
///
/// `Content-Type: application/json` is added unless the request already has
/// a content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonEncoding {
    pretty: bool,
}

impl JsonEncoding {
    /// Encoding which writes indented JSON.
    pub fn pretty_printed() -> Self {
        Self { pretty: true }
    }
}

impl ParameterEncoding for JsonEncoding {
    fn encode(
        &self,
        mut request: TransportRequest,
        parameters: Option<&Parameters>,
    ) -> Result<TransportRequest, PipelineError> {
        let Some(parameters) = parameters else {
            return Ok(request);
        };

        let body = if self.pretty {
            serde_json::to_vec_pretty(parameters)
        } else {
            serde_json::to_vec(parameters)
        }
        .map_err(|err| PipelineError::encoding(err.to_string()))?;

        debug!("Encoded {} JSON parameter(s)", parameters.len());

        request.set_header_if_absent(CONTENT_TYPE, APPLICATION_JSON);
        request.body = Some(body);

        Ok(request)
    }
}
