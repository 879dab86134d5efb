//! Executes core `HttpRequest`s over the network.

use std::time::Duration;

use todo_core::{HttpMethod, HttpRequest, HttpResponse, TransportError};
use tracing::debug;

/// Anything that can perform a round-trip for the controller.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared ureq agent.
///
/// Status-code-as-error is disabled so 4xx/5xx responses reach the core as
/// data and are classified there.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let body = request.body.as_deref().unwrap_or_default();
        let result = match request.method {
            HttpMethod::Get => self.agent.get(&request.path).call(),
            HttpMethod::Delete => self.agent.delete(&request.path).call(),
            HttpMethod::Post => with_headers(self.agent.post(&request.path), &request.headers).send(body.as_bytes()),
            HttpMethod::Patch => with_headers(self.agent.patch(&request.path), &request.headers).send(body.as_bytes()),
        };
        let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::new(e.to_string()))?;
        debug!(method = %request.method, path = %request.path, status, "response");

        Ok(HttpResponse::new(status, body))
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
