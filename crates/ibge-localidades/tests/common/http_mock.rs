//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to mock external API responses in integration tests.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server
//!         .expect_get("/estados/RJ")
//!         .respond_with_body(r#"{"id":33,"sigla":"RJ"}"#)
//!         .mount()
//!         .await;
//!
//!     // Your code calls server.url() + "/estados/RJ"
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)` plus `.with_json_response(value)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.expect_times(1)` then `server.verify().await`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrapper around a `wiremock::MockServer` with a builder-style stubbing API.
pub struct MockHttpServer {
    server: MockServer,
}

impl MockHttpServer {
    /// Start a mock server on a random local port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server, e.g. `http://127.0.0.1:54321`.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Assert that all mounted expectations (e.g. `expect_times`) were met.
    pub async fn verify(&self) {
        self.server.verify().await;
    }

    /// Begin stubbing a GET request for the given path.
    pub fn expect_get(&self, request_path: impl Into<String>) -> MockRequestBuilder<'_> {
        MockRequestBuilder {
            server: &self.server,
            path: request_path.into(),
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }
}

enum StubBody {
    Json(Value),
    Text(String),
}

/// Builder for a single stubbed request/response pair.
pub struct MockRequestBuilder<'a> {
    server: &'a MockServer,
    path: String,
    status: u16,
    body: Option<StubBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

impl MockRequestBuilder<'_> {
    /// Respond with 200 and the given JSON body.
    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(StubBody::Json(body));
        self
    }

    /// Respond with 200 and the given literal body text.
    pub fn respond_with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(StubBody::Text(body.into()));
        self
    }

    /// Set the response status code (combine with `with_json_response` for
    /// an error body).
    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Attach a JSON body without changing the already-set status code.
    pub fn with_json_response(mut self, body: Value) -> Self {
        self.body = Some(StubBody::Json(body));
        self
    }

    /// Delay the response (for timeout tests).
    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Expect this stub to be hit exactly `times` times; checked by
    /// `MockHttpServer::verify` and on server drop.
    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    /// Register the stub with the server.
    pub async fn mount(self) {
        let builder = Mock::given(method("GET")).and(path(self.path));

        let mut template = ResponseTemplate::new(self.status);
        match self.body {
            Some(StubBody::Json(value)) => template = template.set_body_json(value),
            Some(StubBody::Text(text)) => template = template.set_body_string(text),
            None => {}
        }
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut mock = builder.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }

        mock.mount(self.server).await;
    }
}
