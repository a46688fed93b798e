//! HTTP client for the IBGE localidades API.
//!
//! The trait abstraction enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with `MockHttpServer` in integration tests
//! - Pointing the client at a stub server instead of the live API
//!
//! # Example
//!
//! ```ignore
//! use ibge_localidades::localidades::{LocalidadesClient, HttpLocalidadesClient};
//!
//! let client = HttpLocalidadesClient::new();
//! let body = client.consultar_estado("RJ").await?;
//! println!("raw payload: {body}");
//! ```

use std::fmt::Display;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::config::LocalidadesConfig;

/// Base URL for the states (estados) endpoint of the live API.
pub const ESTADOS_API_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades/estados";

/// Base URL for the districts (distritos) endpoint of the live API.
pub const DISTRITOS_API_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades/distritos";

/// Errors that can occur when calling the localidades API.
///
/// There is a single failure class: transport-level I/O (DNS failure,
/// connection refused, timeout, malformed URL). Non-2xx statuses are not
/// errors; the response body is returned to the caller either way.
#[derive(Debug, Error)]
pub enum LocalidadesError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Trait for localidades API operations.
///
/// Implementations fetch raw JSON text from the IBGE API. Use
/// `HttpLocalidadesClient` for real HTTP calls, or `mock::MockLocalidadesClient`
/// for testing.
#[async_trait]
pub trait LocalidadesClient: Send + Sync {
    /// Fetch a state (estado) by its two-letter UF code, e.g. `"RJ"`.
    ///
    /// The code is not validated locally; an unknown code is sent as-is and
    /// whatever the API answers comes back verbatim.
    async fn consultar_estado(&self, uf: &str) -> Result<String, LocalidadesError>;

    /// Fetch a district (distrito) by its numeric IBGE identifier.
    async fn consultar_distrito(&self, id: u64) -> Result<String, LocalidadesError>;
}

/// HTTP-based implementation of `LocalidadesClient`.
///
/// Makes real HTTP requests and returns response bodies verbatim as text,
/// without parsing or status-code branching.
pub struct HttpLocalidadesClient {
    client: reqwest::Client,
    estados_url: String,
    distritos_url: String,
}

impl HttpLocalidadesClient {
    /// Create a client against the official IBGE endpoints.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_urls(ESTADOS_API_URL, DISTRITOS_API_URL)
    }

    /// Create a client with custom base URLs (e.g. a stub server in tests).
    pub fn with_base_urls(
        estados_url: impl Into<String>,
        distritos_url: impl Into<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), estados_url, distritos_url)
    }

    /// Create a client with a custom `reqwest::Client` (for custom timeouts
    /// or TLS settings).
    pub fn with_client(
        client: reqwest::Client,
        estados_url: impl Into<String>,
        distritos_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            estados_url: estados_url.into(),
            distritos_url: distritos_url.into(),
        }
    }

    /// Create a client from loaded configuration, applying the configured
    /// request timeout if one is set.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &LocalidadesConfig) -> Result<Self, LocalidadesError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self::with_client(
            client,
            config.estados_url.clone(),
            config.distritos_url.clone(),
        ))
    }

    async fn get_text(&self, url: String) -> Result<String, LocalidadesError> {
        debug!(%url, "GET localidades");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%url, %status, bytes = body.len(), "localidades response");
        Ok(body)
    }
}

impl Default for HttpLocalidadesClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocalidadesClient for HttpLocalidadesClient {
    async fn consultar_estado(&self, uf: &str) -> Result<String, LocalidadesError> {
        self.get_text(endpoint_url(&self.estados_url, uf)).await
    }

    async fn consultar_distrito(&self, id: u64) -> Result<String, LocalidadesError> {
        self.get_text(endpoint_url(&self.distritos_url, id)).await
    }
}

/// Join a base URL and a path segment, tolerating a trailing slash on the base.
fn endpoint_url(base: &str, segment: impl Display) -> String {
    format!("{}/{}", base.trim_end_matches('/'), segment)
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{LocalidadesClient, LocalidadesError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of `LocalidadesClient` for unit tests.
    ///
    /// Configure responses with `set_*_result` methods and verify calls with
    /// `estado_calls()` and `distrito_calls()`.
    pub struct MockLocalidadesClient {
        estado_result: Mutex<Option<Result<String, LocalidadesError>>>,
        distrito_result: Mutex<Option<Result<String, LocalidadesError>>>,
        estado_calls: Mutex<Vec<String>>,
        distrito_calls: Mutex<Vec<u64>>,
    }

    impl MockLocalidadesClient {
        pub fn new() -> Self {
            Self {
                estado_result: Mutex::new(None),
                distrito_result: Mutex::new(None),
                estado_calls: Mutex::new(Vec::new()),
                distrito_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for `consultar_estado` calls.
        pub fn set_estado_result(&self, result: Result<String, LocalidadesError>) {
            *self.estado_result.lock().unwrap() = Some(result);
        }

        /// Set the result for `consultar_distrito` calls.
        pub fn set_distrito_result(&self, result: Result<String, LocalidadesError>) {
            *self.distrito_result.lock().unwrap() = Some(result);
        }

        /// Get all UF codes passed to `consultar_estado`.
        pub fn estado_calls(&self) -> Vec<String> {
            self.estado_calls.lock().unwrap().clone()
        }

        /// Get all identifiers passed to `consultar_distrito`.
        pub fn distrito_calls(&self) -> Vec<u64> {
            self.distrito_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockLocalidadesClient {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl LocalidadesClient for MockLocalidadesClient {
        async fn consultar_estado(&self, uf: &str) -> Result<String, LocalidadesError> {
            self.estado_calls.lock().unwrap().push(uf.to_string());

            self.estado_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(String::new()))
        }

        async fn consultar_distrito(&self, id: u64) -> Result<String, LocalidadesError> {
            self.distrito_calls.lock().unwrap().push(id);

            self.distrito_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }
}
