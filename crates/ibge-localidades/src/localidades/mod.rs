//! IBGE localidades API client module.
//!
//! Provides an HTTP client abstraction for fetching state (estado) and
//! district (distrito) data from the public IBGE localidades API.
//!
//! # Architecture
//!
//! The module uses a trait-based design for testability:
//!
//! - [`LocalidadesClient`] - Trait defining API operations
//! - [`HttpLocalidadesClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockLocalidadesClient`] - Mock for unit tests (behind `test-utils` feature)
//!
//! # Testing Patterns
//!
//! ## Unit Tests (Mock Implementation)
//!
//! Use `MockLocalidadesClient` for fast, isolated unit tests:
//!
//! ```ignore
//! use ibge_localidades::localidades::mock::MockLocalidadesClient;
//!
//! let mock = MockLocalidadesClient::new();
//! mock.set_estado_result(Ok(r#"{"id":33,"sigla":"RJ"}"#.to_string()));
//!
//! // Pass mock to code under test
//! let body = lookup.describe_uf(&mock, "RJ").await?;
//! ```
//!
//! ## Integration Tests (HTTP Stubbing)
//!
//! Use `MockHttpServer` to test `HttpLocalidadesClient` against stubbed HTTP:
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//! use ibge_localidades::localidades::HttpLocalidadesClient;
//!
//! let server = MockHttpServer::start().await;
//!
//! server
//!     .expect_get("/estados/RJ")
//!     .respond_with_body(r#"{"id":33,"sigla":"RJ","nome":"Rio de Janeiro"}"#)
//!     .mount()
//!     .await;
//!
//! let client = HttpLocalidadesClient::with_base_urls(
//!     format!("{}/estados", server.url()),
//!     format!("{}/distritos", server.url()),
//! );
//! let body = client.consultar_estado("RJ").await.unwrap();
//! assert!(body.contains("Rio de Janeiro"));
//! ```

mod client;

pub use client::{
    HttpLocalidadesClient, LocalidadesClient, LocalidadesError, DISTRITOS_API_URL, ESTADOS_API_URL,
};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
