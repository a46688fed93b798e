//! Common test utilities for integration tests.
//!
//! Provides [`http_mock::MockHttpServer`], a declarative wrapper around
//! `wiremock` for stubbing outbound HTTP calls.

pub mod http_mock;
