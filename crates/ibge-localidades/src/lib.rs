#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Client library for IBGE's "localidades" REST API.
//!
//! Fetches raw JSON payloads for Brazilian states (estados) and districts
//! (distritos) from `servicodados.ibge.gov.br`. Response bodies are returned
//! verbatim as text; deserialization is left to the caller.

pub mod config;
pub mod localidades;
