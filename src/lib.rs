//! Core library for the `grewcount` CLI.
//!
//! The binary resolves a deployment of a Grew count service, pushes a grammar
//! configuration to it, submits one batch count query, and prints the raw
//! answer. This crate holds the pieces it is built from: CLI argument types,
//! configuration loading, the endpoint table, the query payload, the HTTP
//! transport, and the request driver that sequences the calls.
pub mod args;
pub mod config;
pub mod driver;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod payload;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
