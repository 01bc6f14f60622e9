//! Library crate for clouddesk, exposing modules for binaries and tests.

/// Environment variables, defaults, and listener settings.
pub mod config;
/// JSON payloads exchanged over HTTP.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP route trees.
pub mod routes;
/// Request-independent business helpers.
pub mod services;
/// State shared across handlers.
pub mod state;
