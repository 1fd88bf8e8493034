//! HTTP transport
//!
//! Thin wrapper over `reqwest` that applies client-wide settings (timeout,
//! user agent, auth token, default headers) to every search request.
//! Status handling and retries are left to the caller.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_ACCEPT};
