//! HTTP client and API communication layer for Nursys.
//!
//! This module handles all HTTP communication with the Nursys e-Notify API,
//! including credential headers, cancellation, and status classification.

mod client;
mod context;
mod endpoint;

// Re-export client's public API
pub use client::{Client, ClientBuilder, Credentials, HEADER_PASSWORD, HEADER_USERNAME};
pub use context::{CancelHandle, Context};
pub use endpoint::Endpoint;

// Re-export common types used in our public API
pub use reqwest::{Method, StatusCode};
