//! Coin type lookup HTTP service.
//!
//! Serves `GET /<coin-name-or-type>` over HTTP, answering with the JSON
//! definition of the EVM chain the coin resolves to.
//!
//! # Modules
//!
//! - [`handlers`] — Axum route handlers and router builder
//! - [`response`] — CORS-enabled JSON responses
//! - [`error`] — HTTP error mapping and the panic boundary
//! - [`config`] — Server configuration with environment variable expansion
//! - [`util`] — Graceful shutdown

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod util;

pub use handlers::{LookupState, lookup_router};
