//! HTTP module: the narrow "fetch to a sink" capability the downloader consumes.
//!
//! - [`client`] - HTTP client creation: redirects, headers, proxy, timeout, tracing
//! - [`transfer`] - a single GET streamed into a sink, with its response metadata

pub mod client;
pub mod transfer;

pub use client::{create_http_client, HttpClientConfig};
pub use transfer::{fetch, TransferOutcome, TransferStatus};
