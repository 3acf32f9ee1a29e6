//! The `reqwest` client behind every download.
//!
//! Redirects are followed up to a limit, default headers, proxy and timeout
//! are optional, and each request is traced by `reqwest-tracing`. Nothing is
//! retried: a failed transfer goes back to the caller.
//!
//! ```rust
//! use landing::http::{create_http_client, HttpClientConfig};
//! use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
//! use std::time::Duration;
//!
//! let client = create_http_client(HttpClientConfig {
//!     max_redirects: 0,
//!     headers: Some(HeaderMap::from_iter([(
//!         USER_AGENT,
//!         HeaderValue::from_static("landing/0.1"),
//!     )])),
//!     timeout: Some(Duration::from_secs(30)),
//!     ..HttpClientConfig::default()
//! });
//! assert!(client.is_ok());
//! ```

use reqwest::{header::HeaderMap, redirect, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Client options derived from the downloader configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Maximum number of redirects to follow; 0 disables following.
    pub max_redirects: usize,
    /// Proxy for every request.
    pub proxy: Option<Proxy>,
    /// Headers sent with every request.
    pub headers: Option<HeaderMap>,
    /// Optional timeout for the whole request, body included.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Default redirect limit.
    pub const DEFAULT_MAX_REDIRECTS: usize = 10;
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_redirects: Self::DEFAULT_MAX_REDIRECTS,
            proxy: None,
            headers: None,
            timeout: None,
        }
    }
}

/// Build the client used for a download.
///
/// Fails only when `reqwest` cannot set up its TLS backend or resolver.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let HttpClientConfig {
        max_redirects,
        proxy,
        headers,
        timeout,
    } = config;

    let mut builder = reqwest::Client::builder().redirect(match max_redirects {
        0 => redirect::Policy::none(),
        max => redirect::Policy::limited(max),
    });
    if let Some(proxy) = proxy {
        builder = builder.proxy(proxy);
    }
    if let Some(headers) = headers {
        builder = builder.default_headers(headers);
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    Ok(ClientBuilder::new(builder.build()?)
        .with(TracingMiddleware::default())
        .build())
}
