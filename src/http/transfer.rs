//! Transfer executor: one GET request streamed into a sink.
//!
//! The executor never retries and never returns transport problems as
//! errors: DNS, TLS, connection failures and non-2xx statuses all end up in
//! [`TransferStatus::Failed`]. Only local write failures on the sink are
//! returned as [`crate::Error`].

use crate::filename::parse_content_disposition;
use crate::progress::TransferProgress;
use crate::Result;

use futures::StreamExt;
use reqwest::{
    header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE, IF_MODIFIED_SINCE, LAST_MODIFIED},
    StatusCode, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use std::time::SystemTime;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Result of a transfer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    /// The body was written to the sink.
    Success,
    /// The server (or the time condition) reported the resource as unchanged.
    /// Nothing was written.
    NotModified,
    /// The transfer failed for the given reason.
    Failed(String),
}

/// Response metadata captured during a transfer.
#[derive(Debug, Clone)]
pub struct TransferOutcome {
    /// URL actually served, after redirects.
    pub effective_url: Url,
    /// Filename announced by `Content-Disposition`.
    pub content_disposition_filename: Option<String>,
    /// Raw `Content-Type` value.
    pub content_type: Option<String>,
    /// Remote `Last-Modified` timestamp.
    pub last_modified: Option<SystemTime>,
    /// Bytes written to the sink.
    pub size: u64,
    /// How the transfer ended.
    pub status: TransferStatus,
}

impl TransferOutcome {
    fn failed(url: &Url, reason: impl std::fmt::Display) -> Self {
        Self {
            effective_url: url.clone(),
            content_disposition_filename: None,
            content_type: None,
            last_modified: None,
            size: 0,
            status: TransferStatus::Failed(reason.to_string()),
        }
    }
}

/// GET `url` with the extra `headers` and stream the body into `sink`.
///
/// A 304 response is reported as [`TransferStatus::NotModified`]. When the
/// request carries `If-Modified-Since` and the server ignores it, a response
/// whose `Last-Modified` is not newer than that date is reported the same
/// way, without reading the body.
pub async fn fetch<W>(
    client: &ClientWithMiddleware,
    url: &Url,
    mut sink: W,
    headers: HeaderMap,
    progress: &mut TransferProgress,
) -> Result<TransferOutcome>
where
    W: AsyncWrite + Unpin,
{
    let if_modified_since = headers
        .get(IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| httpdate::parse_http_date(v).ok());

    debug!("Fetching {}", url);
    let res = match client.get(url.clone()).headers(headers).send().await {
        Ok(res) => res,
        Err(e) => return Ok(TransferOutcome::failed(url, e)),
    };

    let status = res.status();
    let response_headers = res.headers();
    let mut outcome = TransferOutcome {
        effective_url: res.url().clone(),
        content_disposition_filename: response_headers
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_content_disposition),
        content_type: response_headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        last_modified: response_headers
            .get(LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| httpdate::parse_http_date(v).ok()),
        size: 0,
        status: TransferStatus::Success,
    };
    debug!(
        "Response {} from {} (type: {:?}, disposition: {:?})",
        status, outcome.effective_url, outcome.content_type, outcome.content_disposition_filename
    );

    if status == StatusCode::NOT_MODIFIED {
        outcome.status = TransferStatus::NotModified;
        return Ok(outcome);
    }

    if !status.is_success() {
        outcome.status = TransferStatus::Failed(format!("HTTP status {}", status));
        return Ok(outcome);
    }

    if let (Some(since), Some(modified)) = (if_modified_since, outcome.last_modified) {
        if modified <= since {
            debug!("Remote copy is not newer than {:?}, skipping body", since);
            outcome.status = TransferStatus::NotModified;
            return Ok(outcome);
        }
    }

    progress.start(res.content_length());

    debug!("Retrieving chunks...");
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = match item {
            Ok(chunk) => chunk,
            Err(e) => {
                outcome.status = TransferStatus::Failed(e.to_string());
                return Ok(outcome);
            }
        };
        sink.write_all(&chunk).await?;
        progress.advance(chunk.len() as u64);
    }
    sink.flush().await?;

    outcome.size = progress.transferred();
    Ok(outcome)
}
