//! Retry helper for HTTP requests with exponential backoff.
//!
//! Wraps a `reqwest::RequestBuilder` with retry logic for HTTP 429
//! responses and maps non-success responses to structured errors, parsing
//! the cluster's error envelope when the body carries one.

use reqwest::{RequestBuilder, Response};
use templatectl_types::ErrorResponse;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Maximum number of retry attempts for rate-limited requests.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Sends an HTTP request, retrying HTTP 429 with exponential backoff
/// (1s, 2s, 4s = 2^attempt).
///
/// Non-success statuses other than 429 fail immediately: a 404 becomes
/// [`ClientError::NotFound`], everything else [`ClientError::ApiError`]
/// with the envelope's reason when the body parses as one.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                } else {
                    debug!("Cannot clone request builder for retry");
                    return Err(ClientError::MaxRetriesExceeded(attempt));
                }
            }
        };

        let response = attempt_builder.send().await?;
        if response.status().as_u16() == 429 {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs,
                    "Rate limited (HTTP 429), retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
            } else {
                debug!(
                    attempts = attempt + 1,
                    "Max retries exhausted for rate-limited request"
                );
                return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
            }
        } else {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Prefer the envelope's reason over the raw body.
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => envelope
            .error
            .reason
            .unwrap_or(envelope.error.kind),
        Err(_) => body,
    };

    if status == 404 {
        return Err(ClientError::NotFound(message));
    }

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
