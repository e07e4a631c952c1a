use reqwest::Client;
use std::time::Duration;
use once_cell::sync::Lazy;

use crate::api::models::{ApiErrorBody, SummarizeRequest, SummarizeResponse};
use crate::error::{AppError, Result};

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your text.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Could not connect to the server.";

// Create a static client to reuse connections. No request deadline is set:
// a submission runs to completion or failure.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Issues exactly one POST to `{base_url}/summarize` and maps the three
/// outcomes of the contract: parsed summary on 2xx, the server's `error`
/// field (or a generic fallback) on non-2xx, and a fixed network message
/// when the request never completes.
pub async fn summarize(base_url: &str, request: &SummarizeRequest) -> Result<SummarizeResponse> {
    let url = format!("{}/summarize", base_url);
    tracing::debug!(%url, num_sentences = request.num_sentences, "sending summarize request");

    let response = CLIENT.post(&url).json(request).send().await?;

    let status = response.status();
    if status.is_success() {
        let parsed: SummarizeResponse = response.json().await?;
        Ok(parsed)
    } else {
        tracing::debug!(status = %status, "summarize request rejected by server");
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        Err(AppError::Server(message))
    }
}
