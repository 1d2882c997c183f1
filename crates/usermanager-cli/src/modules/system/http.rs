use anyhow::Context;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

use crate::modules::system::{CommandContext, ServiceResponse};

/// Sends one JSON request to `path` under the configured base URL and decodes
/// the service envelope. Error bodies are surfaced verbatim, never parsed.
pub(crate) async fn send_request<T: Serialize>(
    ctx: &CommandContext<'_>,
    method: Method,
    path: &str,
    payload: &T,
) -> anyhow::Result<ServiceResponse> {
    let url = endpoint(ctx.base_url, path);
    let body = serde_json::to_vec(payload).context("Error encoding request")?;
    let request = ctx
        .client
        .request(method.clone(), &url)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .build()
        .context("Error creating request")?;

    debug!(method = %method, url = %url, "http request");
    let start = std::time::Instant::now();
    let response = ctx
        .client
        .execute(request)
        .await
        .context("Error executing request")?;
    let status = response.status();
    debug!(
        method = %method,
        url = %url,
        status = %status,
        elapsed_ms = start.elapsed().as_millis(),
        "http response"
    );

    let body = response.text().await.context("Error reading response")?;
    if status.as_u16() >= 400 {
        anyhow::bail!("Request failed: {status} {body}");
    }
    decode_response(&body)
}

pub(crate) fn decode_response(body: &str) -> anyhow::Result<ServiceResponse> {
    match serde_json::from_str::<ServiceResponse>(body) {
        Ok(response) => Ok(response),
        Err(err) => anyhow::bail!("Error parsing response: {err}\nRaw response: {body}"),
    }
}

pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
