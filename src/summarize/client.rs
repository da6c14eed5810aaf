//! HTTP boundary to the remote summarization service.

use std::sync::mpsc::Sender;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::document::SelectedDocument;
use crate::ui::events::AppEvent;

/// Substituted when a 2xx body carries no `response` field.
pub const NO_SUMMARY_MESSAGE: &str = "The service returned no summary.";

/// Substituted when an error body carries no parseable `detail`.
const INVALID_RESPONSE_DETAIL: &str = "Invalid response from server.";

/// Errors from one summarization request.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// No usable response (connect, timeout, body read).
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("Error {status}: {detail}")]
    Service { status: u16, detail: String },

    /// A 2xx response whose body was not valid JSON.
    #[error("Error: {0}")]
    InvalidBody(String),

    /// The configured credential environment variable is not set.
    #[error("API key not set (expected in ${0})")]
    MissingCredential(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        SummarizeError::Transport(err)
    }
}

/// Client for the summarization service. Cheap to clone; the inner
/// reqwest client is shared.
#[derive(Clone)]
pub struct SummarizeClient {
    http: reqwest::Client,
    service: ServiceConfig,
    api_key: Option<String>,
    runtime: tokio::runtime::Handle,
}

impl SummarizeClient {
    pub fn new(service: ServiceConfig, runtime: tokio::runtime::Handle) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(service.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(
                service.connect_timeout_seconds,
            )))
            .build()
            .expect("Failed to build summarization client");
        let api_key = std::env::var(&service.api_key_env).ok();
        Self {
            http,
            service,
            api_key,
            runtime,
        }
    }

    /// Issue the request on the runtime; exactly one completion event
    /// is sent regardless of outcome, so the in-flight guard is always
    /// released.
    pub fn spawn(&self, document: SelectedDocument, events: Sender<AppEvent>) {
        let client = self.clone();
        self.runtime.spawn(async move {
            let result = client.request(&document).await;
            let _ = events.send(AppEvent::SummarizeFinished { result });
        });
    }

    /// Single multipart POST carrying the document bytes.
    pub async fn request(&self, document: &SelectedDocument) -> Result<String, SummarizeError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| SummarizeError::MissingCredential(self.service.api_key_env.clone()))?;

        let mime = if document.mime_hint.is_empty() {
            "application/octet-stream"
        } else {
            document.mime_hint.as_str()
        };
        let part = Part::bytes(document.raw_bytes.clone())
            .file_name(document.name.clone())
            .mime_str(mime)
            .map_err(|e| SummarizeError::InvalidBody(e.to_string()))?;
        let form = Form::new().part("file", part);

        let url = self.service.endpoint();
        debug!(url = %url, size = document.byte_size, "issuing summarize request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(|d| d.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| INVALID_RESPONSE_DETAIL.to_string());
            warn!(status = status.as_u16(), detail = %detail, "summarize request failed");
            return Err(SummarizeError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SummarizeError::InvalidBody(e.to_string()))?;
        Ok(body
            .get("response")
            .and_then(|r| r.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| NO_SUMMARY_MESSAGE.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_message_embeds_status_and_detail() {
        let err = SummarizeError::Service {
            status: 413,
            detail: "File too large".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("413"));
        assert!(message.contains("File too large"));
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = SummarizeError::MissingCredential("SUMVIEW_API_KEY".to_string());
        assert!(err.to_string().contains("SUMVIEW_API_KEY"));
    }
}
