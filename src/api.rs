use crate::community::{CommunityKind, CommunityRecord, Directory};
use crate::error::{CrierError, ErrorContext};
use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Client;
use serde_json::Value;

/// Default API host; override with `--api-url` for test or self-hosted servers.
pub const DEFAULT_API_URL: &str = "https://slack.com";

/// Everything outside the unreserved URI characters (letters, digits, `-._~`)
/// gets percent-encoded in query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a query parameter value, UTF-8 bytes included.
///
/// Spaces become `%20` (not `+`) and `&` becomes `%26`, so the encoded value
/// can never alter the query-string structure.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// HTTP client for the platform's REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    /// Create a client against the default API host
    pub fn new(token: &str) -> Self {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Create a client against a specific API host
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        let client = Client::builder()
            .user_agent("crier/0.1.0")
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Compose `<base>/api/<method>?token=<token>`.
    ///
    /// `method` is a trusted literal chosen by the caller and is not encoded.
    pub fn build_url(&self, method: &str) -> String {
        format!("{}/api/{}?token={}", self.base_url, method, self.token)
    }

    /// Fetch the raw community records of `kind`.
    ///
    /// An empty array is a valid empty result; a missing or non-array
    /// collection key is an invalid response. Entries are taken as-is.
    pub async fn list_communities(
        &self,
        kind: CommunityKind,
    ) -> Result<Vec<CommunityRecord>, CrierError> {
        let method = kind.list_method();
        let envelope = self.call(&self.build_url(&method), &method).await?;

        let records = envelope
            .get(kind.collection_key())
            .and_then(Value::as_array)
            .ok_or_else(|| {
                CrierError::InvalidResponse(format!(
                    "response from {method} has no '{}' list",
                    kind.collection_key()
                ))
            })?;

        Ok(records
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()).unwrap_or_default())
            .collect())
    }

    /// Post `text` to the community identified by `id`.
    pub async fn post_message(&self, id: &str, text: &str) -> Result<(), CrierError> {
        let url = format!(
            "{}&channel={}&text={}",
            self.build_url("chat.postMessage"),
            id,
            encode_query_value(text)
        );
        self.call(&url, "chat.postMessage").await?;
        Ok(())
    }

    /// Issue one GET and decode the response envelope.
    ///
    /// A decoded envelope whose `ok` is anything but `true` is a remote
    /// failure; the reason falls back to "Unknown error" when the envelope
    /// carries none.
    async fn call(&self, url: &str, method: &str) -> Result<Value, CrierError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .crier_transport_err(format!("Request to {method} failed"))?;

        if !response.status().is_success() {
            return Err(CrierError::Transport(format!(
                "HTTP {} from {method}",
                response.status()
            )));
        }

        let body: Value = response
            .json()
            .await
            .crier_response_err(format!("Response from {method} is not valid JSON"))?;

        let envelope = body.as_object().ok_or_else(|| {
            CrierError::InvalidResponse(format!("Response from {method} is not a JSON object"))
        })?;

        if !envelope.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            let reason = envelope
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            return Err(CrierError::Remote(reason.to_string()));
        }

        Ok(body)
    }
}

#[async_trait]
impl Directory for ApiClient {
    async fn list_communities(
        &self,
        kind: CommunityKind,
    ) -> Result<Vec<CommunityRecord>, CrierError> {
        ApiClient::list_communities(self, kind).await
    }
}
