use crate::listings::FetchError;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use std::time::Duration;

const USER_AGENT: &str = concat!("homelengo/", env!("CARGO_PKG_VERSION"));

/// Anything that can hand back the raw `{ data: { list: [...] } }` payload.
pub trait ListingSource: Send + Sync {
    fn fetch_listings(&self, payload: &FetchPayload) -> Result<Value, FetchError>;
}

/// Request body for the listings API. Opaque to us: it is sent as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FetchPayload(Map<String, Value>);

impl FetchPayload {
    /// `{ "<key>": size }`, the API's page-size request.
    pub fn page_size(key: &str, size: usize) -> Self {
        let mut map = Map::new();
        map.insert(key.to_string(), Value::from(size));
        Self(map)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

pub struct ListingsClient {
    client: Client,
    api_url: String,
}

impl ListingsClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }
}

impl ListingSource for ListingsClient {
    fn fetch_listings(&self, payload: &FetchPayload) -> Result<Value, FetchError> {
        tracing::debug!(url = %self.api_url, ?payload, "fetching listings");

        let resp = self
            .client
            .post(&self.api_url)
            .json(payload)
            .send()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<Value>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
