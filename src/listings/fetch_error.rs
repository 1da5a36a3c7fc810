use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Listings API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Response decode error: {0}")]
    Decode(String),
}
