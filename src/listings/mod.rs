mod client;
mod fetch_error;
mod models;

pub use client::{FetchPayload, ListingSource, ListingsClient};
pub use fetch_error::FetchError;
pub use models::{ListingsResponse, RawListing};
