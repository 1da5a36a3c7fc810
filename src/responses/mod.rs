pub mod errors;
pub mod html;

pub use errors::{error_response, ResultResp};

// Normal HTML response
pub use html::html_response;
