use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}

/// Convert a ServerError into an HTML error page
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();
    let html = error_page(status, &err.to_string()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
