use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;
use serde_json::json;

pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value).map_err(|_| ServerError::InternalError)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// `{"error": "..."}` with the error's status code.
pub fn json_error_response(err: ServerError) -> Response {
    let status = err.status();
    json_response(status, &json!({ "error": err.to_string() }))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
