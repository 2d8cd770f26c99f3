//! HTTP response building module
//!
//! Every JSON response carries the same content type and the wildcard CORS
//! origin so browser-based clients can call the mock directly.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::mock::{ErrorResponse, StatusResponse, MOCK_FACES};

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Ocp-Apim-Subscription-Key";

/// Build 200 server status response
pub fn build_status_response() -> Response<Full<Bytes>> {
    build_json_response(StatusCode::OK, &StatusResponse::now(), true)
}

/// Build 200 face detection response
pub fn build_detect_response() -> Response<Full<Bytes>> {
    build_json_response(StatusCode::OK, &MOCK_FACES, true)
}

/// Build 404 Not Found response naming the requested target
pub fn build_not_found_response(target: &str) -> Response<Full<Bytes>> {
    build_json_response(
        StatusCode::NOT_FOUND,
        &ErrorResponse::not_found(target),
        false,
    )
}

/// Build 501 Not Implemented response
pub fn build_not_implemented_response(method: &str) -> Response<Full<Bytes>> {
    build_json_response(
        StatusCode::NOT_IMPLEMENTED,
        &ErrorResponse::not_implemented(method),
        false,
    )
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Serialize `body` and wrap it in a JSON response.
///
/// Success payloads are pretty-printed; error payloads are compact.
fn build_json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
    pretty: bool,
) -> Response<Full<Bytes>> {
    let serialized = if pretty {
        serde_json::to_vec_pretty(body)
    } else {
        serde_json::to_vec(body)
    };

    let json = match serialized {
        Ok(j) => j,
        Err(e) => {
            crate::logger::log_error(&format!("Failed to serialize response: {e}"));
            return Response::builder()
                .status(StatusCode::INTERNAL_SERVER_ERROR)
                .header("Content-Type", JSON_CONTENT_TYPE)
                .body(Full::new(Bytes::from_static(
                    br#"{"error":"Internal Server Error"}"#,
                )))
                .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())));
        }
    };

    Response::builder()
        .status(status)
        .header("Content-Type", JSON_CONTENT_TYPE)
        .header("Content-Length", json.len())
        .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .body(Full::new(Bytes::from(json)))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
