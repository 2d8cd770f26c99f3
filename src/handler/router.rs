//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Responses never depend on the
//! request body; only its size is recorded.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry, LogSink};
use crate::mock::MOCK_FACES;
use crate::routing::{self, RouteAction, ROUTES};
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Buf, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Display,
{
    let method = req.method().clone();
    let target = request_target(&req);
    let action = routing::match_route(ROUTES, &method, &target);

    // 1. Read and discard the body, POST only
    let body_bytes = if method == Method::POST {
        drain_body(req.into_body(), state.log.as_ref()).await
    } else {
        0
    };

    // 2. Build the canned response
    let mut entry = AccessLogEntry::new(method.to_string(), target);
    entry.body_bytes = body_bytes;
    let response = dispatch_action(action, &method, &mut entry);
    entry.status = response.status();

    // 3. Access log
    logger::log_access(state.log.as_ref(), &entry);

    Ok(response)
}

/// Path plus query, as sent by the client
fn request_target<B>(req: &Request<B>) -> String {
    req.uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), |pq| pq.as_str().to_string())
}

/// Dispatch to the response builder for `action`
fn dispatch_action(
    action: RouteAction,
    method: &Method,
    entry: &mut AccessLogEntry,
) -> Response<Full<Bytes>> {
    match action {
        RouteAction::Preflight => http::build_options_response(),
        RouteAction::Status => http::build_status_response(),
        RouteAction::Detect => {
            entry.faces = Some(MOCK_FACES.len());
            http::build_detect_response()
        }
        RouteAction::NotFound => http::build_not_found_response(&entry.target),
        RouteAction::NotImplemented => http::build_not_implemented_response(method.as_str()),
    }
}

/// Consume the body frame by frame and return its size in bytes.
///
/// A read error ends the drain early; the bytes seen so far are reported.
async fn drain_body<B>(body: B, log: &dyn LogSink) -> usize
where
    B: Body,
    B::Error: Display,
{
    let mut body = std::pin::pin!(body);
    let mut total = 0;

    while let Some(frame) = body.frame().await {
        match frame {
            Ok(frame) => {
                if let Some(data) = frame.data_ref() {
                    total += data.remaining();
                }
            }
            Err(e) => {
                logger::log_request_warning(log, &format!("Failed to read request body: {e}"));
                break;
            }
        }
    }

    total
}
