//! Request dispatch entry module
//!
//! Entry point for HTTP request processing: method validation, route capture,
//! dispatch, rendering, logging and dispatcher teardown.

use crate::config::AppState;
use crate::dispatch::{DispatchOutcome, Dispatcher, ErrorRecord, ParameterBag};
use crate::http;
use crate::logger::{self, DispatchLogEntry};
use crate::render::JsonRenderer;
use crate::routing::PathRouteProvider;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Uri};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(dispatch_request(req.method(), req.uri(), &state))
}

/// Dispatch one request and render its outcome
pub fn dispatch_request(method: &Method, uri: &Uri, state: &AppState) -> Response<Full<Bytes>> {
    // 1. Check HTTP method
    if let Some(resp) = check_http_method(method) {
        return resp;
    }

    let started = Instant::now();
    let dispatch_config = &state.config.dispatch;

    // 2. Capture the route for this request
    let provider = PathRouteProvider::new(method.as_str(), uri.path(), uri.query())
        .with_defaults(&dispatch_config.default_callback, &dispatch_config.default_params);

    // 3. Dispatch with no explicit callback so the captured route applies
    let mut dispatcher = Dispatcher::from_provider(&state.registry, &provider);
    let no_callback: [&str; 0] = [];
    dispatcher.dispatch(&no_callback, ParameterBag::default());

    let outcome = dispatcher.outcome().cloned().unwrap_or_else(|| {
        DispatchOutcome::Failure(ErrorRecord::new(500, "Dispatch produced no outcome"))
    });
    let callback = dispatcher
        .default_route()
        .map(|route| route.callback.clone())
        .unwrap_or_default();
    dispatcher.teardown();

    // 4. Render through the normalizer
    let mut renderer = JsonRenderer::new();
    state.normalizer.render(&outcome.to_value(), &mut renderer);
    let status = outcome.status();

    // 5. Log the dispatch
    if state.config.logging.access_log {
        let mut entry = DispatchLogEntry::new(method.as_str(), uri.path());
        entry.callback = callback;
        entry.status = status;
        if let DispatchOutcome::Failure(record) = &outcome {
            entry.message = Some(record.message.clone());
        }
        entry.elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_dispatch(&entry, &state.config.logging.access_log_format);
    }

    http::build_view_response(status, renderer.into_body(), *method == Method::HEAD)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::modules;
    use http_body_util::BodyExt;
    use hyper::StatusCode;
    use serde_json::Value;

    fn state() -> AppState {
        let mut config = Config::load_from("does-not-exist/config").unwrap();
        config.logging.access_log = false;
        AppState::new(&config, modules::registry())
    }

    async fn call(method: Method, uri: &str) -> (StatusCode, Value) {
        let uri: Uri = uri.parse().unwrap();
        let resp = dispatch_request(&method, &uri, &state());
        let status = resp.status();
        let is_json = resp
            .headers()
            .get("Content-Type")
            .is_some_and(|v| *v == "application/json");
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else if is_json {
            serde_json::from_slice(&bytes).unwrap()
        } else {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_root_uses_default_callback() {
        let (status, body) = call(Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "home");
    }

    #[tokio::test]
    async fn test_three_segment_route() {
        let (status, body) = call(Method::GET, "/widgets/admin/show").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "widgets/admin");
    }

    #[tokio::test]
    async fn test_query_params_reach_controller() {
        let (status, body) = call(Method::GET, "/widgets/show?id=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "widgets/show");
        assert_eq!(body["data"]["widget"]["id"], 2);
    }

    #[tokio::test]
    async fn test_unknown_component_renders_error_envelope() {
        let (status, body) = call(Method::GET, "/gadgets").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["view"], "json");
        assert_eq!(body["data"]["message"], "Component not found");
        assert_eq!(body["data"]["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_unknown_method_renders_error_envelope() {
        let (status, body) = call(Method::GET, "/widgets/fly").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["data"]["message"], "Method not found");
    }

    #[tokio::test]
    async fn test_handler_failure_status() {
        let (status, body) = call(Method::GET, "/widgets/admin/purge").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["data"]["status"], 403);
    }

    #[tokio::test]
    async fn test_scalar_result_uses_message_view() {
        let (status, body) = call(Method::GET, "/home/index").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "message");
        assert!(body["data"]["message"].is_string());
    }

    #[tokio::test]
    async fn test_head_has_no_body() {
        let (status, body) = call(Method::HEAD, "/widgets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_method_checks() {
        let (status, body) = call(Method::POST, "/widgets").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, "405 Method Not Allowed");

        let (status, body) = call(Method::OPTIONS, "/widgets").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[test]
    fn test_rejected_methods_skip_dispatch() {
        let uri: Uri = "/widgets/admin/purge".parse().unwrap();
        let resp = dispatch_request(&Method::DELETE, &uri, &state());
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()["Allow"], "GET, HEAD, OPTIONS");
        assert_eq!(resp.headers()["Content-Type"], "text/plain");
    }
}
