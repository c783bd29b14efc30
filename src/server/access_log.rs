use std::time::Instant;

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::Response
};
use log::info;

/// Wraps every request: times the rest of the chain and, once it has
/// produced a response, logs `<METHOD> <TARGET> - <ELAPSED_MS>`.
/// The response is passed back untouched.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let target = request_target(req.uri());
    let start = Instant::now();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis();
    info!("{}", access_line(&method, &target, elapsed_ms));
    return response;
}

pub fn access_line(method: &Method, target: &str, elapsed_ms: u128) -> String {
    format!("{} {} - {}", method, target, elapsed_ms)
}

/// Path plus query string, as the client sent it.
fn request_target(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_owned())
        .unwrap_or_else(|| uri.path().to_owned())
}
