use std::{net::SocketAddr, time::Instant};

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::presentation::middleware::request_id::RequestId;

/// Emit one structured line per request once the response is ready.
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map_or_else(|| "-".to_string(), |id| id.as_str().to_owned());
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "-".to_string(), |ConnectInfo(addr)| addr.to_string());

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %request_id,
        remote_addr = %remote_addr,
        "request"
    );

    response
}
