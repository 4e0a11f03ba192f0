//! 核心中间件模块

use std::{any::Any, net::SocketAddr, time::Instant};

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::info;
use uuid::Uuid;

use super::error::CoreError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 每个响应都会带上的安全响应头
pub const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("content-security-policy", "default-src 'self'"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    ("strict-transport-security", "max-age=15552000; includeSubDomains"),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// 请求日志中间件
///
/// 每个请求一行 combined 格式的访问日志，并附带请求 ID 和耗时。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let request_line = format!("{} {} {:?}", req.method(), req.uri(), req.version());
    let referrer = header_or_dash(&req, header::REFERER);
    let user_agent = header_or_dash(&req, header::USER_AGENT);

    let mut response = next.run(req).await;
    let status = response.status();
    let content_length = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }

    let latency_ms = start.elapsed().as_millis() as u64;
    info!(
        request_id = %request_id,
        latency_ms,
        "{} - - [{}] \"{}\" {} {} \"{}\" \"{}\"",
        remote_addr,
        chrono::Utc::now().format("%d/%b/%Y:%H:%M:%S %z"),
        request_line,
        status.as_u16(),
        content_length,
        referrer,
        user_agent,
    );

    response
}

fn header_or_dash(req: &Request, name: HeaderName) -> String {
    req.headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string()
}

/// 安全响应头中间件
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    for &(name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}

/// 允许任意来源的 CORS 配置
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}

/// 处理器 panic 时的兜底响应，交给 `CatchPanicLayer::custom`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    CoreError::Internal(format!("handler panicked: {}", detail)).into_response()
}
