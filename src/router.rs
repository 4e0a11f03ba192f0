//! 路由定义

use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    middleware,
    routing::get,
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir, trace::TraceLayer};

use crate::app::{info::handler as info, users::handler as users, AppState};
use crate::config::Config;
use crate::core::{
    error::CoreError,
    middleware::{cors_layer, handle_panic, request_logging_middleware, security_headers_middleware},
};

pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// JSON 请求体上限
pub const BODY_LIMIT_BYTES: usize = 100 * 1024;

/// 未匹配的路径或方法
pub async fn route_not_found() -> CoreError {
    CoreError::NotFound(ROUTE_NOT_FOUND.to_string())
}

/// 创建完整的应用路由（含全部中间件），不绑定端口
pub fn create_router(config: &Config, state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(info::root).fallback(route_not_found))
        .route("/test", get(info::test_info).fallback(route_not_found))
        .route("/health", get(info::health).fallback(route_not_found))
        .route(
            "/api/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(route_not_found),
        )
        .route("/api/users/:id", get(users::get_user).fallback(route_not_found));

    // 未配置挂载路径时静态文件服务不生效
    let prefix = config
        .static_prefix
        .as_deref()
        .map(|p| p.trim_end_matches('/'))
        .filter(|p| p.starts_with('/'));
    if let Some(prefix) = prefix {
        // 非 GET/HEAD 请求同样落到 JSON 404
        let static_files = ServeDir::new(&config.static_dir)
            .call_fallback_on_method_not_allowed(true)
            .not_found_service(route_not_found.into_service());
        router = router.nest_service(prefix, static_files);
    }

    router
        .fallback(route_not_found)
        // 应用中间件层 (后添加的在外层)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}
