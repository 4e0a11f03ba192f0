//! 服务信息处理器

use axum::{extract::State, response::Json};

use super::model::{HealthReport, ServerInfo};
use crate::app::AppState;
use crate::core::error::CoreError;

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(state.info_service.server_info_or_default())
}

/// GET /test
pub async fn test_info(State(state): State<AppState>) -> Result<Json<ServerInfo>, CoreError> {
    let info = state.info_service.server_info()?;
    Ok(Json(info))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.info_service.health())
}
