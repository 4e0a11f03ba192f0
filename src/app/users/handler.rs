//! 用户处理器

use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Json,
};
use serde_json::Value;

use super::model::{CreatedUser, User};
use crate::app::AppState;
use crate::core::{error::CoreError, extract::JsonBody, response::Created};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_service.list_users())
}

/// GET /api/users/:id
///
/// 路径参数无法解码（例如非法的 UTF-8 百分号编码）时走 500 兜底
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<User>, CoreError> {
    let Path(id) =
        id.map_err(|e| CoreError::Internal(format!("failed to decode user id: {}", e)))?;
    let user = state.user_service.get_user(&id)?;
    Ok(Json(user))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Created<CreatedUser>, CoreError> {
    let payload = state.user_service.parse_create_request(body)?;
    let user = state.user_service.create_user(payload)?;
    Ok(Created(user))
}
