use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::{
    api::{ApiError, ApiResult},
    service,
    state::AppState,
};
use usersync_types::{CreateUserRequest, MessageResponse, UserAggregate};

fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest("Invalid user ID".to_string()))
}

/// GET /users/:id - User with address, company, posts and comments
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserAggregate>> {
    let user_id = parse_user_id(&user_id)?;
    let aggregate = service::get_user_aggregate(state.store.as_ref(), user_id)?;
    Ok(Json(aggregate))
}

/// DELETE /users - Remove all users, posts and comments
pub async fn delete_all_users(State(state): State<AppState>) -> ApiResult<Json<MessageResponse>> {
    service::delete_all(state.store.as_ref())?;
    Ok(Json(MessageResponse::new("All users deleted")))
}

/// DELETE /users/:id - Remove a user along with its posts and comments
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let user_id = parse_user_id(&user_id)?;
    service::delete_user(state.store.as_ref(), user_id)?;
    Ok(Json(MessageResponse::new("User deleted")))
}

/// PUT /users - Create a user from the nested shape and echo the body back
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let request: CreateUserRequest = serde_json::from_value(payload.clone())
        .map_err(|e| ApiError::BadRequest(format!("Invalid user payload: {}", e)))?;

    service::create_user(state.store.as_ref(), &request)?;

    Ok((StatusCode::CREATED, Json(payload)))
}
