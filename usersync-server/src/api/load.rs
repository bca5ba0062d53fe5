use axum::{extract::State, http::StatusCode};

use crate::{api::ApiResult, state::AppState, sync};

/// GET /load - Mirror remote users, posts and comments into the database
pub async fn load_data(State(state): State<AppState>) -> ApiResult<StatusCode> {
    sync::load(state.remote.as_ref(), state.store.as_ref()).await?;
    Ok(StatusCode::OK)
}
