use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use simulado_core::ambitions::{Ambition, AmbitionUpdate, NewAmbition};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn list_ambitions(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Ambition>>> {
    let ambitions = state.ambition_service.get_ambitions(&current.0.id)?;
    Ok(Json(ambitions))
}

async fn create_ambition(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(mut payload): Json<NewAmbition>,
) -> ApiResult<Json<Ambition>> {
    // Ownership comes from the bearer token, never from the body.
    payload.user_id = current.0.id.clone();
    let ambition = state.ambition_service.create_ambition(payload).await?;
    Ok(Json(ambition))
}

async fn update_ambition(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(mut payload): Json<AmbitionUpdate>,
) -> ApiResult<Json<Ambition>> {
    payload.id = Some(id);
    let ambition = state
        .ambition_service
        .update_ambition(&current.0, payload)
        .await?;
    Ok(Json(ambition))
}

async fn delete_ambition(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state
        .ambition_service
        .delete_ambition(&current.0, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn retrieve_disabled() -> ApiResult<()> {
    Err(ApiError::MethodNotSupported(
        "ambition lookup by id is not supported".to_string(),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ambitions", get(list_ambitions).post(create_ambition))
        .route(
            "/ambitions/{id}",
            get(retrieve_disabled)
                .put(update_ambition)
                .delete(delete_ambition),
        )
}
