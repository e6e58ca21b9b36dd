use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};

use simulado_core::simulations::{Simulation, SimulationSubmission, SimulationUpdate};

use crate::auth::CurrentUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

async fn list_simulations(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Simulation>>> {
    let simulations = state.simulation_service.get_simulations(&current.0.id)?;
    Ok(Json(simulations))
}

/// Bulk creation: one submission yields one simulation per ambition the
/// caller owns, so the response is a collection.
async fn submit_simulations(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<SimulationSubmission>,
) -> ApiResult<Json<Vec<Simulation>>> {
    let simulations = state
        .simulation_service
        .submit_simulations(&current.0.id, payload)
        .await?;
    Ok(Json(simulations))
}

async fn update_simulation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(mut payload): Json<SimulationUpdate>,
) -> ApiResult<Json<Simulation>> {
    payload.id = Some(id);
    let simulation = state
        .simulation_service
        .update_simulation(&current.0, payload)
        .await?;
    Ok(Json(simulation))
}

async fn delete_simulation(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> ApiResult<StatusCode> {
    state
        .simulation_service
        .delete_simulation(&current.0, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn retrieve_disabled() -> ApiResult<()> {
    Err(ApiError::MethodNotSupported(
        "simulation lookup by id is not supported".to_string(),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/simulations", get(list_simulations).post(submit_simulations))
        .route(
            "/simulations/{id}",
            get(retrieve_disabled)
                .put(update_simulation)
                .delete(delete_simulation),
        )
}
