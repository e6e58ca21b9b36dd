use std::sync::Arc;

use axum::{extract::State, routing::get, Extension, Json, Router};

use simulado_core::users::{NewUser, User, UserRegistration};

use crate::auth::{self, CurrentUser};
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Public registration endpoint. The only way an identity enters the system.
pub(crate) async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserRegistration>,
) -> ApiResult<Json<User>> {
    payload.validate()?;
    let password_hash = auth::hash_password(payload.password.as_deref().unwrap_or_default())?;
    let new_user = NewUser {
        id: None,
        name: payload.name().to_string(),
        email: payload.email().to_string(),
        password_hash,
        is_active: true,
        is_staff: false,
    };
    let user = state.user_service.register_user(new_user).await?;
    Ok(Json(user))
}

async fn me(Extension(current): Extension<CurrentUser>) -> Json<User> {
    Json(current.0)
}

async fn lookup_disabled() -> ApiResult<()> {
    Err(ApiError::MethodNotSupported(
        "user lookup by id is not supported".to_string(),
    ))
}

async fn update_disabled() -> ApiResult<()> {
    Err(ApiError::MethodNotSupported(
        "user accounts cannot be updated through this API".to_string(),
    ))
}

async fn delete_disabled() -> ApiResult<()> {
    Err(ApiError::MethodNotSupported(
        "user accounts cannot be deleted through this API".to_string(),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/users/me", get(me)).route(
        "/users/{id}",
        get(lookup_disabled)
            .put(update_disabled)
            .delete(delete_disabled),
    )
}
