use std::sync::Arc;

use rand::RngCore;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use simulado_core::{
    ambitions::{AmbitionService, AmbitionServiceTrait},
    simulations::{SimulationService, SimulationServiceTrait},
    users::{UserService, UserServiceTrait},
};
use simulado_storage_sqlite::{
    ambitions::AmbitionRepository,
    db::{self, write_actor},
    simulations::SimulationRepository,
    users::UserRepository,
};

use crate::auth::AuthManager;
use crate::config::Config;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub ambition_service: Arc<dyn AmbitionServiceTrait + Send + Sync>,
    pub simulation_service: Arc<dyn SimulationServiceTrait + Send + Sync>,
    pub auth: Arc<AuthManager>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("SIM_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service: Arc<dyn UserServiceTrait + Send + Sync> =
        Arc::new(UserService::new(user_repository));

    let ambition_repository = Arc::new(AmbitionRepository::new(pool.clone(), writer.clone()));
    let ambition_service: Arc<dyn AmbitionServiceTrait + Send + Sync> =
        Arc::new(AmbitionService::new(ambition_repository.clone()));

    let simulation_repository = Arc::new(SimulationRepository::new(pool.clone(), writer.clone()));
    let simulation_service: Arc<dyn SimulationServiceTrait + Send + Sync> = Arc::new(
        SimulationService::new(simulation_repository, ambition_repository),
    );

    let jwt_secret = match config.jwt_secret.as_deref() {
        Some(raw) => crate::auth::decode_secret_key(raw)?,
        None => {
            tracing::warn!(
                "SIM_JWT_SECRET is not set; using an ephemeral secret, tokens will not survive a restart"
            );
            let mut secret = vec![0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut secret);
            secret
        }
    };
    let auth = Arc::new(AuthManager::new(&jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        user_service,
        ambition_service,
        simulation_service,
        auth,
        db_path,
    }))
}
