use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod appearances;
mod episodes;
mod error;
mod guests;
mod hero_powers;
mod heroes;
mod powers;
mod types;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,

    pub config: Config,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::new(&config.general.database_path).await?;

    Ok(Arc::new(AppState { store, config }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/heroes", get(heroes::list_heroes))
        .route("/heroes/{id}", get(heroes::get_hero))
        .route("/powers", get(powers::list_powers))
        .route(
            "/powers/{id}",
            get(powers::get_power).patch(powers::update_power),
        )
        .route("/hero_powers", post(hero_powers::create_hero_power))
        .route("/episodes", get(episodes::list_episodes))
        .route("/episodes/{id}", get(episodes::get_episode))
        .route("/guests", get(guests::list_guests))
        .route("/appearances", post(appearances::create_appearance))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
