use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{ApiError, AppState, CreateHeroPowerRequest, HeroPowerDetailDto};

pub async fn create_hero_power(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateHeroPowerRequest>,
) -> Result<(StatusCode, Json<HeroPowerDetailDto>), ApiError> {
    let (hero_power, hero, power) = state
        .store()
        .create_hero_power(req.strength, req.hero_id, req.power_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(HeroPowerDetailDto::new(hero_power, hero, power)),
    ))
}
