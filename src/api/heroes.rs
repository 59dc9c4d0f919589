use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, HeroDetailDto, HeroDto};

pub async fn list_heroes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<HeroDto>>, ApiError> {
    let heroes = state.store().list_heroes().await?;

    Ok(Json(heroes.into_iter().map(HeroDto::from).collect()))
}

pub async fn get_hero(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<HeroDetailDto>, ApiError> {
    let (hero, hero_powers) = state
        .store()
        .get_hero(id)
        .await?
        .ok_or_else(ApiError::hero_not_found)?;

    Ok(Json(HeroDetailDto::new(hero, hero_powers)))
}
