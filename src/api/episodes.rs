use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, EpisodeDetailDto, EpisodeDto};

pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EpisodeDto>>, ApiError> {
    let episodes = state.store().list_episodes().await?;

    Ok(Json(episodes.into_iter().map(EpisodeDto::from).collect()))
}

pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<EpisodeDetailDto>, ApiError> {
    let (episode, appearances) = state
        .store()
        .get_episode(id)
        .await?
        .ok_or_else(ApiError::episode_not_found)?;

    Ok(Json(EpisodeDetailDto::new(episode, appearances)))
}
