use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{ApiError, AppState, AppearanceDetailDto, CreateAppearanceRequest};

pub async fn create_appearance(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAppearanceRequest>,
) -> Result<(StatusCode, Json<AppearanceDetailDto>), ApiError> {
    let (appearance, episode, guest) = state
        .store()
        .create_appearance(req.rating, req.episode_id, req.guest_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AppearanceDetailDto::new(appearance, episode, guest)),
    ))
}
