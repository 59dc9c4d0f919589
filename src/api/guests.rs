use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, GuestDto};

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GuestDto>>, ApiError> {
    let guests = state.store().list_guests().await?;

    Ok(Json(guests.into_iter().map(GuestDto::from).collect()))
}
