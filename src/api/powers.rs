use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, PowerDto, UpdatePowerRequest};

pub async fn list_powers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PowerDto>>, ApiError> {
    let powers = state.store().list_powers().await?;

    Ok(Json(powers.into_iter().map(PowerDto::from).collect()))
}

pub async fn get_power(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<PowerDto>, ApiError> {
    let power = state
        .store()
        .get_power(id)
        .await?
        .ok_or_else(ApiError::power_not_found)?;

    Ok(Json(power.into()))
}

pub async fn update_power(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdatePowerRequest>,
) -> Result<Json<PowerDto>, ApiError> {
    let power = state
        .store()
        .update_power(id, req.description)
        .await?
        .ok_or_else(ApiError::power_not_found)?;

    Ok(Json(power.into()))
}
