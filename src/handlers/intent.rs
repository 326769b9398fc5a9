use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    error::{AppError, AppResult},
};

pub async fn get_intent(State(state): State<AppState>) -> AppResult<Response> {
    let records = state.intent_service.latest().await?;

    let body = serde_json::to_vec(&records).map_err(AppError::Encode)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
