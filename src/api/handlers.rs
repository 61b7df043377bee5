use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use prompta::{RecommendError, RecommendRequest, ANONYMOUS_USER};

use crate::{api::session::Identity, api_state::ApiState};

pub const INVALID_REQUEST_MESSAGE: &str =
    "Invalid request. Domain and prompts array are required.";
pub const CONFIGURATION_ERROR_MESSAGE: &str =
    "Server configuration error. Please try again later.";
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to get recommendations";

pub async fn recommend(
    State(state): State<ApiState>,
    Identity(requester): Identity,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE);
    };

    match state.recommender.recommend(requester, request).await {
        Ok(recommendations) => (
            StatusCode::OK,
            Json(serde_json::json!({ "recommendations": recommendations })),
        )
            .into_response(),
        Err(RecommendError::EmptyDomain) => {
            error_response(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE)
        }
        Err(e @ RecommendError::Configuration(_)) => {
            tracing::error!("Recommendation provider misconfigured: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                CONFIGURATION_ERROR_MESSAGE,
            )
        }
        Err(e) => {
            tracing::error!("Recommendation pipeline failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
        }
    }
}

pub async fn list_recommendations(
    State(state): State<ApiState>,
    Identity(requester): Identity,
) -> Response {
    let user = requester.unwrap_or_else(|| ANONYMOUS_USER.to_string());

    match state.recommender.history(&user).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load recommendation history: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR_MESSAGE)
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
