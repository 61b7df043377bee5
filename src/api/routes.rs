use axum::{
    routing::{get, post},
    Router,
};

use crate::{api::handlers, api_state::ApiState};

pub fn router(api_state: ApiState) -> Router {
    Router::new()
        .route("/recommend", post(handlers::recommend))
        .route("/recommendations", get(handlers::list_recommendations))
        .with_state(api_state)
}
