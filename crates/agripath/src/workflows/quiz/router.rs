use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::draft::QuizSubmission;
use super::recommend;

/// Router exposing the questionnaire scoring endpoint.
pub fn quiz_router() -> Router {
    Router::new().route("/api/v1/quiz/recommendation", post(recommendation_handler))
}

pub(crate) async fn recommendation_handler(
    axum::Json(submission): axum::Json<QuizSubmission>,
) -> Response {
    match submission.validate() {
        Ok(answers) => {
            let result = recommend(&answers);
            (StatusCode::OK, axum::Json(result)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
                "field": error.field().key(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
