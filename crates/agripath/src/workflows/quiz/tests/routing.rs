use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use crate::workflows::quiz::router::recommendation_handler;
use crate::workflows::quiz::{quiz_router, RiskTolerance};

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn handler_returns_recommendation() {
    let submission = Respondent::new(GAP_26, RiskTolerance::Variable).submission();

    let response = recommendation_handler(axum::Json(submission)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["recommendedPath"], "Agribusiness Management");
    assert_eq!(body["confidenceLevel"], "high");
}

#[tokio::test]
async fn handler_rejects_incomplete_ranking() {
    let mut submission = Respondent::new(GAP_26, RiskTolerance::Variable).submission();
    submission.priorities_ranked.pop();

    let response = recommendation_handler(axum::Json(submission)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["field"], "prioritiesRanked");
}

#[tokio::test]
async fn route_accepts_json_payloads() {
    let submission = Respondent::new(SCENARIO_C, RiskTolerance::ImpactOverIncome)
        .year(2)
        .subjects(uniform_ratings(9))
        .submission();

    let response = quiz_router()
        .oneshot(
            Request::post("/api/v1/quiz/recommendation")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&submission).expect("serializable"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["recommendedPath"], "Research");
    assert!(!body["subjectClusters"]
        .as_array()
        .expect("clusters array")
        .is_empty());
}

#[tokio::test]
async fn route_rejects_second_year_without_ratings() {
    let submission = Respondent::new(SCENARIO_C, RiskTolerance::ImpactOverIncome)
        .year(2)
        .submission();

    let response = quiz_router()
        .oneshot(
            Request::post("/api/v1/quiz/recommendation")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&submission).expect("serializable"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["field"], "subjectLiking");
}
