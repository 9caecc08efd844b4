use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    HistoryStore,
    dto::measurement::{
        ChartPoint, CreateMeasurementRequest, HistoryQuery, MeasurementResponse,
        RecordMeasurementResponse,
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/measurements",
    request_body = CreateMeasurementRequest,
    responses(
        (status = 200, description = "Measurement computed and appended to the history", body = RecordMeasurementResponse),
        (status = 400, description = "Invalid input; nothing is persisted"),
        (status = 500, description = "History storage unavailable")
    ),
    tag = "measurements"
)]
pub async fn create_measurement(
    State(store): State<HistoryStore>,
    Json(payload): Json<CreateMeasurementRequest>,
) -> Result<Response, WebError> {
    payload.validate()?;

    let response = services::record_measurement(store, payload).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/measurements",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Full measurement history in display order", body = Vec<MeasurementResponse>),
        (status = 500, description = "History storage unavailable")
    ),
    tag = "measurements"
)]
pub async fn list_measurements(
    State(store): State<HistoryStore>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, WebError> {
    let response = services::list_measurements(store, query.order).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/measurements/chart",
    responses(
        (status = 200, description = "Actual weight over time, oldest first", body = Vec<ChartPoint>),
        (status = 500, description = "History storage unavailable")
    ),
    tag = "measurements"
)]
pub async fn weight_chart(State(store): State<HistoryStore>) -> Result<Response, WebError> {
    let response = services::weight_chart(store).await?;

    Ok(Json(response).into_response())
}
