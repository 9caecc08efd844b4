use storage::{
    HistoryStore,
    dto::measurement::{
        ChartPoint, CreateMeasurementRequest, MeasurementResponse, RecordMeasurementResponse,
        SortOrder,
    },
    models::MeasurementRecord,
    repository::history::HistoryRepository,
    services::classification,
};
use tokio::task;

use crate::error::{WebError, WebResult};

/// Compute the classification for one submission and append it to the
/// history. Returns the new record plus the updated history so the caller
/// can show both without a second round trip.
pub async fn record_measurement(
    store: HistoryStore,
    request: CreateMeasurementRequest,
) -> WebResult<RecordMeasurementResponse> {
    let date = request
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let (record, history) = run_blocking(move || {
        let record = classification::compute_measurement(
            date,
            request.height_cm,
            request.actual_weight_kg,
            request.sex,
        )?;
        let history = HistoryRepository::new(&store).append(record.clone())?;
        Ok((record, history))
    })
    .await?;

    Ok(RecordMeasurementResponse {
        measurement: record.into(),
        history: sort_for_display(history, SortOrder::Desc),
    })
}

/// Full history, sorted by measurement date for display.
pub async fn list_measurements(
    store: HistoryStore,
    order: SortOrder,
) -> WebResult<Vec<MeasurementResponse>> {
    let records = run_blocking(move || HistoryRepository::new(&store).load()).await?;

    Ok(sort_for_display(records, order))
}

/// Chart series: actual weight over time, oldest first.
pub async fn weight_chart(store: HistoryStore) -> WebResult<Vec<ChartPoint>> {
    let records = run_blocking(move || HistoryRepository::new(&store).load()).await?;

    Ok(chart_points(records))
}

/// Date ordering happens here, never in the store: the file keeps insertion
/// order. Stable sort, so same-date records stay in insertion order for both
/// directions.
fn sort_for_display(
    mut records: Vec<MeasurementRecord>,
    order: SortOrder,
) -> Vec<MeasurementResponse> {
    match order {
        SortOrder::Asc => records.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Desc => records.sort_by(|a, b| b.date.cmp(&a.date)),
    }

    records.into_iter().map(MeasurementResponse::from).collect()
}

fn chart_points(mut records: Vec<MeasurementRecord>) -> Vec<ChartPoint> {
    records.sort_by(|a, b| a.date.cmp(&b.date));

    records.iter().map(ChartPoint::from).collect()
}

/// Repository I/O is blocking file access; keep it off the async workers.
async fn run_blocking<T, F>(f: F) -> WebResult<T>
where
    F: FnOnce() -> storage::error::Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| WebError::InternalServerError(format!("blocking storage task failed: {e}")))?
        .map_err(WebError::from)
}
