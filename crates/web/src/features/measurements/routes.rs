use axum::{Router, routing::get};
use storage::HistoryStore;

use super::handlers::{create_measurement, list_measurements, weight_chart};

pub fn routes() -> Router<HistoryStore> {
    Router::new()
        .route("/", get(list_measurements).post(create_measurement))
        .route("/chart", get(weight_chart))
}
