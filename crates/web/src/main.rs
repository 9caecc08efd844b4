use anyhow::Context;
use axum::Router;
use storage::HistoryStore;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::measurements::handlers::create_measurement,
        features::measurements::handlers::list_measurements,
        features::measurements::handlers::weight_chart,
    ),
    components(
        schemas(
            storage::dto::measurement::CreateMeasurementRequest,
            storage::dto::measurement::MeasurementResponse,
            storage::dto::measurement::RecordMeasurementResponse,
            storage::dto::measurement::ChartPoint,
            storage::dto::measurement::SortOrder,
            storage::models::Sex,
            storage::models::NutritionalStatus,
        )
    ),
    tags(
        (name = "measurements", description = "Ideal-weight measurement endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting ideal-weight API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = HistoryStore::new(&config.history_file);
    tracing::info!("Measurement history file: {}", store.path().display());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/measurements", features::measurements::routes::routes())
        .layer(cors)
        .with_state(store);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
