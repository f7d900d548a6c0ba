use std::sync::Arc;

use admin_mirror::api::{HealthApi, HooksApi};
use admin_mirror::config::{
    init_database, init_logging, migrate_database, BootstrapSettings, SystemEnvironment,
};
use admin_mirror::services::MirrorService;
use admin_mirror::AppData;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_logging(&SystemEnvironment).map_err(std::io::Error::other)?;

    let settings = BootstrapSettings::from_env(&SystemEnvironment);

    // Connect to the database holding the derived admins collection and
    // bring the schema up to date before serving any events.
    let db = init_database(&settings).await.map_err(std::io::Error::other)?;
    migrate_database(&db).await.map_err(std::io::Error::other)?;

    let app_data = Arc::new(AppData::init(db));
    let mirror_service = Arc::new(MirrorService::new(app_data));

    let api_service = OpenApiService::new(
        (HealthApi, HooksApi::new(mirror_service)),
        "Admin Mirror API",
        "1.0.0",
    )
    .server(format!("http://{}/api", settings.listen_addr()));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", settings.listen_addr());

    Server::new(TcpListener::bind(settings.listen_addr().to_string()))
        .run(app)
        .await
}
