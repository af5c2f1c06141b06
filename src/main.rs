use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use vitrine::application::ports::{ImageRepository, ImageStore};
use vitrine::application::services::{CaptionService, GalleryService, IngestionService};
use vitrine::infrastructure::observability::{TracingConfig, init_tracing};
use vitrine::infrastructure::persistence::{
    InMemoryImageRepository, PgImageRepository, create_pool, run_migrations,
};
use vitrine::infrastructure::storage::ObjectImageStore;
use vitrine::infrastructure::vision::CaptioningFactory;
use vitrine::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    let mut tracing_config = TracingConfig::default();
    tracing_config.environment = environment.as_str().to_string();
    tracing_config.json_format |= settings.logging.json;
    init_tracing(tracing_config, settings.server.port);

    let repository: Arc<dyn ImageRepository> = match settings.database.url.as_deref() {
        Some(url) if !url.trim().is_empty() => {
            let pool = create_pool(url, settings.database.max_connections).await?;
            run_migrations(&pool).await?;
            Arc::new(PgImageRepository::new(pool))
        }
        _ => {
            tracing::warn!("No database URL configured; image records are kept in memory");
            Arc::new(InMemoryImageRepository::new())
        }
    };

    let image_store: Arc<dyn ImageStore> = Arc::new(ObjectImageStore::local(PathBuf::from(
        &settings.storage.local_path,
    ))?);

    let captioning = CaptioningFactory::create(&settings.vision)?;
    let caption_service = Arc::new(CaptionService::new(captioning, Arc::clone(&image_store)));

    let ingestion_service = Arc::new(IngestionService::new(
        Arc::clone(&repository),
        Arc::clone(&image_store),
        caption_service,
    ));
    let gallery_service = Arc::new(GalleryService::new(
        Arc::clone(&repository),
        Arc::clone(&image_store),
    ));

    let state = AppState {
        ingestion_service,
        gallery_service,
        max_upload_bytes: settings.server.max_upload_mb * 1024 * 1024,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
