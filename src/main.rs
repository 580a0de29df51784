use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use shruti::application::ports::StagingStore;
use shruti::application::services::TranscriptionService;
use shruti::infrastructure::audio::{SymphoniaAudioDecoder, WavChunkEncoder};
use shruti::infrastructure::observability::{init_tracing, TracingConfig};
use shruti::infrastructure::storage::LocalStagingStore;
use shruti::infrastructure::stt::TranscriptionClientFactory;
use shruti::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig {
        environment: settings.environment.to_string(),
        ..TracingConfig::default()
    });

    let decoder = Arc::new(SymphoniaAudioDecoder);
    let encoder = Arc::new(WavChunkEncoder);
    let client = TranscriptionClientFactory::create(&settings.stt)?;
    let staging_store: Arc<dyn StagingStore> = Arc::new(LocalStagingStore::new(PathBuf::from(
        &settings.storage.staging_dir,
    ))?);

    let transcription_service = Arc::new(TranscriptionService::new(
        decoder,
        encoder,
        client,
        Arc::clone(&staging_store),
        settings.transcription.language.clone(),
        settings.transcription.chunk_duration_ms,
        settings.transcription.max_concurrency,
        Duration::from_secs(settings.transcription.recognition_timeout_secs),
    ));

    let state = AppState {
        transcription_service,
        staging_store,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
