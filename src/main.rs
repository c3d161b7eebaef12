use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use folio::application::services::OfficeConversionService;
use folio::infrastructure::observability::{TracingConfig, init_tracing};
use folio::infrastructure::office::{Unoconv, UnoconvConverter};
use folio::infrastructure::pdf_engines::PdfEngineFactory;
use folio::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::from_settings(environment, &settings.logging),
        &settings,
    );

    tokio::fs::create_dir_all(&settings.scratch.root).await?;

    let unoconv = Arc::new(Unoconv::new(
        settings.office.unoconv_binary.clone(),
        Duration::from_secs(settings.office.process_timeout_seconds),
    ));
    let converter = Arc::new(UnoconvConverter::new(Arc::clone(&unoconv)));
    let engine = Arc::new(PdfEngineFactory::create(
        &settings.pdf_engines,
        Arc::clone(&unoconv),
    )?);

    let conversion_service = Arc::new(OfficeConversionService::new(converter, engine));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        conversion_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
