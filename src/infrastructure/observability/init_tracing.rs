use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::presentation::config::Settings;

use super::TracingConfig;

/// Installs the global subscriber, JSON or plain text, and logs the conversion setup.
pub fn init_tracing(config: &TracingConfig, settings: &Settings) {
    let json_layer = config.json_format.then(|| {
        fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });
    let text_layer = (!config.json_format).then(|| {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        host = %settings.server.host,
        port = settings.server.port,
        unoconv = %settings.office.unoconv_binary,
        pdf_engines = ?settings.pdf_engines.engines,
        scratch_root = %settings.scratch.root.display(),
        "Conversion server starting"
    );
}
