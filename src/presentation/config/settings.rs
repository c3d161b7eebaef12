use std::path::PathBuf;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::{Deserialize, Serialize};

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub scratch: ScratchSettings,
    pub office: OfficeSettings,
    pub pdf_engines: PdfEngineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    pub body_limit_mb: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_seconds: 30,
            body_limit_mb: 64,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScratchSettings {
    /// Parent of the per-request working directories.
    pub root: PathBuf,
}

impl Default for ScratchSettings {
    fn default() -> Self {
        Self {
            root: std::env::temp_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OfficeSettings {
    pub unoconv_binary: String,
    pub process_timeout_seconds: u64,
}

impl Default for OfficeSettings {
    fn default() -> Self {
        Self {
            unoconv_binary: "unoconv".to_string(),
            process_timeout_seconds: 120,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PdfEngineSettings {
    /// Engines tried in order, by name.
    pub engines: Vec<String>,
    pub qpdf_binary: String,
    pub process_timeout_seconds: u64,
}

impl Default for PdfEngineSettings {
    fn default() -> Self {
        Self {
            engines: vec!["qpdf".to_string(), "unoconv".to_string()],
            qpdf_binary: "qpdf".to_string(),
            process_timeout_seconds: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// One JSON object per line instead of human readable text.
    pub json_format: bool,
    /// `EnvFilter` directives. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json_format: false,
            filter: "info,folio=debug,tower_http=debug".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then `appsettings.<Environment>` if present, then `APP__*` variables
    /// (`APP__SERVER__PORT=8080`, `APP__PDF_ENGINES__ENGINES=qpdf,unoconv`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("pdf_engines.engines")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
