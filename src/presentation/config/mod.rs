mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use settings::{
    LoggingSettings, OfficeSettings, PdfEngineSettings, ScratchSettings, ServerSettings, Settings,
};
