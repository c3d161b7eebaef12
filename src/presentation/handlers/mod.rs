mod convert;
mod error;
mod health;
mod output;
mod upload;

pub use convert::{OUTPUT_FILENAME_HEADER, convert_handler};
pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
