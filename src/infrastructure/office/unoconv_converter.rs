use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{OfficeConverter, OfficeConverterError};
use crate::application::scope::Cancellation;
use crate::domain::ConvertOptions;

use super::office_extensions::OFFICE_EXTENSIONS;
use super::unoconv::Unoconv;

pub struct UnoconvConverter {
    unoconv: Arc<Unoconv>,
    extensions: Vec<String>,
}

impl UnoconvConverter {
    pub fn new(unoconv: Arc<Unoconv>) -> Self {
        Self {
            unoconv,
            extensions: OFFICE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[async_trait]
impl OfficeConverter for UnoconvConverter {
    async fn pdf(
        &self,
        cancellation: &Cancellation,
        input_path: &Path,
        output_path: &Path,
        options: &ConvertOptions,
    ) -> Result<(), OfficeConverterError> {
        self.unoconv
            .pdf(cancellation, input_path, output_path, options)
            .await
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }
}
