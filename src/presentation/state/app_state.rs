use std::sync::Arc;

use crate::application::ports::{OfficeConverter, PdfEngine};
use crate::application::services::OfficeConversionService;
use crate::presentation::config::Settings;

pub struct AppState<O, P>
where
    O: OfficeConverter,
    P: PdfEngine,
{
    pub conversion_service: Arc<OfficeConversionService<O, P>>,
    pub settings: Settings,
}

impl<O, P> Clone for AppState<O, P>
where
    O: OfficeConverter,
    P: PdfEngine,
{
    fn clone(&self) -> Self {
        Self {
            conversion_service: Arc::clone(&self.conversion_service),
            settings: self.settings.clone(),
        }
    }
}
