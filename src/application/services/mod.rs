mod conversion_error;
pub mod form_binding;
mod office_conversion_service;
mod stage;

pub use conversion_error::{ConversionError, ErrorClass};
pub use form_binding::{OfficeRequest, bind};
pub use office_conversion_service::OfficeConversionService;
pub use stage::Stage;
