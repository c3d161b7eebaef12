mod office_converter;
mod pdf_engine;

pub use office_converter::{OfficeConverter, OfficeConverterError};
pub use pdf_engine::{PdfEngine, PdfEngineError};
