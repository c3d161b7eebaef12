mod multi_pdf_engine;
mod pdf_engine_factory;
mod qpdf_engine;
mod unoconv_pdf_engine;

pub use multi_pdf_engine::MultiPdfEngine;
pub use pdf_engine_factory::{PdfEngineFactory, PdfEngineFactoryError};
pub use qpdf_engine::{QpdfEngine, merge_args};
pub use unoconv_pdf_engine::UnoconvPdfEngine;
