mod office_extensions;
mod unoconv;
mod unoconv_converter;

pub use office_extensions::OFFICE_EXTENSIONS;
pub use unoconv::{Unoconv, pdf_args, select_pdf_version};
pub use unoconv_converter::UnoconvConverter;
