mod artifact;
mod convert_options;
mod page_ranges;
mod pdf_format;
mod uploaded_file;

pub use artifact::Artifact;
pub use convert_options::ConvertOptions;
pub use page_ranges::is_valid_page_ranges;
pub use pdf_format::PdfFormat;
pub use uploaded_file::UploadedFile;
