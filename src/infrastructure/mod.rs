pub mod observability;
pub mod office;
pub mod pdf_engines;
pub mod process;
