//! Document selection, classification and decoding.

mod classifier;
mod pdf;
mod selected;
mod text;
mod worker;

pub use classifier::{classify, DocumentKind, PDF_MIME, TEXT_MIME};
pub use pdf::{DecodeError, PageRaster, PageSource, PdfEngine, PdfiumEngine};
pub use selected::{format_byte_size, SelectedDocument};
pub use text::{decode_text, TextContent};
pub use worker::{RasterJob, RasterWorker};
