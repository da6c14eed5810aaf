//! PDF decode/rasterize boundary.
//!
//! The session only needs two operations from a PDF engine: decode
//! bytes into a page collection, and rasterize one page at a zoom
//! scale. The trait seam keeps the pdfium dependency out of the state
//! machine and lets tests substitute a deterministic engine.

use std::sync::Arc;

use pdfium_render::prelude::{PdfRenderConfig, Pdfium};
use thiserror::Error;

/// Errors from the PDF decode/rasterize capability.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("PDF engine unavailable: {0}")]
    Engine(String),

    #[error("failed to open PDF document: {0}")]
    Open(String),

    #[error("failed to render page {page}: {message}")]
    Render { page: u16, message: String },
}

/// One rasterized page: RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRaster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Opens document bytes into a [`PageSource`].
pub trait PdfEngine: Send + Sync {
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PageSource>, DecodeError>;
}

/// A decoded document serving rasterization requests.
///
/// Pages are 1-based, matching the user-visible page numbers. A source
/// is created and consumed on the worker thread that opened it and
/// never crosses a thread boundary, so implementations need not be
/// `Send`.
pub trait PageSource {
    fn page_count(&self) -> u16;
    fn rasterize(&self, page: u16, scale: f32) -> Result<PageRaster, DecodeError>;
}

/// Production engine backed by pdfium.
///
/// The pdfium shared library is bound lazily on first open; a missing
/// library surfaces as a decode failure for that document, not a
/// startup failure.
pub struct PdfiumEngine;

impl PdfiumEngine {
    pub fn new() -> Self {
        Self
    }

    fn bind() -> Result<Pdfium, DecodeError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| DecodeError::Engine(format!("failed to bind pdfium library: {e}")))?;
        Ok(Pdfium::new(bindings))
    }
}

impl Default for PdfiumEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfEngine for PdfiumEngine {
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PageSource>, DecodeError> {
        let pdfium = Self::bind()?;
        let shared = Arc::new(bytes.to_vec());
        let page_count = {
            let document = pdfium
                .load_pdf_from_byte_slice(shared.as_slice(), None)
                .map_err(|e| DecodeError::Open(e.to_string()))?;
            document.pages().len()
        };
        if page_count == 0 {
            return Err(DecodeError::Open("document has no pages".to_string()));
        }
        Ok(Box::new(PdfiumSource {
            pdfium,
            bytes: shared,
            page_count,
        }))
    }
}

/// Re-opens the document from shared bytes for every render, so the
/// source owns everything it needs and no pdfium object outlives one
/// call.
struct PdfiumSource {
    pdfium: Pdfium,
    bytes: Arc<Vec<u8>>,
    page_count: u16,
}

impl PageSource for PdfiumSource {
    fn page_count(&self) -> u16 {
        self.page_count
    }

    fn rasterize(&self, page: u16, scale: f32) -> Result<PageRaster, DecodeError> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(self.bytes.as_slice(), None)
            .map_err(|e| DecodeError::Open(e.to_string()))?;
        let page_ref = document
            .pages()
            .get(page.saturating_sub(1))
            .map_err(|e| DecodeError::Render {
                page,
                message: format!("page out of range: {e}"),
            })?;
        let bitmap = page_ref
            .render_with_config(&PdfRenderConfig::new().scale_page_by_factor(scale.max(0.25)))
            .map_err(|e| DecodeError::Render {
                page,
                message: e.to_string(),
            })?;
        Ok(PageRaster {
            width: bitmap.width() as u32,
            height: bitmap.height() as u32,
            pixels: bitmap.as_rgba_bytes(),
        })
    }
}
