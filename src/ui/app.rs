//! Session controller.
//!
//! Owns the selected document, the preview and request state machines,
//! the file browser dialog and the resource handles (raster worker,
//! display protocol). All state transitions go through reducers; the
//! controller performs the side effects they imply and consumes the
//! completions arriving as events.

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use image::{DynamicImage, RgbaImage};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tracing::{debug, error, warn};

use crate::clipboard::{normalize_rendered, ClipboardHandler, CopyOutcome};
use crate::document::{
    classify, decode_text, DocumentKind, PageRaster, PdfEngine, RasterJob, RasterWorker,
    SelectedDocument,
};
use crate::preview::{PreviewIntent, PreviewReducer, PreviewState, ZOOM_STEP};
use crate::summarize::{RequestState, SummarizeClient, SummarizeIntent, SummarizeReducer};
use crate::ui::browser::{self, BrowserIntent, BrowserReducer, BrowserState};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;

/// Fixed user-facing message for a PDF decode failure.
pub const PDF_DECODE_MESSAGE: &str = "Could not load PDF preview";

/// Prefix for a file read failure; the underlying error is appended.
pub const READ_FAILURE_PREFIX: &str = "Could not read file";

/// How long copy feedback stays on screen.
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// The current selection; replaced wholesale, never mutated.
    document: Option<SelectedDocument>,
    /// Preview state (MVI pattern).
    preview: PreviewState,
    /// Summarization request state (MVI pattern).
    request: RequestState,
    /// File browser dialog state (MVI pattern).
    browser: BrowserState,
    /// Monotonic render generation; async completions tagged with an
    /// older value are stale and discarded.
    generation: u64,
    /// Rasterization worker for the open PDF (resource, outside MVI).
    raster_worker: Option<RasterWorker>,
    /// Display protocol for the last accepted page raster.
    page_protocol: Option<(u16, StatefulProtocol)>,
    /// Scroll offset of the text preview.
    text_scroll: u16,
    spinner_tick: u8,
    copy_feedback: Option<(CopyOutcome, Instant)>,
    clipboard: ClipboardHandler,
    engine: Arc<dyn PdfEngine>,
    client: SummarizeClient,
    events: Sender<AppEvent>,
    image_picker: Picker,
}

impl App {
    pub fn new(
        engine: Arc<dyn PdfEngine>,
        client: SummarizeClient,
        events: Sender<AppEvent>,
        image_picker: Picker,
    ) -> Self {
        Self {
            should_quit: false,
            document: None,
            preview: PreviewState::default(),
            request: RequestState::default(),
            browser: BrowserState::default(),
            generation: 0,
            raster_worker: None,
            page_protocol: None,
            text_scroll: 0,
            spinner_tick: 0,
            copy_feedback: None,
            clipboard: ClipboardHandler::new(),
            engine,
            client,
            events,
            image_picker,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn document(&self) -> Option<&SelectedDocument> {
        self.document.as_ref()
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn browser(&self) -> &BrowserState {
        &self.browser
    }

    pub fn text_scroll(&self) -> u16 {
        self.text_scroll
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn copy_feedback(&self) -> Option<CopyOutcome> {
        self.copy_feedback.map(|(outcome, _)| outcome)
    }

    /// Page raster display state for the preview panel.
    pub fn page_protocol_mut(&mut self) -> Option<&mut StatefulProtocol> {
        self.page_protocol.as_mut().map(|(_, protocol)| protocol)
    }

    /// Page number of the raster currently on screen.
    pub fn rendered_page(&self) -> Option<u16> {
        self.page_protocol.as_ref().map(|(page, _)| *page)
    }

    // ---- selection ----------------------------------------------------

    /// Begin loading a file. The read happens off the UI thread; the
    /// packaged document re-enters as `DocumentLoaded`.
    pub fn open_document(&mut self, path: PathBuf) {
        if self.request.is_in_flight() {
            // File input is disabled while a request is outstanding.
            return;
        }
        self.generation += 1;
        let generation = self.generation;
        self.raster_worker = None;
        self.page_protocol = None;
        self.text_scroll = 0;
        dispatch_mvi!(self, preview, PreviewReducer, PreviewIntent::Selected);

        let events = self.events.clone();
        thread::spawn(move || match std::fs::read(&path) {
            Ok(bytes) => {
                let document = SelectedDocument::from_path(&path, bytes);
                let _ = events.send(AppEvent::DocumentLoaded {
                    generation,
                    document,
                });
            }
            Err(e) => {
                let _ = events.send(AppEvent::DocumentLoadFailed {
                    generation,
                    message: e.to_string(),
                });
            }
        });
    }

    fn on_document_loaded(&mut self, document: SelectedDocument) {
        debug!(name = %document.name, size = document.byte_size, "document loaded");
        let kind = classify(&document.mime_hint, &document.name);
        match kind {
            DocumentKind::Pdf => {
                let worker = RasterWorker::spawn(
                    Arc::clone(&self.engine),
                    document.raw_bytes.clone(),
                    self.generation,
                    self.events.clone(),
                );
                self.raster_worker = Some(worker);
            }
            DocumentKind::PlainText => {
                let generation = self.generation;
                let bytes = document.raw_bytes.clone();
                let events = self.events.clone();
                thread::spawn(move || {
                    let text = decode_text(&bytes);
                    let _ = events.send(AppEvent::TextDecoded {
                        generation,
                        content: text.content,
                        char_count: text.char_count,
                        line_count: text.line_count,
                    });
                });
            }
            DocumentKind::Unsupported => {
                dispatch_mvi!(
                    self,
                    preview,
                    PreviewReducer,
                    PreviewIntent::UnsupportedSelected
                );
            }
        }
        self.document = Some(document);
    }

    // ---- pagination / zoom --------------------------------------------

    pub fn change_page(&mut self, delta: i32) {
        let before = self.preview.clone();
        dispatch_mvi!(
            self,
            preview,
            PreviewReducer,
            PreviewIntent::ChangePage { delta }
        );
        if self.preview != before {
            self.request_page_render();
        }
    }

    pub fn change_zoom(&mut self, delta: f32) {
        let before = self.preview.clone();
        dispatch_mvi!(
            self,
            preview,
            PreviewReducer,
            PreviewIntent::ChangeZoom { delta }
        );
        if self.preview != before {
            self.request_page_render();
        }
    }

    pub fn zoom_in(&mut self) {
        self.change_zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.change_zoom(-ZOOM_STEP);
    }

    pub fn scroll_text(&mut self, delta: i32) {
        if matches!(self.preview, PreviewState::Text { .. }) {
            self.text_scroll = self.text_scroll.saturating_add_signed(delta as i16);
        }
    }

    /// Queue a rasterization of the current page at the current scale,
    /// tagged with a fresh generation so earlier in-flight renders are
    /// discarded when they complete late.
    fn request_page_render(&mut self) {
        let PreviewState::Pdf {
            current_page,
            scale,
            ..
        } = self.preview
        else {
            return;
        };
        let Some(worker) = &self.raster_worker else {
            return;
        };
        self.generation += 1;
        worker.request(RasterJob {
            page: current_page,
            scale,
            generation: self.generation,
        });
    }

    // ---- summarization ------------------------------------------------

    /// Start a summarization for the selected document. A call while a
    /// request is in flight is rejected with no observable effect.
    pub fn summarize(&mut self) {
        let Some(document) = self.document.clone() else {
            debug!("summarize requested without a selection");
            return;
        };
        if self.request.is_in_flight() {
            debug!("summarize rejected: request already in flight");
            return;
        }
        dispatch_mvi!(self, request, SummarizeReducer, SummarizeIntent::Start);
        self.client.spawn(document, self.events.clone());
    }

    /// Copy the last summary as plain text. Contained: the outcome is
    /// only visible as transient feedback.
    pub fn copy_summary(&mut self) {
        let Some(summary) = self.request.summary() else {
            return;
        };
        let text = normalize_rendered(summary);
        let outcome = self.clipboard.copy(&text);
        self.copy_feedback = Some((outcome, Instant::now()));
    }

    // ---- browser dialog -----------------------------------------------

    pub fn open_browser(&mut self) {
        if self.request.is_in_flight() {
            return;
        }
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        self.load_browser_dir(dir);
    }

    fn load_browser_dir(&mut self, dir: PathBuf) {
        match browser::list_directory(&dir) {
            Ok(entries) => {
                dispatch_mvi!(
                    self,
                    browser,
                    BrowserReducer,
                    BrowserIntent::Loaded { dir, entries }
                );
            }
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "failed to list directory");
            }
        }
    }

    pub fn browser_move(&mut self, delta: i32) {
        dispatch_mvi!(
            self,
            browser,
            BrowserReducer,
            BrowserIntent::MoveCursor { delta }
        );
    }

    pub fn browser_confirm(&mut self) {
        let Some(entry) = self.browser.selected().cloned() else {
            return;
        };
        if entry.is_dir {
            self.load_browser_dir(entry.path);
        } else {
            dispatch_mvi!(self, browser, BrowserReducer, BrowserIntent::Close);
            self.open_document(entry.path);
        }
    }

    pub fn browser_close(&mut self) {
        dispatch_mvi!(self, browser, BrowserReducer, BrowserIntent::Close);
    }

    // ---- event handling -----------------------------------------------

    /// Consume one non-input event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(_, _) => {}

            AppEvent::DocumentLoaded {
                generation,
                document,
            } => {
                if generation != self.generation {
                    debug!("discarding stale document load");
                    return;
                }
                self.on_document_loaded(document);
            }

            AppEvent::DocumentLoadFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    return;
                }
                error!(error = %message, "file read failed");
                dispatch_mvi!(
                    self,
                    preview,
                    PreviewReducer,
                    PreviewIntent::DecodeFailed {
                        message: format!("{}: {}", READ_FAILURE_PREFIX, message),
                    }
                );
            }

            AppEvent::PdfOpened {
                generation,
                page_count,
            } => {
                if generation != self.generation {
                    debug!("discarding stale pdf open");
                    return;
                }
                dispatch_mvi!(
                    self,
                    preview,
                    PreviewReducer,
                    PreviewIntent::PdfReady { page_count }
                );
                self.request_page_render();
            }

            AppEvent::PdfOpenFailed {
                generation,
                message,
            } => {
                if generation != self.generation {
                    return;
                }
                error!(error = %message, "pdf decode failed");
                dispatch_mvi!(
                    self,
                    preview,
                    PreviewReducer,
                    PreviewIntent::DecodeFailed {
                        message: PDF_DECODE_MESSAGE.to_string(),
                    }
                );
            }

            AppEvent::PageRendered {
                generation,
                page,
                raster,
            } => {
                if generation != self.generation {
                    debug!(page, "discarding stale page render");
                    return;
                }
                self.accept_raster(page, raster);
            }

            AppEvent::PageRenderFailed {
                generation,
                page,
                message,
            } => {
                // The previous raster stays on screen either way.
                if generation == self.generation {
                    error!(page, error = %message, "page render failed");
                }
            }

            AppEvent::TextDecoded {
                generation,
                content,
                char_count,
                line_count,
            } => {
                if generation != self.generation {
                    debug!("discarding stale text decode");
                    return;
                }
                dispatch_mvi!(
                    self,
                    preview,
                    PreviewReducer,
                    PreviewIntent::TextReady {
                        content,
                        char_count,
                        line_count,
                    }
                );
            }

            AppEvent::SummarizeFinished { result } => {
                let result = match result {
                    Ok(summary) => Ok(summary),
                    Err(e) => {
                        warn!(error = %e, "summarization failed");
                        Err(e.to_string())
                    }
                };
                dispatch_mvi!(
                    self,
                    request,
                    SummarizeReducer,
                    SummarizeIntent::Finished { result }
                );
            }

            // Input is routed through `ui::input`, not here.
            AppEvent::Input(_) => {}
        }
    }

    fn accept_raster(&mut self, page: u16, raster: PageRaster) {
        let Some(image) = RgbaImage::from_raw(raster.width, raster.height, raster.pixels) else {
            warn!(page, "raster buffer size mismatch");
            return;
        };
        let protocol = self
            .image_picker
            .new_resize_protocol(DynamicImage::ImageRgba8(image));
        self.page_protocol = Some((page, protocol));
    }

    fn on_tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
        if let Some((_, since)) = self.copy_feedback {
            if since.elapsed() >= COPY_FEEDBACK_TTL {
                self.copy_feedback = None;
            }
        }
    }
}
