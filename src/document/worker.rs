//! Per-document rasterization worker.
//!
//! One thread per opened PDF: it decodes the bytes through the engine,
//! reports the page count, then serves rasterize jobs until its job
//! sender is dropped. Every completion re-enters the session as an
//! event tagged with the render generation captured when the job was
//! issued; the session discards stale generations.

use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::document::pdf::PdfEngine;
use crate::ui::events::AppEvent;

/// One rasterization request.
#[derive(Debug, Clone, Copy)]
pub struct RasterJob {
    pub page: u16,
    pub scale: f32,
    pub generation: u64,
}

/// Handle to a running rasterization worker. Dropping the handle
/// closes the job channel and lets the thread exit.
pub struct RasterWorker {
    jobs: Sender<RasterJob>,
}

impl RasterWorker {
    /// Spawn a worker for one document. `generation` tags the open
    /// outcome so a completion for a replaced document is ignored.
    pub fn spawn(
        engine: Arc<dyn PdfEngine>,
        bytes: Vec<u8>,
        generation: u64,
        events: Sender<AppEvent>,
    ) -> Self {
        let (tx, rx) = mpsc::channel::<RasterJob>();
        let spawned = thread::Builder::new()
            .name("pdf-raster".to_string())
            .spawn(move || {
                let source = match engine.open(&bytes) {
                    Ok(source) => source,
                    Err(e) => {
                        warn!(error = %e, "pdf decode failed");
                        let _ = events.send(AppEvent::PdfOpenFailed {
                            generation,
                            message: e.to_string(),
                        });
                        return;
                    }
                };
                let _ = events.send(AppEvent::PdfOpened {
                    generation,
                    page_count: source.page_count(),
                });

                while let Ok(job) = rx.recv() {
                    match source.rasterize(job.page, job.scale) {
                        Ok(raster) => {
                            let _ = events.send(AppEvent::PageRendered {
                                generation: job.generation,
                                page: job.page,
                                raster,
                            });
                        }
                        Err(e) => {
                            let _ = events.send(AppEvent::PageRenderFailed {
                                generation: job.generation,
                                page: job.page,
                                message: e.to_string(),
                            });
                        }
                    }
                }
                debug!("raster worker exiting");
            });
        if let Err(e) = spawned {
            warn!(error = %e, "failed to spawn raster worker");
        }
        Self { jobs: tx }
    }

    /// Queue a rasterization. Send failures mean the worker already
    /// exited (decode failure); the open-failed event covers that.
    pub fn request(&self, job: RasterJob) {
        let _ = self.jobs.send(job);
    }
}
