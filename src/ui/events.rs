//! Session events and the input/tick pump.
//!
//! Everything that can happen to the session arrives on one channel:
//! key presses and ticks from the pump thread, decode and render
//! completions from document workers, the summarize completion from
//! the network task. The UI loop drains the channel and hands each
//! event to the session controller on the main thread of control.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent};

use crate::document::{PageRaster, SelectedDocument};
use crate::summarize::SummarizeError;

pub enum AppEvent {
    /// Key press from the terminal.
    Input(KeyEvent),

    /// Periodic tick (spinner animation, feedback expiry).
    Tick,

    /// Terminal resized.
    Resize(u16, u16),

    /// File bytes were read and packaged.
    DocumentLoaded {
        generation: u64,
        document: SelectedDocument,
    },

    /// File could not be read.
    DocumentLoadFailed { generation: u64, message: String },

    /// PDF decode finished; the worker is ready for rasterize jobs.
    PdfOpened { generation: u64, page_count: u16 },

    /// PDF decode failed; terminal for this document.
    PdfOpenFailed { generation: u64, message: String },

    /// One page was rasterized.
    PageRendered {
        generation: u64,
        page: u16,
        raster: PageRaster,
    },

    /// A rasterization failed; the previous raster stays on screen.
    PageRenderFailed {
        generation: u64,
        page: u16,
        message: String,
    },

    /// Text decode finished.
    TextDecoded {
        generation: u64,
        content: String,
        char_count: usize,
        line_count: usize,
    },

    /// The summarization request completed, success or failure. This
    /// is the only exit from the in-flight state.
    SummarizeFinished {
        result: Result<String, SummarizeError>,
    },
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the pump thread: polls terminal input, emits a tick at
    /// `tick_rate`, forwards both into the shared channel.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let pump_tx = tx.clone();
        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                if crossterm::event::poll(timeout).unwrap_or(false) {
                    match crossterm::event::read() {
                        Ok(Event::Key(key)) => {
                            if pump_tx.send(AppEvent::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if pump_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(_) => break,
                    }
                }
                if last_tick.elapsed() >= tick_rate {
                    if pump_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
        Self { rx, tx }
    }

    /// Sender for workers that complete asynchronously.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
