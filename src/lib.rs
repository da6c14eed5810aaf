//! sumview: terminal document preview with remote summarization.
//!
//! The session core is a small state machine: a selected document is
//! classified, previewed (paged raster view for PDFs, scrollable text
//! for plain text), and optionally posted to a remote summarization
//! service under a single-flight guard. State transitions are pure
//! reducers; side effects (rasterization, network, clipboard) run on
//! workers and re-enter the session as events.

pub mod clipboard;
pub mod config;
pub mod document;
pub mod logging;
pub mod preview;
pub mod summarize;
pub mod ui;
