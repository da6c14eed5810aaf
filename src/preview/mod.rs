//! Preview state machine: variant per document format, with
//! pagination/zoom sub-state for PDFs.
//!
//! Uses the MVI pattern: `state.rs` holds the tagged variant,
//! `intent.rs` the transitions requested by the session, `reducer.rs`
//! the pure transition function. Rendering lives in
//! `ui::preview_panel`.

mod intent;
mod reducer;
mod state;

pub use intent::PreviewIntent;
pub use reducer::PreviewReducer;
pub use state::{PreviewState, DEFAULT_SCALE, SCALE_MAX, SCALE_MIN, ZOOM_STEP};
