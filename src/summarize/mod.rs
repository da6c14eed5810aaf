//! Remote summarization: single-flight request lifecycle.
//!
//! `state.rs`/`intent.rs`/`reducer.rs` hold the MVI state machine;
//! `client.rs` is the HTTP boundary. The session controller checks the
//! guard before spawning the network task, and the reducer rejects a
//! `Start` while a request is in flight, so a second summarize action
//! has no observable effect.

mod client;
mod intent;
mod reducer;
mod state;

pub use client::{SummarizeClient, SummarizeError, NO_SUMMARY_MESSAGE};
pub use intent::SummarizeIntent;
pub use reducer::SummarizeReducer;
pub use state::RequestState;
