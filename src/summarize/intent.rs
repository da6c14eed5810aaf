//! Intents for the summarization lifecycle.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SummarizeIntent {
    /// User requested a summary. Ignored while a request is in
    /// flight (single-flight guard; rejected, not queued).
    Start,

    /// The request finished. `Err` carries the user-facing message.
    Finished { result: Result<String, String> },
}

impl Intent for SummarizeIntent {}
