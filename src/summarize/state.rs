//! State of the summarization request.

use crate::ui::mvi::UiState;

/// Lifecycle of the remote summarization call.
///
/// At most one request is outstanding at a time; the session never
/// resets this automatically — only a completion moves it out of
/// `InFlight`, and a previous outcome stays visible until the next
/// explicit action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,

    InFlight,

    Succeeded {
        /// Raw summary text as returned by the service, before any
        /// line-break rendering. The copy action binds to this.
        summary: String,
    },

    Failed {
        message: String,
    },
}

impl UiState for RequestState {}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Succeeded { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
